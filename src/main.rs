use clap::Parser;
use std::path::Path;

use numscan::cli::commands::{init, judge, solve};
use numscan::cli::{Cli, Commands};
use numscan::config::Settings;
use numscan::io::{ExitCode, OutputFormat};
use numscan::logging;
use numscan::problem::Problem;

fn load_settings(path: Option<&Path>) -> Result<Settings, String> {
    match path {
        Some(path) if !path.is_file() => Err(format!(
            "Configuration file not found: {}",
            path.display()
        )),
        Some(path) => Settings::load_from(path).map_err(|e| e.to_string()),
        None => Settings::load().map_err(|e| e.to_string()),
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let mut settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        // Explicit --config must load; a discovered file may fall back.
        Err(e) if cli.config.is_some() => {
            eprintln!("Configuration error: {e}");
            return ExitCode::GeneralError.into();
        }
        Err(e) => {
            eprintln!("Configuration error: {e}");
            eprintln!("Using default configuration for now.");
            Settings::default()
        }
    };

    logging::init_with_config(&settings.logging);
    tracing::debug!("[cli] {:?}", cli.command);

    let exit_code = match cli.command {
        Commands::Max { json } => {
            solve::run(Problem::Max, OutputFormat::resolve(json, settings.output.format))
        }
        Commands::TwoSum { json } => {
            solve::run(Problem::TwoSum, OutputFormat::resolve(json, settings.output.format))
        }
        Commands::Judge {
            problem,
            dir,
            time_limit_ms,
            json,
        } => {
            if let Some(limit) = time_limit_ms {
                settings.judge.time_limit_ms = limit;
            }
            let format = OutputFormat::resolve(json, settings.output.format);
            judge::run(problem, &dir, &settings.judge, format)
        }
        Commands::Init { force } => init::run_init(force),
        Commands::Config => init::run_config(&settings),
    };

    exit_code.into()
}
