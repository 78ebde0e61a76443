//! CLI argument parsing using clap.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::problem::Problem;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

const AFTER_HELP: &str = "\
Input format (stdin):
  n  v1 v2 ... vn  [target]

Examples:
  $ printf '3\\n-5 -1 -9\\n' | numscan max
  $ printf '4\\n2 7 11 15\\n9\\n' | numscan two-sum
  $ numscan judge two-sum ./testcases --json";

/// Maximum and two-sum scans over integers read from stdin
#[derive(Parser, Debug)]
#[command(
    name = "numscan",
    version = env!("CARGO_PKG_VERSION"),
    about = "Maximum and two-sum scans over integers read from stdin",
    next_line_help = true,
    styles = clap_cargo_style(),
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the maximum of n integers
    Max {
        /// Output a JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Print two positions whose values sum to the target, or -1
    #[command(name = "two-sum")]
    TwoSum {
        /// Output a JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Run a problem over a directory of test-case files
    Judge {
        /// Problem to run
        #[arg(value_enum)]
        problem: Problem,

        /// Directory holding `<name>.txt` inputs and optional `<name>.out` answers
        dir: PathBuf,

        /// Per-case time limit in milliseconds (overrides config)
        #[arg(long, value_name = "MS")]
        time_limit_ms: Option<u64>,

        /// Output a JSON envelope
        #[arg(long)]
        json: bool,
    },

    /// Create .numscan/settings.toml with default values
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,
}
