//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! - Default values
//! - TOML configuration file (`.numscan/settings.toml` or `--config <FILE>`)
//! - Environment variable overrides
//! - CLI argument overrides (applied by the commands)
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `NUMSCAN_` and use double
//! underscores to separate nested levels:
//! - `NUMSCAN_OUTPUT__FORMAT=json` sets `output.format`
//! - `NUMSCAN_LOGGING__DEFAULT=debug` sets `logging.default`
//! - `NUMSCAN_JUDGE__TIME_LIMIT_MS=500` sets `judge.time_limit_ms`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::io::OutputFormat;

/// Directory holding the settings file, searched for from the current directory upward.
pub const CONFIG_DIR: &str = ".numscan";
pub const CONFIG_FILE: &str = "settings.toml";
const ENV_PREFIX: &str = "NUMSCAN_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Directory containing `.numscan`, when one was found
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub judge: JudgeConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    /// Default output format when `--json` is not given
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level for every target (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target level overrides, e.g. `judge = "debug"`
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct JudgeConfig {
    /// Wall-clock limit for a single test case
    #[serde(default = "default_time_limit_ms")]
    pub time_limit_ms: u64,

    /// Extension of test-case input files
    #[serde(default = "default_input_extension")]
    pub input_extension: String,

    /// Extension of expected-output files
    #[serde(default = "default_expected_extension")]
    pub expected_extension: String,
}

fn default_version() -> u32 { 1 }
fn default_log_level() -> String { "warn".to_string() }
fn default_time_limit_ms() -> u64 { 1000 }
fn default_input_extension() -> String { "txt".to_string() }
fn default_expected_extension() -> String { "out".to_string() }

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            workspace_root: None,
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
            judge: JudgeConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: HashMap::new(),
        }
    }
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: default_time_limit_ms(),
            input_extension: default_input_extension(),
            expected_extension: default_expected_extension(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources, discovering the workspace config.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Self::figment(&config_path)
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                if settings.workspace_root.is_none() {
                    settings.workspace_root = Self::workspace_root();
                }
                settings
            })
    }

    /// Load configuration from a specific file (plus defaults and environment).
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref()).extract().map_err(Box::new)
    }

    fn figment(config_path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels; single underscores stay
            .merge(Env::prefixed(ENV_PREFIX).map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }

    /// Find the nearest `.numscan/settings.toml`, searching from the current
    /// directory up to the filesystem root.
    pub fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Directory where `.numscan` is located.
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Save current configuration to file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }

    /// Write a default settings file under the current directory.
    pub fn init_config_file(force: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = PathBuf::from(CONFIG_DIR).join(CONFIG_FILE);

        if !force && config_path.exists() {
            return Err("Configuration file already exists. Use --force to overwrite".into());
        }

        let mut settings = Settings::default();
        if let Ok(current_dir) = std::env::current_dir() {
            settings.workspace_root = Some(current_dir);
        }

        settings.save(&config_path)?;
        tracing::info!("[config] wrote {}", config_path.display());

        Ok(config_path)
    }
}
