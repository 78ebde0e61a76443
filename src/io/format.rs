//! Output format selection.

use serde::{Deserialize, Serialize};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain answers, one per line
    #[default]
    Text,
    /// A JSON envelope per command
    Json,
}

impl OutputFormat {
    /// `--json` wins; otherwise fall back to the configured format.
    pub fn resolve(json_flag: bool, configured: OutputFormat) -> Self {
        if json_flag { Self::Json } else { configured }
    }

    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}
