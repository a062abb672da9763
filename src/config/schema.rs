//! Settings schema.
//!
//! Settings live in `.subflow.yml`:
//!
//! ```yaml
//! format: json
//! default_output: quiet
//! resolve_short_ids: true
//! ```

use serde::{Deserialize, Serialize};

use crate::document::DocumentFormat;

/// User settings for the `subflow` CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Format of extracted documents when `--format` is not given.
    pub format: DocumentFormat,

    /// Output verbosity when no `--verbose`/`--quiet` flag is given.
    pub default_output: OutputMode,

    /// Qualify bare target names against the workflow id.
    pub resolve_short_ids: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: DocumentFormat::default(),
            default_output: OutputMode::default(),
            resolve_short_ids: true,
        }
    }
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}
