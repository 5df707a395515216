#![forbid(unsafe_code)]

use std::path::Path;

use anyhow::{Context, Result};
use natureal_footprint::CategoryValues;
use natureal_forms::FeedbackPolicy;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "NATUREAL_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimatorConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Personal footprint above which the "reduce" suggestion is shown.
    pub suggestion_threshold: f64,
    /// Values behind `natureal dashboard`.
    pub dashboard: CategoryValues,
    /// Emit JSON even without `--json`.
    pub json_output: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            log_filter: "natureal=info".to_string(),
            suggestion_threshold: FeedbackPolicy::default().suggestion_threshold,
            dashboard: CategoryValues::default(),
            json_output: false,
        }
    }
}

impl EstimatorConfig {
    /// Reads the file named by `NATUREAL_CONFIG`, or falls back to defaults.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = Self::from_json(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn feedback_policy(&self) -> FeedbackPolicy {
        FeedbackPolicy {
            suggestion_threshold: self.suggestion_threshold,
        }
    }
}
