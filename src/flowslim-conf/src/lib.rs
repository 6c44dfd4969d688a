use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default locations matching the serverless-workflow checkout layout the
/// orchestrator works against.
const DEFAULT_INPUT: &str = "serverless-workflow/consolidated_workflow_schema.json";
const DEFAULT_OUTPUT: &str = "serverless-workflow/id_based_workflow_schema.json";

/// Where the consolidated workflow schema is read from and where the
/// narrowed schema is written to.
///
/// The paths are handed to the tool explicitly at construction time, so
/// different invocations can operate on different checkouts without any
/// process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl SchemaPaths {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        SchemaPaths {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl Default for SchemaPaths {
    fn default() -> Self {
        SchemaPaths::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

impl fmt::Display for SchemaPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input schema: {}", self.input.display())?;
        write!(f, "Output schema: {}", self.output.display())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Optional on-disk configuration. Any field left out of the file falls
/// back to the defaults in [SchemaPaths].
#[derive(JsonSchema, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input_schema: Option<PathBuf>,
    #[serde(default)]
    pub output_schema: Option<PathBuf>,
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            tracing::debug!(config_path = %config_path.display(), "no config file found, using default paths");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the schema paths, with configured values taking precedence
    /// over the defaults.
    pub fn schema_paths(&self) -> SchemaPaths {
        let defaults = SchemaPaths::default();
        SchemaPaths {
            input: self.input_schema.clone().unwrap_or(defaults.input),
            output: self.output_schema.clone().unwrap_or(defaults.output),
        }
    }
}
