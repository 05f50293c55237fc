//! Driver configuration loaded from `argprof.toml`.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Default config file name looked up in the pipeline root.
pub const CONFIG_FILE: &str = "argprof.toml";

/// Top-level driver configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Notebook execution settings.
    #[serde(default)]
    pub executor: ExecutorConfig,
}

/// External notebook executor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutorConfig {
    /// Program to run, resolved through `PATH` when not a path.
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before the notebook path.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self { program: default_program(), args: default_args() }
    }
}

fn default_program() -> String {
    "jupyter".to_string()
}

fn default_args() -> Vec<String> {
    ["nbconvert", "--to", "notebook", "--execute", "--inplace"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.executor.program.trim().is_empty() {
            return Err(AppError::config_error("executor.program must not be empty"));
        }
        Ok(())
    }
}

/// Parse and validate configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<PipelineConfig, AppError> {
    let config: PipelineConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
