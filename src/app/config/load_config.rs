//! Driver configuration loading from the pipeline root.

use std::path::Path;

use crate::domain::config::{self, CONFIG_FILE};
use crate::domain::{AppError, PipelineConfig};
use crate::ports::PipelineFilesystem;

/// Load the driver configuration.
///
/// An explicit path must exist. Without one, `argprof.toml` in the pipeline
/// root is used when present, otherwise built-in defaults apply.
pub fn load_config<F: PipelineFilesystem>(
    filesystem: &F,
    explicit: Option<&Path>,
) -> Result<PipelineConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !filesystem.exists(path) {
                return Err(AppError::ConfigNotFound(path.to_path_buf()));
            }
            path
        }
        None => {
            let default_path = Path::new(CONFIG_FILE);
            if !filesystem.exists(default_path) {
                tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                return Ok(PipelineConfig::default());
            }
            default_path
        }
    };

    let content = filesystem.read_to_string(path)?;
    let config = config::parse_config_content(&content)?;
    tracing::debug!(path = %path.display(), ?config, "loaded configuration");
    Ok(config)
}
