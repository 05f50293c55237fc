//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::app::config::load_config;
use crate::app::{
    AppContext,
    commands::{plan, run},
};
use crate::services::{CommandNotebookExecutor, LocalPipelineFilesystem, StdoutProgressLog};

pub use crate::app::commands::plan::{PipelinePlan, PlannedStage};
pub use crate::app::commands::run::RunResult;
pub use crate::domain::{AppError, Stage};

/// Where to run the pipeline and which config file to use.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// Pipeline root. Defaults to the current directory.
    pub root: Option<PathBuf>,
    /// Explicit config file, relative to the current directory.
    pub config: Option<PathBuf>,
}

impl PipelineOptions {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: Some(root.into()), config: None }
    }
}

type LocalContext =
    AppContext<LocalPipelineFilesystem, CommandNotebookExecutor, StdoutProgressLog>;

/// Create an `AppContext` backed by the local filesystem and process spawning.
fn create_context(options: &PipelineOptions) -> Result<LocalContext, AppError> {
    let cwd = std::env::current_dir()?;
    let filesystem = match &options.root {
        Some(root) => LocalPipelineFilesystem::open(absolutize(&cwd, root))?,
        None => LocalPipelineFilesystem::current()?,
    };
    let explicit = options.config.as_deref().map(|path| absolutize(&cwd, path));

    let config = load_config(&filesystem, explicit.as_deref())?;
    Ok(AppContext::new(filesystem, CommandNotebookExecutor::new(), StdoutProgressLog, config))
}

fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { base.join(path) }
}

/// Run every notebook in order, stopping at the first failure.
pub fn run(options: &PipelineOptions) -> Result<RunResult, AppError> {
    let ctx = create_context(options)?;
    run::execute(&ctx)
}

/// Run the pipeline rooted at the specified path.
pub fn run_at(path: impl Into<PathBuf>) -> Result<RunResult, AppError> {
    run(&PipelineOptions::at(path))
}

/// Preview the run without creating directories or executing notebooks.
pub fn plan(options: &PipelineOptions) -> Result<PipelinePlan, AppError> {
    let ctx = create_context(options)?;
    Ok(plan::execute(&ctx))
}
