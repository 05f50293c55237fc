//! Plan command: read-only preview of what `run` would do.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::{NotebookInvocation, Stage};
use crate::ports::{NotebookExecutor, PipelineFilesystem, ProgressLog};

/// One stage as it would be executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStage {
    pub position: usize,
    pub stage: Stage,
    pub description: &'static str,
    pub notebook: String,
    pub command: String,
    /// Whether the notebook file exists under the pipeline root.
    pub present: bool,
}

/// Full preview of a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelinePlan {
    pub root: PathBuf,
    /// Output directories that `run` would create.
    pub missing_dirs: Vec<String>,
    pub stages: Vec<PlannedStage>,
}

impl PipelinePlan {
    /// Notebooks that are not on disk yet.
    pub fn missing_notebooks(&self) -> impl Iterator<Item = &PlannedStage> {
        self.stages.iter().filter(|stage| !stage.present)
    }
}

/// Build the plan without touching the filesystem or spawning anything.
pub fn execute<F, E, L>(ctx: &AppContext<F, E, L>) -> PipelinePlan
where
    F: PipelineFilesystem,
    E: NotebookExecutor,
    L: ProgressLog,
{
    let filesystem = ctx.filesystem();
    let notebooks_dir = ctx.layout().notebooks_dir();

    let missing_dirs = ctx
        .layout()
        .required_dirs()
        .into_iter()
        .filter(|dir| !filesystem.exists(Path::new(dir)))
        .map(String::from)
        .collect();

    let stages = Stage::ALL
        .into_iter()
        .map(|stage| {
            let invocation =
                NotebookInvocation::for_stage(stage, &ctx.config().executor, &notebooks_dir);
            PlannedStage {
                position: stage.position(),
                stage,
                description: stage.description(),
                notebook: invocation.notebook_arg().to_string(),
                command: invocation.display(),
                present: filesystem.exists(&stage.notebook_path(&notebooks_dir)),
            }
        })
        .collect();

    PipelinePlan { root: filesystem.root().to_path_buf(), missing_dirs, stages }
}
