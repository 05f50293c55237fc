use std::path::Path;

use serde::Serialize;

use crate::domain::Stage;
use crate::domain::config::ExecutorConfig;

/// Full command line used to execute one notebook.
///
/// The notebook path is always the final argument. The process is started
/// with the pipeline root as its working directory, so the path stays relative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotebookInvocation {
    pub stage: Stage,
    pub program: String,
    pub args: Vec<String>,
}

impl NotebookInvocation {
    pub fn for_stage(stage: Stage, executor: &ExecutorConfig, notebooks_dir: &Path) -> Self {
        let mut args = executor.args.clone();
        args.push(stage.notebook_path(notebooks_dir).to_string_lossy().into_owned());
        Self { stage, program: executor.program.clone(), args }
    }

    /// Notebook argument as passed to the executor.
    pub fn notebook_arg(&self) -> &str {
        self.args.last().map(String::as_str).unwrap_or_default()
    }

    /// Shell-like rendering for logs and previews.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Exit status reported by a notebook executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotebookExit {
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl NotebookExit {
    pub fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}
