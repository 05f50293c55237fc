use std::path::Path;

use crate::domain::{AppError, NotebookExit, NotebookInvocation};

/// Port for running a single notebook through an external tool.
pub trait NotebookExecutor {
    /// Run the invocation to completion with `working_dir` as the current directory.
    ///
    /// A non-zero exit is reported through [`NotebookExit`], not as an error.
    /// Errors are reserved for failures to start the tool at all.
    fn execute(
        &self,
        invocation: &NotebookInvocation,
        working_dir: &Path,
    ) -> Result<NotebookExit, AppError>;
}
