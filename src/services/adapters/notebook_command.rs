use std::path::Path;
use std::process::Command;

use crate::domain::{AppError, NotebookExit, NotebookInvocation};
use crate::ports::NotebookExecutor;

/// Executes notebooks by spawning the configured program as a child process.
///
/// Stdout and stderr are inherited so the tool's own output reaches the terminal.
#[derive(Debug, Clone, Default)]
pub struct CommandNotebookExecutor;

impl CommandNotebookExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl NotebookExecutor for CommandNotebookExecutor {
    fn execute(
        &self,
        invocation: &NotebookInvocation,
        working_dir: &Path,
    ) -> Result<NotebookExit, AppError> {
        tracing::debug!(
            command = %invocation.display(),
            cwd = %working_dir.display(),
            "spawning notebook executor"
        );

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        command.current_dir(working_dir);

        let status = command.status().map_err(|e| AppError::ExecutorUnavailable {
            program: invocation.program.clone(),
            details: e.to_string(),
        })?;

        let exit = match status.code() {
            Some(code) => NotebookExit::from_code(code),
            None => NotebookExit::signaled(),
        };
        tracing::info!(notebook = %invocation.stage, code = ?exit.code, "notebook executor finished");
        Ok(exit)
    }
}
