use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, NotebookExit, NotebookInvocation, Stage};
use crate::ports::NotebookExecutor;
use crate::testing::journal::{Event, Journal};

/// Scripted executor that records invocations instead of spawning processes.
///
/// Every stage succeeds unless an exit was scripted with [`FakeNotebookExecutor::with_exit`].
#[derive(Debug, Default)]
pub struct FakeNotebookExecutor {
    pub invocations: Mutex<Vec<(NotebookInvocation, PathBuf)>>,
    exits: HashMap<Stage, NotebookExit>,
    unavailable: bool,
    journal: Journal,
}

impl FakeNotebookExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = journal;
        self
    }

    pub fn with_exit(mut self, stage: Stage, exit: NotebookExit) -> Self {
        self.exits.insert(stage, exit);
        self
    }

    /// Simulate a missing executor binary.
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn executed_stages(&self) -> Vec<Stage> {
        self.invocations.lock().unwrap().iter().map(|(invocation, _)| invocation.stage).collect()
    }
}

impl NotebookExecutor for FakeNotebookExecutor {
    fn execute(
        &self,
        invocation: &NotebookInvocation,
        working_dir: &Path,
    ) -> Result<NotebookExit, AppError> {
        if self.unavailable {
            return Err(AppError::ExecutorUnavailable {
                program: invocation.program.clone(),
                details: "No such file or directory (os error 2)".to_string(),
            });
        }

        self.journal.push(Event::Execute(invocation.stage.notebook().to_string()));
        self.invocations.lock().unwrap().push((invocation.clone(), working_dir.to_path_buf()));
        Ok(self.exits.get(&invocation.stage).copied().unwrap_or(NotebookExit::from_code(0)))
    }
}
