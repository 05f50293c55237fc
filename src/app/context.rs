use crate::domain::{PipelineConfig, PipelineLayout};
use crate::ports::{NotebookExecutor, PipelineFilesystem, ProgressLog};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: PipelineFilesystem, E: NotebookExecutor, L: ProgressLog> {
    filesystem: F,
    executor: E,
    log: L,
    config: PipelineConfig,
    layout: PipelineLayout,
}

impl<F: PipelineFilesystem, E: NotebookExecutor, L: ProgressLog> AppContext<F, E, L> {
    /// Create a new application context.
    pub fn new(filesystem: F, executor: E, log: L, config: PipelineConfig) -> Self {
        Self { filesystem, executor, log, config, layout: PipelineLayout }
    }

    /// Get a reference to the pipeline filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the notebook executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Get a reference to the progress log.
    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn layout(&self) -> &PipelineLayout {
        &self.layout
    }
}
