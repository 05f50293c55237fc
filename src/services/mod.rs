pub mod adapters;

pub use adapters::local_filesystem::LocalPipelineFilesystem;
pub use adapters::notebook_command::CommandNotebookExecutor;
pub use adapters::stdout_progress_log::StdoutProgressLog;
