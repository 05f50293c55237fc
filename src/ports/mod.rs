mod notebook_executor;
mod pipeline_filesystem;
mod progress_log;

pub use notebook_executor::NotebookExecutor;
pub use pipeline_filesystem::PipelineFilesystem;
pub use progress_log::ProgressLog;
