mod fake_notebook_executor;
mod recording_progress_log;

pub use self::fake_notebook_executor::FakeNotebookExecutor;
pub use self::memory_filesystem::MemoryFilesystem;
pub use self::recording_progress_log::RecordingProgressLog;
