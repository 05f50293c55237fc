pub mod ports;

pub use journal::{Event, Journal};
pub use ports::{FakeNotebookExecutor, MemoryFilesystem, RecordingProgressLog};
