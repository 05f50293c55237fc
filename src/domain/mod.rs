pub mod config;
pub mod error;
pub mod invocation;
pub mod layout;
pub mod stage;

pub use config::{ExecutorConfig, PipelineConfig};
pub use error::AppError;
pub use invocation::{NotebookExit, NotebookInvocation};
pub use layout::PipelineLayout;
pub use stage::Stage;
