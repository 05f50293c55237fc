pub mod local_filesystem;
pub mod notebook_command;
pub mod stdout_progress_log;
