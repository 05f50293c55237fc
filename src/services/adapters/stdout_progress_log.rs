use chrono::{Local, NaiveTime};

use crate::ports::ProgressLog;

/// Prints `[HH:MM:SS] message` lines to stdout using local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutProgressLog;

impl ProgressLog for StdoutProgressLog {
    fn log(&self, message: &str) {
        println!("{}", format_line(Local::now().time(), message));
    }
}

/// Render one progress line.
pub fn format_line(time: NaiveTime, message: &str) -> String {
    format!("[{}] {}", time.format("%H:%M:%S"), message)
}
