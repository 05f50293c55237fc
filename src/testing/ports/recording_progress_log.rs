use std::sync::Mutex;

use crate::ports::ProgressLog;
use crate::testing::journal::{Event, Journal};

/// Progress log that keeps messages in memory.
#[derive(Debug, Default)]
pub struct RecordingProgressLog {
    pub lines: Mutex<Vec<String>>,
    journal: Journal,
}

impl RecordingProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = journal;
        self
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl ProgressLog for RecordingProgressLog {
    fn log(&self, message: &str) {
        self.journal.push(Event::Log(message.to_string()));
        self.lines.lock().unwrap().push(message.to_string());
    }
}
