use crate::utils::log_utils::LogLevel;
use crate::utils::upload_logger::UploadLogger;
use std::sync::{Arc, Mutex};

/// Logger that keeps every message in memory so tests can assert on them.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    messages: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl UploadLogger for RecordingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}

impl RecordingLogger {
    pub fn logs(&self) -> Vec<(LogLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Messages recorded at exactly `level`.
    pub fn at(&self, level: LogLevel) -> Vec<String> {
        self.logs()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m)
            .collect()
    }
}
