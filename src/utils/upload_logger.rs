use crate::utils::log_utils::{LogLevel, Logger};

/// Interface for routing upload feedback to the log stream (or a recorder in tests).
pub trait UploadLogger {
    fn log(&self, level: LogLevel, message: &str);

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

impl UploadLogger for Logger {
    fn log(&self, level: LogLevel, message: &str) {
        Logger::log(self, message, level);
    }
}
