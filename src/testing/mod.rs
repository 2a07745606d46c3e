pub mod recording_logger;

pub use recording_logger::RecordingLogger;
