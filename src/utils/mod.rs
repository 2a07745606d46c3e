pub mod log_utils;
pub mod upload_logger;
