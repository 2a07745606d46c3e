use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot list base path {path}: {message}")]
    BaseDir { path: PathBuf, message: String },

    #[error("S3 client error: {0}")]
    Client(String),
}
