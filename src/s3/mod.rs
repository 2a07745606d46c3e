pub mod client;
pub mod error;
pub mod models;
pub mod upload;

// Re-export types for convenient access from other modules
pub use error::UploadError;
pub use models::S3StorageClient;
pub use upload::upload_file;
