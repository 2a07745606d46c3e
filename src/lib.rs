pub mod args;
pub mod batch;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod s3;
pub mod testing;
pub mod utils;

pub use args::Args;
pub use batch::{BatchSummary, upload_directory};
pub use config::{Config, load_config};
pub use errors::AppError;

use crate::interfaces::ObjectUploader;
use crate::s3::S3StorageClient;
use crate::utils::log_utils::Logger;
use crate::utils::upload_logger::UploadLogger;
use std::path::Path;

/// Load the configuration, connect to S3 and upload the base path
pub fn run_app(args: &Args, logger: &Logger) -> Result<BatchSummary, AppError> {
    run_with_uploader(&args.config, logger, |config| {
        S3StorageClient::new(config, logger.verbosity())
    })
}

/// Version of run_app that accepts the uploader factory for testing
///
/// `connect` is only called once the configuration has loaded cleanly, so a bad
/// config never reaches the transport.
pub fn run_with_uploader<U, F, L>(
    config_path: &Path,
    logger: &L,
    connect: F,
) -> Result<BatchSummary, AppError>
where
    U: ObjectUploader,
    F: FnOnce(&Config) -> Result<U, AppError>,
    L: UploadLogger + ?Sized,
{
    let config = load_config(config_path)?;
    logger.debug(&format!(
        "Loaded {}: bucket {}, base path {}",
        config_path.display(),
        config.bucket_name,
        config.base_path.display()
    ));

    let uploader = connect(&config)?;
    upload_directory(&config, &uploader, logger)
}
