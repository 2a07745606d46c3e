use crate::config::{Config, redact};
use crate::errors::AppError;
use crate::interfaces::{ObjectUploader, PutRequest};
use crate::s3::error::{UploadError, from_put_object_error};
use crate::s3::models::S3StorageClient;
use crate::utils::log_utils;
use aws_config::retry::RetryConfig;
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{BehaviorVersion, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;

impl S3StorageClient {
    /// Create a new S3 client authenticated with the static keys from `config`
    pub fn new(config: &Config, verbose: u8) -> Result<Self, AppError> {
        // Create runtime for async operations - will be reused for all operations
        let runtime = tokio::runtime::Runtime::new()
            .map_err(|e| AppError::Client(format!("Failed to create runtime: {e}")))?;

        log_utils::debug("Creating S3 client with these parameters:", verbose);
        log_utils::debug(&format!("Region: {}", config.region), verbose);
        if let Some(endpoint) = &config.endpoint_url {
            log_utils::debug(&format!("Endpoint: {endpoint}"), verbose);
        }
        log_utils::debug(&format!("Key ID: {}", redact(&config.access_key)), verbose);

        let credentials = Credentials::new(
            config.access_key.clone(),
            config.secret_key.clone(),
            None, // No session token
            None, // No expiry
            "ConfigIniStaticCredentials",
        );

        // Each file is attempted exactly once
        let mut builder = aws_sdk_s3::Config::builder()
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .retry_config(RetryConfig::disabled())
            .behavior_version(BehaviorVersion::latest());

        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Ok(Self {
            client: Client::from_conf(builder.build()),
            runtime,
            verbose,
        })
    }
}

impl ObjectUploader for S3StorageClient {
    fn put_object(&self, request: &PutRequest) -> Result<(), UploadError> {
        self.runtime.block_on(async {
            // Stream the body from disk rather than loading it into memory
            let body = ByteStream::from_path(&request.local_path)
                .await
                .map_err(|e| UploadError::LocalFile {
                    path: request.local_path.clone(),
                    message: DisplayErrorContext(&e).to_string(),
                })?;

            let response = self
                .client
                .put_object()
                .bucket(&request.bucket)
                .key(&request.key)
                .acl(request.acl.clone())
                .body(body)
                .send()
                .await
                .map_err(|e| from_put_object_error(e, &request.bucket))?;

            if let Some(etag) = response.e_tag() {
                log_utils::debug(
                    &format!("Stored {} with ETag {}", request.key, etag.replace('"', "")),
                    self.verbose,
                );
            }
            Ok(())
        })
    }
}
