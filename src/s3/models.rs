use aws_sdk_s3::Client;

/// Client for an S3-compatible storage endpoint
pub struct S3StorageClient {
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub verbose: u8,
}
