use crate::s3::UploadError;
use aws_sdk_s3::types::ObjectCannedAcl;
use mockall::automock;
use std::path::PathBuf;

/// A single put-object call: local file bytes go to `bucket`/`key` with `acl`.
#[derive(Debug, Clone, PartialEq)]
pub struct PutRequest {
    pub bucket: String,
    pub key: String,
    pub local_path: PathBuf,
    pub acl: ObjectCannedAcl,
}

/// Interface for the object storage transport to facilitate testing
#[automock]
pub trait ObjectUploader {
    fn put_object(&self, request: &PutRequest) -> Result<(), UploadError>;
}
