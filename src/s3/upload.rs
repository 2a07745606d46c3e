use crate::interfaces::{ObjectUploader, PutRequest};
use crate::s3::error::UploadError;
use crate::utils::upload_logger::UploadLogger;
use aws_sdk_s3::types::ObjectCannedAcl;
use std::path::Path;

/// Upload a file to a bucket as a publicly readable object
///
/// # Arguments
///
/// * `uploader` - Transport that performs the put-object call
/// * `logger` - Receives the error line when the upload fails
/// * `local_path` - File to upload
/// * `bucket` - Bucket to upload to
/// * `object_name` - Object key; the base name of `local_path` when `None`
///
/// # Returns
///
/// * `Result<String, UploadError>` - The object key written, or why the upload failed
pub fn upload_file<U: ObjectUploader + ?Sized, L: UploadLogger + ?Sized>(
    uploader: &U,
    logger: &L,
    local_path: &Path,
    bucket: &str,
    object_name: Option<&str>,
) -> Result<String, UploadError> {
    let result = object_key(local_path, object_name).and_then(|key| {
        let request = PutRequest {
            bucket: bucket.to_string(),
            key,
            local_path: local_path.to_path_buf(),
            acl: ObjectCannedAcl::PublicRead,
        };
        uploader.put_object(&request).map(|()| request.key)
    });

    if let Err(e) = &result {
        logger.error(&format!("Upload of {} failed: {e}", local_path.display()));
    }
    result
}

fn object_key(local_path: &Path, object_name: Option<&str>) -> Result<String, UploadError> {
    if let Some(name) = object_name {
        return Ok(name.to_string());
    }
    local_path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| UploadError::InvalidObjectName(local_path.to_path_buf()))
}
