use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::put_object::PutObjectError;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single object upload failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Permission denied: {0}")]
    Permission(String),

    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Cannot read local file {path}: {message}")]
    LocalFile { path: PathBuf, message: String },

    #[error("Cannot derive object name from {0}")]
    InvalidObjectName(PathBuf),

    #[error("Service error {code}: {message}")]
    Service { code: String, message: String },

    #[error("Client error: {0}")]
    Client(String),
}

/// Map an S3 error code (and HTTP status, when the code is absent) onto a failure cause.
pub fn classify_service_error(
    code: Option<&str>,
    message: Option<&str>,
    status: u16,
    bucket: &str,
) -> UploadError {
    let message = message.unwrap_or("no message").to_string();
    match code {
        Some(
            "InvalidAccessKeyId" | "SignatureDoesNotMatch" | "ExpiredToken" | "InvalidToken",
        ) => UploadError::Auth(message),
        Some("AccessDenied" | "AllAccessDisabled" | "AccessControlListNotSupported") => {
            UploadError::Permission(message)
        }
        Some("NoSuchBucket") => UploadError::BucketNotFound(bucket.to_string()),
        Some(code) => UploadError::Service {
            code: code.to_string(),
            message,
        },
        None => match status {
            401 => UploadError::Auth(message),
            403 => UploadError::Permission(message),
            404 => UploadError::BucketNotFound(bucket.to_string()),
            _ => UploadError::Service {
                code: format!("HTTP {status}"),
                message,
            },
        },
    }
}

/// Convert an SDK failure from `put_object` into an [`UploadError`].
pub fn from_put_object_error(
    err: SdkError<PutObjectError, HttpResponse>,
    bucket: &str,
) -> UploadError {
    match &err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) => {
            UploadError::Network(DisplayErrorContext(&err).to_string())
        }
        SdkError::ServiceError(ctx) => classify_service_error(
            ctx.err().code(),
            ctx.err().message(),
            ctx.raw().status().as_u16(),
            bucket,
        ),
        _ => UploadError::Client(DisplayErrorContext(&err).to_string()),
    }
}
