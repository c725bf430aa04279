//! Error types for S3 operations.

use std::fmt::Debug;

use aws_sdk_s3::error::SdkError;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Error;
use aws_sdk_s3::operation::put_object::PutObjectError;
use thiserror::Error;

/// Result type alias for the s3 module.
pub type Result<T> = std::result::Result<T, S3Error>;

/// Errors that can occur during S3 operations.
#[derive(Error, Debug)]
pub enum S3Error {
    #[error(transparent)]
    Env(#[from] stratus_core::env::EnvError),

    #[error("Bucket '{bucket_name}' not found")]
    BucketNotFound { bucket_name: String },

    #[error("ListObjects failed: {0}")]
    ListObjects(String),

    #[error("Upload failed: {0}")]
    Upload(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Map a ListObjectsV2 SDK error into a module error.
pub fn map_list_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ListObjectsV2Error, R>,
    bucket_name: &str,
) -> S3Error {
    match err.into_service_error() {
        ListObjectsV2Error::NoSuchBucket(_) => S3Error::BucketNotFound {
            bucket_name: bucket_name.to_string(),
        },
        err => S3Error::ListObjects(format!("{:?}", err)),
    }
}

/// Map a PutObject SDK error into a module error.
pub fn map_put_error<R: Debug + Send + Sync + 'static>(err: SdkError<PutObjectError, R>) -> S3Error {
    S3Error::Upload(format!("{:?}", err.into_service_error()))
}
