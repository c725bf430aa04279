//! Error types for DynamoDB operations.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use thiserror::Error;

/// Result type alias for the dynamodb module.
pub type Result<T> = std::result::Result<T, DynamodbError>;

/// Errors that can occur during DynamoDB operations.
#[derive(Error, Debug)]
pub enum DynamodbError {
    #[error(transparent)]
    Env(#[from] stratus_core::env::EnvError),

    #[error("Invalid item: {0}")]
    InvalidItem(String),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },

    #[error("PutItem failed: {0}")]
    PutItem(String),

    #[error("GetItem failed: {0}")]
    GetItem(String),
}

/// Map a PutItem SDK error into a module error.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    table_name: &str,
) -> DynamodbError {
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => DynamodbError::TableNotFound {
            table_name: table_name.to_string(),
        },
        PutItemError::ProvisionedThroughputExceededException(_) => {
            DynamodbError::PutItem("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            DynamodbError::PutItem("Request limit exceeded, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            DynamodbError::PutItem("DynamoDB internal server error".to_string())
        }
        err => DynamodbError::PutItem(format!("{:?}", err)),
    }
}

/// Map a GetItem SDK error into a module error.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    table_name: &str,
) -> DynamodbError {
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => DynamodbError::TableNotFound {
            table_name: table_name.to_string(),
        },
        GetItemError::ProvisionedThroughputExceededException(_) => {
            DynamodbError::GetItem("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            DynamodbError::GetItem("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            DynamodbError::GetItem("DynamoDB internal server error".to_string())
        }
        err => DynamodbError::GetItem(format!("{:?}", err)),
    }
}
