//! Error types for MongoDB operations.

use thiserror::Error;

/// Result type alias for the mongo module.
pub type Result<T> = std::result::Result<T, MongoError>;

/// Errors that can occur during MongoDB operations.
#[derive(Error, Debug)]
pub enum MongoError {
    #[error(transparent)]
    Env(#[from] stratus_core::env::EnvError),

    #[error("MongoDB error: {0}")]
    Driver(#[from] mongodb::error::Error),
}
