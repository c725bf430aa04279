//! Error types for RDS MySQL operations.

use thiserror::Error;

/// Result type alias for the rds module.
pub type Result<T> = std::result::Result<T, RdsError>;

/// Errors that can occur during RDS operations.
#[derive(Error, Debug)]
pub enum RdsError {
    #[error(transparent)]
    Env(#[from] stratus_core::env::EnvError),

    #[error("Invalid RDS_PORT value: {0}")]
    InvalidPort(String),

    #[error("Database error: {0}")]
    Sql(#[from] sqlx::Error),
}
