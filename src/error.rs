//! Error types for table provisioning.

use thiserror::Error;

/// Result type alias for provisioning operations.
pub type Result<T> = std::result::Result<T, ProvisionError>;

/// Errors that can occur while provisioning a table.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("invalid table configuration: {0}")]
    InvalidConfig(String),

    #[error("table '{table_name}' already exists")]
    TableAlreadyExists { table_name: String },

    #[error("AWS SDK error: {0}")]
    AwsSdk(String),

    #[error("table '{table_name}' was removed while waiting for it to become active")]
    TableGone { table_name: String },

    #[error("timed out waiting for table '{table_name}' to become active")]
    ActivationTimeout { table_name: String },
}
