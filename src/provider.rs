//! Provider abstraction over the remote table service.

use async_trait::async_trait;
use serde::Serialize;

use crate::config::TableConfig;
use crate::error::Result;

/// Observed status of a remote table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Creating,
    Active,
    Updating,
    Deleting,
}

/// Handle to a table that reached the active state.
///
/// Names the remote resource; no remote state is held locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableHandle {
    pub table_name: String,
}

/// Backend that can create tables and report their status.
#[async_trait]
pub trait TableProvider: Send + Sync {
    /// Submits a table creation request.
    ///
    /// A name conflict surfaces as `ProvisionError::TableAlreadyExists`.
    async fn create_table(&self, config: &TableConfig) -> Result<()>;

    /// Fetches the table's current status, `None` if it doesn't exist.
    async fn table_status(&self, table_name: &str) -> Result<Option<TableStatus>>;
}
