//! Table configuration types (pure data, no I/O).

use crate::error::{ProvisionError, Result};

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub throughput: Throughput,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Provisioned read/write capacity for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput {
    pub read_units: u64,
    pub write_units: u64,
}

impl Default for Throughput {
    fn default() -> Self {
        Self {
            read_units: 10,
            write_units: 10,
        }
    }
}

impl TableConfig {
    /// Creates a configuration for a table with a single string hash key
    /// and default throughput.
    pub fn new(table_name: impl Into<String>, key_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            partition_key: KeyAttribute {
                name: key_name.into(),
                attribute_type: AttributeType::String,
            },
            throughput: Throughput::default(),
        }
    }

    /// Sets the provisioned throughput.
    pub fn with_throughput(mut self, read_units: u64, write_units: u64) -> Self {
        self.throughput = Throughput {
            read_units,
            write_units,
        };
        self
    }

    /// Checks the configuration invariants: non-empty names, positive
    /// capacity units.
    pub fn validate(&self) -> Result<()> {
        if self.table_name.is_empty() {
            return Err(ProvisionError::InvalidConfig(
                "table name must not be empty".to_string(),
            ));
        }
        if self.partition_key.name.is_empty() {
            return Err(ProvisionError::InvalidConfig(
                "partition key name must not be empty".to_string(),
            ));
        }
        if self.throughput.read_units == 0 {
            return Err(ProvisionError::InvalidConfig(
                "read capacity units must be positive".to_string(),
            ));
        }
        if self.throughput.write_units == 0 {
            return Err(ProvisionError::InvalidConfig(
                "write capacity units must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
