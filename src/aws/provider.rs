//! DynamoDB-backed `TableProvider`.
//!
//! Maps AWS SDK errors to `ProvisionError` using typed `into_service_error`
//! matching rather than string inspection.

use std::fmt::Debug;

use async_trait::async_trait;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use crate::config::{AttributeType, TableConfig};
use crate::error::{ProvisionError, Result};
use crate::provider::{TableProvider, TableStatus};

/// `TableProvider` backed by the AWS SDK DynamoDB client.
pub struct DynamoTableProvider {
    client: Client,
}

impl DynamoTableProvider {
    /// Creates a provider with the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TableProvider for DynamoTableProvider {
    async fn create_table(&self, config: &TableConfig) -> Result<()> {
        let attribute_definition = AttributeDefinition::builder()
            .attribute_name(&config.partition_key.name)
            .attribute_type(to_scalar_type(config.partition_key.attribute_type))
            .build()
            .map_err(|e| ProvisionError::AwsSdk(e.to_string()))?;

        let key_schema = KeySchemaElement::builder()
            .attribute_name(&config.partition_key.name)
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| ProvisionError::AwsSdk(e.to_string()))?;

        let throughput = ProvisionedThroughput::builder()
            .read_capacity_units(config.throughput.read_units as i64)
            .write_capacity_units(config.throughput.write_units as i64)
            .build()
            .map_err(|e| ProvisionError::AwsSdk(e.to_string()))?;

        self.client
            .create_table()
            .table_name(&config.table_name)
            .attribute_definitions(attribute_definition)
            .key_schema(key_schema)
            .provisioned_throughput(throughput)
            .send()
            .await
            .map_err(|e| map_create_table_error(e, &config.table_name))?;

        Ok(())
    }

    async fn table_status(&self, table_name: &str) -> Result<Option<TableStatus>> {
        let response = match self
            .client
            .describe_table()
            .table_name(table_name)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return map_describe_table_error(err).map(|_| None),
        };

        let Some(table) = response.table() else {
            return Ok(None);
        };

        let status = match table.table_status() {
            Some(aws_sdk_dynamodb::types::TableStatus::Active) => TableStatus::Active,
            Some(aws_sdk_dynamodb::types::TableStatus::Creating) => TableStatus::Creating,
            Some(aws_sdk_dynamodb::types::TableStatus::Updating) => TableStatus::Updating,
            Some(aws_sdk_dynamodb::types::TableStatus::Deleting) => TableStatus::Deleting,
            // Archival and encryption-credential states don't occur for a
            // table being created; keep polling until a bound trips.
            _ => TableStatus::Creating,
        };

        Ok(Some(status))
    }
}

fn to_scalar_type(attribute_type: AttributeType) -> ScalarAttributeType {
    match attribute_type {
        AttributeType::String => ScalarAttributeType::S,
    }
}

/// Map a CreateTable SDK error to ProvisionError.
fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
    table_name: &str,
) -> ProvisionError {
    match err.into_service_error() {
        CreateTableError::ResourceInUseException(_) => ProvisionError::TableAlreadyExists {
            table_name: table_name.to_string(),
        },
        CreateTableError::LimitExceededException(_) => {
            ProvisionError::AwsSdk("account table limit exceeded".to_string())
        }
        err => ProvisionError::AwsSdk(format!("CreateTable failed: {:?}", err)),
    }
}

/// Map a DescribeTable SDK error; a missing table is not an error.
fn map_describe_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DescribeTableError, R>,
) -> Result<()> {
    match err.into_service_error() {
        DescribeTableError::ResourceNotFoundException(_) => Ok(()),
        err => Err(ProvisionError::AwsSdk(format!(
            "DescribeTable failed: {:?}",
            err
        ))),
    }
}
