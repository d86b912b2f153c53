//! CLI definition.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::aws::AwsConfig;
use crate::config::TableConfig;
use crate::provision::PollPolicy;

/// Create a DynamoDB table and wait until it is active.
#[derive(Debug, Parser)]
#[command(name = "tableup")]
#[command(version, about = "Create a DynamoDB table and wait until it is active")]
#[command(long_about = "Create a DynamoDB table with a single string hash key and \
provisioned throughput, then block until the table reports an ACTIVE status.

On success the created table's name is printed to standard output.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct Cli {
    /// Name of the table to create (e.g., Music).
    pub table_name: String,

    /// Name of the hash key attribute (e.g., Artist).
    pub key_name: String,

    /// Provisioned read capacity units.
    #[arg(long, default_value_t = 10)]
    pub read_units: u64,

    /// Provisioned write capacity units.
    #[arg(long, default_value_t = 10)]
    pub write_units: u64,

    /// AWS region.
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Custom endpoint URL (e.g., local DynamoDB).
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Seconds between status polls while waiting.
    #[arg(long, default_value_t = 2)]
    pub poll_interval: u64,

    /// Maximum number of status polls before giving up.
    #[arg(long, default_value_t = 60)]
    pub max_attempts: u32,

    /// Maximum total seconds to wait for the table to become active.
    #[arg(long, default_value_t = 300)]
    pub max_wait: u64,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

impl Cli {
    /// Builds the table configuration from the parsed arguments.
    pub fn table_config(&self) -> TableConfig {
        TableConfig::new(&self.table_name, &self.key_name)
            .with_throughput(self.read_units, self.write_units)
    }

    /// Builds the polling policy from the parsed arguments.
    pub fn poll_policy(&self) -> PollPolicy {
        PollPolicy {
            interval: Duration::from_secs(self.poll_interval),
            max_attempts: self.max_attempts,
            max_wait: Duration::from_secs(self.max_wait),
        }
    }

    /// Resolves the AWS client configuration from arguments and environment.
    pub fn aws_config(&self) -> AwsConfig {
        AwsConfig::resolve(self.region.clone(), self.endpoint_url.clone())
    }
}
