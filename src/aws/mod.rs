//! AWS-backed implementation of the provider seam.

mod client;
mod provider;

pub use client::{create_client, AwsConfig};
pub use provider::DynamoTableProvider;
