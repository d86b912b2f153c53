//! Create-and-wait provisioning flow.

use std::time::{Duration, Instant};

use crate::config::TableConfig;
use crate::error::{ProvisionError, Result};
use crate::provider::{TableHandle, TableProvider, TableStatus};

/// Polling bounds for the activation wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Time between status polls.
    pub interval: Duration,
    /// Maximum number of status polls.
    pub max_attempts: u32,
    /// Maximum total time to wait.
    pub max_wait: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_attempts: 60,
            max_wait: Duration::from_secs(300),
        }
    }
}

/// Creates the table described by `config` and blocks until it is active.
///
/// Creation failures are fatal: a name conflict returns
/// `TableAlreadyExists` without any status polling. The operation is not
/// idempotent; calling it twice with the same name fails the second time.
pub async fn provision(
    provider: &dyn TableProvider,
    config: &TableConfig,
    policy: &PollPolicy,
) -> Result<TableHandle> {
    config.validate()?;

    provider.create_table(config).await?;
    tracing::info!("creation request for '{}' accepted", config.table_name);

    wait_for_table_active(provider, &config.table_name, policy).await?;
    tracing::info!("table '{}' is active", config.table_name);

    Ok(TableHandle {
        table_name: config.table_name.clone(),
    })
}

/// Polls the table's status until it is active or the policy bounds are
/// exceeded.
///
/// A table that disappears or starts deleting while being waited on is a
/// terminal failure, not a timeout.
pub async fn wait_for_table_active(
    provider: &dyn TableProvider,
    table_name: &str,
    policy: &PollPolicy,
) -> Result<()> {
    let deadline = Instant::now() + policy.max_wait;

    for attempt in 0..policy.max_attempts {
        match provider.table_status(table_name).await? {
            Some(TableStatus::Active) => return Ok(()),
            Some(TableStatus::Deleting) | None => {
                return Err(ProvisionError::TableGone {
                    table_name: table_name.to_string(),
                });
            }
            Some(status) => {
                tracing::debug!(
                    "table '{}' is {:?} (attempt {}/{})",
                    table_name,
                    status,
                    attempt + 1,
                    policy.max_attempts
                );
            }
        }

        if Instant::now() + policy.interval > deadline {
            break;
        }
        tokio::time::sleep(policy.interval).await;
    }

    Err(ProvisionError::ActivationTimeout {
        table_name: table_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use super::*;

    /// In-memory provider for testing.
    ///
    /// Enforces name uniqueness on creation and reports a scripted status
    /// sequence per table (the last entry repeats; an empty script makes
    /// the table report as gone).
    struct FakeProvider {
        script: Vec<TableStatus>,
        tables: RwLock<HashMap<String, usize>>,
        create_calls: AtomicUsize,
        status_calls: AtomicUsize,
        status_error: Option<&'static str>,
    }

    impl FakeProvider {
        fn new(script: Vec<TableStatus>) -> Self {
            Self {
                script,
                tables: RwLock::new(HashMap::new()),
                create_calls: AtomicUsize::new(0),
                status_calls: AtomicUsize::new(0),
                status_error: None,
            }
        }

        fn with_status_error(mut self, message: &'static str) -> Self {
            self.status_error = Some(message);
            self
        }

        async fn seed(&self, table_name: &str) {
            self.tables.write().await.insert(table_name.to_string(), 0);
        }
    }

    #[async_trait]
    impl TableProvider for FakeProvider {
        async fn create_table(&self, config: &TableConfig) -> Result<()> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            let mut tables = self.tables.write().await;
            if tables.contains_key(&config.table_name) {
                return Err(ProvisionError::TableAlreadyExists {
                    table_name: config.table_name.clone(),
                });
            }
            tables.insert(config.table_name.clone(), 0);
            Ok(())
        }

        async fn table_status(&self, table_name: &str) -> Result<Option<TableStatus>> {
            self.status_calls.fetch_add(1, Ordering::SeqCst);
            if let Some(message) = self.status_error {
                return Err(ProvisionError::AwsSdk(message.to_string()));
            }
            let mut tables = self.tables.write().await;
            let Some(polls) = tables.get_mut(table_name) else {
                return Ok(None);
            };
            let status = self.script.get(*polls).or_else(|| self.script.last());
            *polls += 1;
            Ok(status.copied())
        }
    }

    fn fast_policy() -> PollPolicy {
        PollPolicy {
            interval: Duration::from_millis(1),
            max_attempts: 5,
            max_wait: Duration::from_secs(1),
        }
    }

    #[tokio::test]
    async fn test_provision_returns_handle_once_active() {
        let provider = FakeProvider::new(vec![
            TableStatus::Creating,
            TableStatus::Creating,
            TableStatus::Active,
        ]);
        let config = TableConfig::new("music", "artist");

        let handle = provision(&provider, &config, &fast_policy())
            .await
            .expect("table should become active");

        assert_eq!(handle.table_name, "music");
        assert_eq!(provider.status_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_create_conflict_is_fatal_without_polling() {
        let provider = FakeProvider::new(vec![TableStatus::Active]);
        provider.seed("music").await;
        let config = TableConfig::new("music", "artist");

        let err = provision(&provider, &config, &fast_policy())
            .await
            .expect_err("duplicate name should fail");

        assert!(matches!(
            err,
            ProvisionError::TableAlreadyExists { table_name } if table_name == "music"
        ));
        assert_eq!(provider.status_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_status_error_propagates() {
        let provider =
            FakeProvider::new(vec![TableStatus::Active]).with_status_error("access denied");
        let config = TableConfig::new("music", "artist");

        let err = provision(&provider, &config, &fast_policy())
            .await
            .expect_err("status error should fail the provision");

        assert!(matches!(err, ProvisionError::AwsSdk(message) if message == "access denied"));
    }

    #[tokio::test]
    async fn test_table_deleted_while_waiting() {
        let provider = FakeProvider::new(vec![TableStatus::Creating, TableStatus::Deleting]);
        let config = TableConfig::new("music", "artist");

        let err = provision(&provider, &config, &fast_policy())
            .await
            .expect_err("a deleting table should fail the provision");

        assert!(matches!(err, ProvisionError::TableGone { .. }));
    }

    #[tokio::test]
    async fn test_never_active_times_out_after_max_attempts() {
        let provider = FakeProvider::new(vec![TableStatus::Creating]);
        let config = TableConfig::new("music", "artist");

        let err = provision(&provider, &config, &fast_policy())
            .await
            .expect_err("a table stuck in Creating should time out");

        assert!(matches!(err, ProvisionError::ActivationTimeout { .. }));
        assert_eq!(provider.status_calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_zero_max_wait_times_out_after_single_poll() {
        let provider = FakeProvider::new(vec![TableStatus::Creating]);
        let config = TableConfig::new("music", "artist");
        let policy = PollPolicy {
            interval: Duration::from_millis(50),
            max_attempts: 1000,
            max_wait: Duration::ZERO,
        };

        let err = provision(&provider, &config, &policy)
            .await
            .expect_err("an exhausted max_wait should time out");

        assert!(matches!(err, ProvisionError::ActivationTimeout { .. }));
        assert_eq!(provider.status_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_config_makes_no_provider_calls() {
        let provider = FakeProvider::new(vec![TableStatus::Active]);
        let config = TableConfig::new("music", "artist").with_throughput(0, 0);

        let err = provision(&provider, &config, &fast_policy())
            .await
            .expect_err("zero capacity should be rejected");

        assert!(matches!(err, ProvisionError::InvalidConfig(_)));
        assert_eq!(provider.create_calls.load(Ordering::SeqCst), 0);
        assert_eq!(provider.status_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_concurrent_provision_same_name_single_winner() {
        let provider = Arc::new(FakeProvider::new(vec![TableStatus::Active]));
        let config = TableConfig::new("music", "artist");
        let policy = fast_policy();

        let (first, second) = tokio::join!(
            provision(&*provider, &config, &policy),
            provision(&*provider, &config, &policy),
        );

        let successes = [&first, &second].iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1, "exactly one creation should win");

        let conflict = if first.is_err() { first } else { second };
        assert!(matches!(
            conflict.expect_err("the loser should report a conflict"),
            ProvisionError::TableAlreadyExists { .. }
        ));
    }
}
