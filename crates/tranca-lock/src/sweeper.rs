// Background expiry sweep
// Periodically reclaims abandoned queue entries and empty lock records

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::manager::LockManager;

/// Spawn the recurring cleanup task for `manager`
///
/// The interval's first tick fires immediately, so state abandoned by a
/// previous run of the process is reclaimed at startup. Sweep failures are
/// logged and the task keeps running; abort the returned handle to stop it.
pub fn spawn(manager: Arc<LockManager>) -> JoinHandle<()> {
    let period = manager.config().sweep_interval;
    info!(period_secs = period.as_secs(), "Expiry sweeper started");

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            match manager.cleanup().await {
                Ok(()) => debug!("Expiry sweep completed"),
                Err(err) => warn!(error = %err, "Expiry sweep failed"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tranca_common::now_millis;
    use tranca_store::{DocumentStore, MemoryDocumentStore, QueueEntry};

    use crate::config::LockConfig;

    use super::*;

    #[tokio::test]
    async fn test_sweeper_reclaims_expired_state() {
        let store = Arc::new(MemoryDocumentStore::new());
        store
            .append_or_create("stale", QueueEntry::new("t1", now_millis() - 1_000))
            .await
            .unwrap();
        store
            .append_or_create("live", QueueEntry::new("t2", now_millis() + 60_000))
            .await
            .unwrap();

        let config = LockConfig {
            sweep_interval: Duration::from_millis(20),
            ..LockConfig::default()
        };
        let manager = Arc::new(LockManager::with_config(store.clone(), config));

        let handle = spawn(manager);
        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();

        assert!(store.read("stale").await.unwrap().is_none());
        let queue = store.read("live").await.unwrap().unwrap();
        assert_eq!(queue.len(), 1);
    }
}
