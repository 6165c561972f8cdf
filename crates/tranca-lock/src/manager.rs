// Distributed lock manager
// Queued, lease-based mutual exclusion over an atomic document store

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use tranca_common::{TokenGenerator, TrancaError, UuidTokenGenerator, now_millis};
use tranca_store::{DocumentStore, QueueEntry};

use crate::config::LockConfig;

/// Named mutual exclusion across processes sharing a document store
///
/// Each `acquire` appends a uniquely-tokened entry to the named record's
/// queue; the entry at position 0 is the current holder. Waiting is
/// cooperative polling: every round purges expired entries first, which is
/// also how a crashed holder's slot is reclaimed without outside help.
pub struct LockManager {
    store: Arc<dyn DocumentStore>,
    tokens: Arc<dyn TokenGenerator>,
    config: LockConfig,
}

impl LockManager {
    /// Create a manager with UUID tokens and the default configuration
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_config(store, LockConfig::default())
    }

    /// Create a manager with a custom configuration
    pub fn with_config(store: Arc<dyn DocumentStore>, config: LockConfig) -> Self {
        Self {
            store,
            tokens: Arc::new(UuidTokenGenerator),
            config,
        }
    }

    /// Replace the token generator
    pub fn with_token_generator(mut self, tokens: Arc<dyn TokenGenerator>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn config(&self) -> &LockConfig {
        &self.config
    }

    /// Acquire the lock `name` with the configured default timeout and
    /// lease
    pub async fn acquire(&self, name: &str) -> Result<String, TrancaError> {
        self.acquire_with(name, self.config.default_timeout, self.config.default_lease)
            .await
    }

    /// Acquire the lock `name`, waiting at most `timeout` to reach the
    /// head of the queue and holding a lease of `lease` once granted
    ///
    /// Returns the token proving ownership; pass it to
    /// [`release`](LockManager::release) when done. The lease is never
    /// extended implicitly: choose a `lease` at least as long as the
    /// worst-case critical section, or extend it explicitly with
    /// [`renew`](LockManager::renew), otherwise the entry becomes eligible
    /// for purging mid-work.
    pub async fn acquire_with(
        &self,
        name: &str,
        timeout: Duration,
        lease: Duration,
    ) -> Result<String, TrancaError> {
        validate_name(name)?;
        if timeout.is_zero() || lease.is_zero() {
            return Err(TrancaError::IllegalArgument(
                "timeout and lease must be positive".to_string(),
            ));
        }

        let token = self.tokens.generate();
        // The pending entry carries its own TTL, so an abandoned request
        // never outlives the wait it was promised.
        let entry = QueueEntry::new(token.clone(), now_millis() + timeout.as_millis() as i64);
        self.store.append_or_create(name, entry).await?;

        let queue = self.store.read(name).await?.unwrap_or_default();
        if queue.first().is_some_and(|head| head.token == token) {
            self.grant(name, &token, lease).await?;
            debug!(name = %name, token = %token, "Lock acquired without waiting");
            return Ok(token);
        }

        // Not at the head: wait our turn, moving up as holders release or
        // their entries expire.
        for _ in 0..poll_rounds(timeout, self.config.poll_interval) {
            tokio::time::sleep(self.config.poll_interval).await;

            let Some(queue) = self.store.purge_expired(name, now_millis()).await? else {
                return Err(TrancaError::Timeout(name.to_string()));
            };
            if !queue.iter().any(|e| e.token == token) {
                // Our own pending entry expired and was purged with the rest.
                return Err(TrancaError::Timeout(name.to_string()));
            }
            if queue[0].token == token {
                self.grant(name, &token, lease).await?;
                debug!(name = %name, token = %token, "Lock acquired after waiting");
                return Ok(token);
            }
        }

        // The entry may still sit in the queue; a later purge, release or
        // cleanup reaps it.
        Err(TrancaError::Timeout(name.to_string()))
    }

    /// Release the lock `name` held (or awaited) by `token`
    ///
    /// Idempotent: a token that already expired or was never issued is a
    /// no-op. Releasing a still-waiting token withdraws that request from
    /// the queue.
    pub async fn release(&self, name: &str, token: &str) -> Result<(), TrancaError> {
        self.store.remove_entry(name, token).await?;
        debug!(name = %name, token = %token, "Lock released");
        Ok(())
    }

    /// Extend the lease of the current holder of `name`
    ///
    /// Fails with [`TrancaError::NotHeld`] unless `token` is at the head
    /// of the queue with an unexpired lease; waiting entries cannot renew.
    pub async fn renew(
        &self,
        name: &str,
        token: &str,
        new_lease: Duration,
    ) -> Result<(), TrancaError> {
        if new_lease.is_zero() {
            return Err(TrancaError::IllegalArgument(
                "lease must be positive".to_string(),
            ));
        }

        let queue = self.store.read(name).await?.unwrap_or_default();
        match queue.first() {
            Some(head) if head.token == token && !head.is_expired(now_millis()) => {
                self.grant(name, token, new_lease).await?;
                debug!(name = %name, token = %token, "Lease renewed");
                Ok(())
            }
            _ => Err(TrancaError::NotHeld {
                name: name.to_string(),
                token: token.to_string(),
            }),
        }
    }

    /// Purge every expired entry across all records and drop records whose
    /// queue became empty
    ///
    /// Bounds storage growth and restores progress when an expired head is
    /// left dangling with no waiter around to purge it on the acquire path.
    pub async fn cleanup(&self) -> Result<(), TrancaError> {
        self.store.purge_expired_all(now_millis()).await?;
        self.store.delete_empty_records().await?;
        Ok(())
    }

    /// Refresh the head entry's expiration to the lease deadline
    async fn grant(&self, name: &str, token: &str, lease: Duration) -> Result<(), TrancaError> {
        self.store
            .set_entry_expiration(name, token, now_millis() + lease.as_millis() as i64)
            .await?;
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), TrancaError> {
    if name.trim().is_empty() {
        return Err(TrancaError::IllegalArgument(
            "lock name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Number of poll iterations that fit in `timeout`
fn poll_rounds(timeout: Duration, poll_interval: Duration) -> u64 {
    let interval_ms = poll_interval.as_millis().max(1);
    ((timeout.as_millis() / interval_ms) as u64).max(1)
}
