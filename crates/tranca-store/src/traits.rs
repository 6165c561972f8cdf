//! Document store trait
//!
//! Defines the interface for lock record storage operations. Every method
//! must be atomic and linearizable for a given `name`: concurrent
//! `append_or_create` calls against the same name must not lose appends,
//! and the resulting queue must reflect some total order of those calls.
//! The lock manager's fairness is only as strong as this guarantee, so it
//! must be verified against any concrete backend.

use async_trait::async_trait;

use crate::model::QueueEntry;

/// Per-record atomic operations over lock records keyed by name
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create the record for `name` if absent and append `entry` to the
    /// tail of its queue
    async fn append_or_create(&self, name: &str, entry: QueueEntry) -> anyhow::Result<()>;

    /// Snapshot of the queue, or `None` if no record exists
    async fn read(&self, name: &str) -> anyhow::Result<Option<Vec<QueueEntry>>>;

    /// Overwrite the expiration of the entry matching `token`
    ///
    /// No-op when the record or token is not present.
    async fn set_entry_expiration(
        &self,
        name: &str,
        token: &str,
        expiration: i64,
    ) -> anyhow::Result<()>;

    /// Remove every entry with `expiration <= now` and return the
    /// remaining queue, or `None` if no record exists
    async fn purge_expired(
        &self,
        name: &str,
        now: i64,
    ) -> anyhow::Result<Option<Vec<QueueEntry>>>;

    /// Remove the entry matching `token` regardless of its position
    ///
    /// Idempotent: absent records or tokens are a no-op.
    async fn remove_entry(&self, name: &str, token: &str) -> anyhow::Result<()>;

    /// Apply `purge_expired` semantics across all lock records
    async fn purge_expired_all(&self, now: i64) -> anyhow::Result<()>;

    /// Remove lock records whose queue is empty
    async fn delete_empty_records(&self) -> anyhow::Result<()>;
}
