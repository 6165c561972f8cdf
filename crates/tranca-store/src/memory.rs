// In-memory document store backend
// Standalone storage for single-process deployments and tests

use async_trait::async_trait;
use dashmap::DashMap;

use crate::model::{LockRecord, QueueEntry};
use crate::traits::DocumentStore;

/// In-memory `DocumentStore` backed by DashMap
///
/// Each operation holds the record's shard lock for the duration of its
/// read-modify-write, which satisfies the per-record linearizability the
/// `DocumentStore` contract requires. Empty queues stay in the map until
/// `delete_empty_records`, mirroring pull-style document stores.
#[derive(Default)]
pub struct MemoryDocumentStore {
    records: DashMap<String, LockRecord>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Number of lock records currently present, empty queues included
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn append_or_create(&self, name: &str, entry: QueueEntry) -> anyhow::Result<()> {
        self.records
            .entry(name.to_string())
            .or_insert_with(|| LockRecord::new(name))
            .queue
            .push(entry);
        Ok(())
    }

    async fn read(&self, name: &str) -> anyhow::Result<Option<Vec<QueueEntry>>> {
        Ok(self.records.get(name).map(|record| record.queue.clone()))
    }

    async fn set_entry_expiration(
        &self,
        name: &str,
        token: &str,
        expiration: i64,
    ) -> anyhow::Result<()> {
        if let Some(mut record) = self.records.get_mut(name)
            && let Some(entry) = record.queue.iter_mut().find(|e| e.token == token)
        {
            entry.expiration = expiration;
        }
        Ok(())
    }

    async fn purge_expired(
        &self,
        name: &str,
        now: i64,
    ) -> anyhow::Result<Option<Vec<QueueEntry>>> {
        match self.records.get_mut(name) {
            Some(mut record) => {
                record.queue.retain(|e| !e.is_expired(now));
                Ok(Some(record.queue.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove_entry(&self, name: &str, token: &str) -> anyhow::Result<()> {
        if let Some(mut record) = self.records.get_mut(name) {
            record.queue.retain(|e| e.token != token);
        }
        Ok(())
    }

    async fn purge_expired_all(&self, now: i64) -> anyhow::Result<()> {
        for mut record in self.records.iter_mut() {
            record.queue.retain(|e| !e.is_expired(now));
        }
        Ok(())
    }

    async fn delete_empty_records(&self) -> anyhow::Result<()> {
        self.records.retain(|_, record| !record.queue.is_empty());
        Ok(())
    }
}
