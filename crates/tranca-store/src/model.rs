//! Store document models

use serde::{Deserialize, Serialize};

/// A single pending or active request within a lock record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Opaque unique identifier proving the request's identity
    pub token: String,
    /// Absolute deadline in epoch milliseconds.
    ///
    /// The field is overloaded across two phases: while the entry waits in
    /// the queue it bounds how long the request itself may sit unattended
    /// (now + timeout at append time); once the entry reaches the head it
    /// is refreshed to the lease deadline (now + lease). Either way, an
    /// entry whose expiration has passed is abandoned and may be purged by
    /// any party.
    pub expiration: i64,
}

impl QueueEntry {
    pub fn new(token: impl Into<String>, expiration: i64) -> Self {
        Self {
            token: token.into(),
            expiration,
        }
    }

    /// Whether this entry is abandoned as of `now`
    pub fn is_expired(&self, now: i64) -> bool {
        self.expiration <= now
    }
}

/// The store-resident representation of contention over one name
///
/// Insertion order of the queue is the fairness order. A record whose
/// queue is empty is logically meaningless and is removed by
/// `delete_empty_records`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LockRecord {
    pub name: String,
    pub queue: Vec<QueueEntry>,
}

impl LockRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            queue: Vec::new(),
        }
    }

    /// The current or prospective holder, if any
    pub fn head(&self) -> Option<&QueueEntry> {
        self.queue.first()
    }
}
