//! Tranca Store - Lock record storage abstraction
//!
//! This crate provides:
//! - The `DocumentStore` trait: the per-record atomic operations the lock
//!   manager is built on
//! - Store document models (`LockRecord`, `QueueEntry`)
//! - `MemoryDocumentStore`: a DashMap-backed standalone backend

pub mod memory;
pub mod model;
pub mod traits;

// Re-exports for convenience
pub use memory::MemoryDocumentStore;
pub use model::{LockRecord, QueueEntry};
pub use traits::DocumentStore;
