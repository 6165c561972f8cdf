//! Tranca Lock - Distributed lock manager
//!
//! Coordinates exclusive access to named resources across processes that
//! share nothing but a document store. A caller acquires a lock by name
//! and receives an opaque token; requests queue FIFO behind the current
//! holder, a holder's lease expires automatically if it crashes, and a
//! background sweeper reclaims abandoned state.
//!
//! The manager keeps no long-lived in-process state: the shared lock
//! record in the store is the only coordination medium, and all mutation
//! goes through the store's per-record atomic operations.

pub mod config;
pub mod manager;
pub mod sweeper;

// Re-exports for convenience
pub use config::LockConfig;
pub use manager::LockManager;
