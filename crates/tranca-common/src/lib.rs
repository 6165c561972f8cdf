//! Tranca Common - Shared types and utilities
//!
//! This crate provides the foundational types used across all Tranca
//! components:
//! - Error types
//! - Unique-token generation
//! - Time utilities

pub mod error;
pub mod token;
pub mod utils;

// Re-exports for convenience
pub use error::TrancaError;
pub use token::{TokenGenerator, UuidTokenGenerator};
pub use utils::now_millis;
