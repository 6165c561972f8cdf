//! Error types for Tranca
//!
//! This module defines `TrancaError`, the application-specific error enum.
//! Failures originating in the backing store arrive as `anyhow::Error` and
//! are carried unchanged in the `Store` variant.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum TrancaError {
    /// The request was not promoted to the head of the queue within its
    /// timeout, or the caller's own pending entry expired while waiting.
    /// The two causes are not distinguishable from the error alone.
    #[error("timeout waiting for lock '{0}'")]
    Timeout(String),

    #[error("caused: {0}")]
    IllegalArgument(String),

    /// The token is not the current, unexpired holder of the lock
    #[error("lock '{name}' is not held by token '{token}'")]
    NotHeld { name: String, token: String },

    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}

impl TrancaError {
    /// Whether the error is a lock-acquisition timeout (always retryable)
    pub fn is_timeout(&self) -> bool {
        matches!(self, TrancaError::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrancaError::Timeout("res".to_string());
        assert_eq!(format!("{}", err), "timeout waiting for lock 'res'");

        let err = TrancaError::IllegalArgument("invalid param".to_string());
        assert_eq!(format!("{}", err), "caused: invalid param");

        let err = TrancaError::NotHeld {
            name: "res".to_string(),
            token: "t1".to_string(),
        };
        assert_eq!(format!("{}", err), "lock 'res' is not held by token 't1'");
    }

    #[test]
    fn test_store_error_from_anyhow() {
        let err = TrancaError::from(anyhow::anyhow!("connection refused"));
        assert_eq!(format!("{}", err), "store error: connection refused");
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_is_timeout() {
        assert!(TrancaError::Timeout("res".to_string()).is_timeout());
        assert!(!TrancaError::IllegalArgument("x".to_string()).is_timeout());
    }
}
