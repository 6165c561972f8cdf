//! Lock manager configuration

use std::time::Duration;

/// Configuration for the lock manager
#[derive(Debug, Clone)]
pub struct LockConfig {
    /// Default bound on how long `acquire` waits before failing with
    /// `Timeout`; also the TTL of the pending entry itself
    pub default_timeout: Duration,
    /// Default lease granted to a request once it reaches the head of the
    /// queue
    pub default_lease: Duration,
    /// Cadence of the poll loop while waiting behind other requests
    pub poll_interval: Duration,
    /// Cadence of the background expiry sweep
    pub sweep_interval: Duration,
}

impl Default for LockConfig {
    fn default() -> Self {
        Self {
            default_timeout: Duration::from_secs(5),
            default_lease: Duration::from_secs(5),
            poll_interval: Duration::from_secs(1),
            sweep_interval: Duration::from_secs(3600),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LockConfig::default();
        assert_eq!(config.default_timeout, Duration::from_secs(5));
        assert_eq!(config.default_lease, Duration::from_secs(5));
        assert_eq!(config.poll_interval, Duration::from_secs(1));
        assert_eq!(config.sweep_interval, Duration::from_secs(3600));
    }
}
