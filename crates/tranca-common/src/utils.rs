//! Time utilities

use chrono::Utc;

/// Current time in milliseconds since the UNIX epoch
///
/// All expirations in the store are absolute instants in this unit.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
