use std::time::Duration;

/// How long the UI loop waits for a key before checking for sync results
pub const POLL_INTERVAL_MS: u64 = 100;

/// Upper bound on waiting for in-flight saves when quitting
pub const SHUTDOWN_GRACE_SECS: u64 = 5;

pub fn poll_interval() -> Duration {
    Duration::from_millis(POLL_INTERVAL_MS)
}

pub fn shutdown_grace() -> Duration {
    Duration::from_secs(SHUTDOWN_GRACE_SECS)
}
