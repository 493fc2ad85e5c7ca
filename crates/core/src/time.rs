//! Keep track of time, both in native and web platforms!
pub use web_time::{Duration, Instant};

/// Creates a [`Duration`] representing the given amount of milliseconds.
pub fn milliseconds(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
