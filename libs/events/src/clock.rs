//! The wall-clock seam.
//!
//! The builder reads the clock exactly once per construction. Production
//! code uses [`SystemClock`]; tests inject a fixed instant.

use chrono::{DateTime, Utc};

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current wall-clock instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The production clock: `Utc::now`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
