//! Time and randomness, injected so turn resolution can be scripted in tests.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of "now" for log timestamps, entry ids and training job ids.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of turn draws and session ids.
pub trait RandomPort: Send + Sync {
    /// Uniform integer in `min..=max`. Implementations must not panic when
    /// `min == max`.
    fn gen_range(&self, min: i32, max: i32) -> i32;
    fn gen_uuid(&self) -> Uuid;
}
