//! Wall-clock time and thread-local randomness behind the testability ports.

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::infrastructure::ports::{ClockPort, RandomPort};

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// `rand::thread_rng`. Bounds given in the wrong order are swapped instead
/// of hitting `gen_range`'s empty-range panic.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom;

impl RandomPort for SystemRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        rand::thread_rng().gen_range(low..=high)
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Always draws the midpoint of the requested range (rounded toward `min`).
#[cfg(test)]
pub struct MidpointRandom;

#[cfg(test)]
impl RandomPort for MidpointRandom {
    fn gen_range(&self, min: i32, max: i32) -> i32 {
        min + (max - min) / 2
    }

    fn gen_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}
