//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The GPU training server (could swap the HTTP client for a queue)
//! - Where training results go (logs today, a job store later)
//! - Clock/Random (for testing)

mod error;
mod external;
mod testing;

pub use error::TrainingServerError;
pub use external::{
    TrainingCallback, TrainingJobRequest, TrainingParams, TrainingResultSink,
    TrainingServerPort,
};
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use external::{MockTrainingResultSink, MockTrainingServerPort};
#[cfg(test)]
pub use testing::MockClockPort;
