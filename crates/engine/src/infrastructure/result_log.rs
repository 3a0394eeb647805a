//! Training result sink that writes to the tracing log.

use crate::infrastructure::ports::{TrainingCallback, TrainingResultSink};

/// Logs every callback. Results are not stored or forwarded anywhere else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogResultSink;

impl TrainingResultSink for LogResultSink {
    fn record(&self, callback: &TrainingCallback) {
        tracing::info!(
            training_id = %callback.training_id,
            status = %callback.status,
            result = %callback.result,
            "Training result received"
        );
    }
}
