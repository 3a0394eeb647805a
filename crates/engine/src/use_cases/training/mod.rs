//! Training relay use cases.
//!
//! Forwards training jobs to the GPU server and accepts the results it posts
//! back later. No job record is kept: a caller that wants to match a result
//! to its request has to remember the `training_id` itself.

use std::sync::Arc;

use crate::infrastructure::ports::{
    ClockPort, TrainingCallback, TrainingJobRequest, TrainingParams, TrainingResultSink,
    TrainingServerError, TrainingServerPort,
};

/// Container for training use cases.
pub struct TrainingUseCases {
    pub request: Arc<RequestTraining>,
    pub receive_result: Arc<ReceiveTrainingResult>,
}

impl TrainingUseCases {
    pub fn new(request: Arc<RequestTraining>, receive_result: Arc<ReceiveTrainingResult>) -> Self {
        Self {
            request,
            receive_result,
        }
    }
}

/// Job accepted by the GPU server. The result is still pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingAccepted {
    pub training_id: String,
}

/// Build a job id from the current time, e.g. `job_1709283600000`.
pub fn training_id_at(millis: i64) -> String {
    format!("job_{}", millis)
}

// =============================================================================
// Request Training
// =============================================================================

pub struct RequestTraining {
    server: Arc<dyn TrainingServerPort>,
    clock: Arc<dyn ClockPort>,
    webhook_url: String,
}

impl RequestTraining {
    pub fn new(
        server: Arc<dyn TrainingServerPort>,
        clock: Arc<dyn ClockPort>,
        webhook_url: impl Into<String>,
    ) -> Self {
        Self {
            server,
            clock,
            webhook_url: webhook_url.into(),
        }
    }

    /// Send one job to the GPU server. A single attempt; failures are logged
    /// here and returned to the caller.
    pub async fn execute(&self) -> Result<TrainingAccepted, TrainingError> {
        let request = TrainingJobRequest {
            training_id: training_id_at(self.clock.now().timestamp_millis()),
            params: TrainingParams::default(),
            webhook_url: self.webhook_url.clone(),
        };

        if let Err(e) = self.server.start_training(&request).await {
            tracing::error!(
                error = %e,
                training_id = %request.training_id,
                "GPU server connection failed"
            );
            return Err(TrainingError::Server(e));
        }

        tracing::info!(
            training_id = %request.training_id,
            epoch = request.params.epoch,
            batch_size = request.params.batch_size,
            "Training request sent"
        );

        Ok(TrainingAccepted {
            training_id: request.training_id,
        })
    }
}

// =============================================================================
// Receive Training Result
// =============================================================================

pub struct ReceiveTrainingResult {
    sink: Arc<dyn TrainingResultSink>,
}

impl ReceiveTrainingResult {
    pub fn new(sink: Arc<dyn TrainingResultSink>) -> Self {
        Self { sink }
    }

    /// Hand a webhook delivery to the sink. Accepted as-is: the sender is not
    /// authenticated and the id is not checked against anything.
    pub fn execute(&self, callback: &TrainingCallback) {
        self.sink.record(callback);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrainingError {
    #[error("GPU server error: {0}")]
    Server(#[from] TrainingServerError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mockall::predicate::eq;

    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MockTrainingResultSink, MockTrainingServerPort};

    const WEBHOOK: &str = "http://172.10.5.145:3000/api/training-callback";

    fn fixed_clock() -> Arc<dyn ClockPort> {
        let now = Utc
            .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
            .single()
            .expect("valid date");
        Arc::new(FixedClock(now))
    }

    #[tokio::test]
    async fn sends_fixed_params_and_webhook() {
        let clock = fixed_clock();
        let expected_id = training_id_at(clock.now().timestamp_millis());

        let expected = TrainingJobRequest {
            training_id: expected_id.clone(),
            params: TrainingParams {
                epoch: 100,
                batch_size: 64,
            },
            webhook_url: WEBHOOK.to_string(),
        };

        let mut server = MockTrainingServerPort::new();
        server
            .expect_start_training()
            .withf(move |request| *request == expected)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RequestTraining::new(Arc::new(server), clock, WEBHOOK);
        let accepted = use_case.execute().await.expect("accepted");

        assert_eq!(accepted.training_id, expected_id);
        assert!(accepted.training_id.starts_with("job_"));
    }

    #[tokio::test]
    async fn server_failure_is_returned_without_retry() {
        let mut server = MockTrainingServerPort::new();
        server
            .expect_start_training()
            .times(1)
            .returning(|_| Err(TrainingServerError::Request("connection refused".into())));

        let use_case = RequestTraining::new(Arc::new(server), fixed_clock(), WEBHOOK);
        let err = use_case.execute().await.expect_err("server is down");

        assert!(matches!(
            err,
            TrainingError::Server(TrainingServerError::Request(_))
        ));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = MockTrainingServerPort::new();
        server
            .expect_start_training()
            .times(1)
            .returning(|_| Err(TrainingServerError::rejected(503, "busy")));

        let use_case = RequestTraining::new(Arc::new(server), fixed_clock(), WEBHOOK);
        let err = use_case.execute().await.expect_err("server rejected");

        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn callback_is_recorded_as_received() {
        let callback = TrainingCallback {
            training_id: serde_json::json!("job_1"),
            status: serde_json::json!("done"),
            result: serde_json::json!({ "accuracy": 0.9 }),
        };

        let mut sink = MockTrainingResultSink::new();
        sink.expect_record()
            .with(eq(callback.clone()))
            .times(1)
            .return_const(());

        ReceiveTrainingResult::new(Arc::new(sink)).execute(&callback);
    }
}
