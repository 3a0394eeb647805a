//! External service port traits (GPU training server, result sink).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::TrainingServerError;

// =============================================================================
// Training Types
// =============================================================================

/// Hyperparameters sent with every training job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingParams {
    pub epoch: u32,
    pub batch_size: u32,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            epoch: 100,
            batch_size: 64,
        }
    }
}

/// Body of `POST /start-train` on the GPU server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingJobRequest {
    pub training_id: String,
    pub params: TrainingParams,
    pub webhook_url: String,
}

/// Result the GPU server posts back to our webhook.
///
/// Nothing here is verified: the caller is not authenticated and every
/// field is passed along as opaque JSON. A missing field reads as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingCallback {
    #[serde(default)]
    pub training_id: serde_json::Value,
    #[serde(default)]
    pub status: serde_json::Value,
    #[serde(default)]
    pub result: serde_json::Value,
}

// =============================================================================
// Training Server Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrainingServerPort: Send + Sync {
    /// Ask the server to start a job. Returns once the server accepts it;
    /// the outcome arrives later through the webhook.
    async fn start_training(&self, request: &TrainingJobRequest)
        -> Result<(), TrainingServerError>;
}

// =============================================================================
// Result Sink Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait TrainingResultSink: Send + Sync {
    fn record(&self, callback: &TrainingCallback);
}
