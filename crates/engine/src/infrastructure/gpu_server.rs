//! GPU training server client
//!
//! Implements the TrainingServerPort trait by posting jobs to the remote
//! server's `/start-train` endpoint. One attempt per job: no retry and no
//! timeout beyond reqwest's defaults.

use async_trait::async_trait;
use reqwest::Client;

use crate::infrastructure::ports::{TrainingJobRequest, TrainingServerError, TrainingServerPort};

/// Client for the GPU training server API
#[derive(Clone)]
pub struct GpuServerClient {
    client: Client,
    base_url: String,
}

impl GpuServerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn start_train_url(&self) -> String {
        format!("{}/start-train", self.base_url)
    }
}

#[async_trait]
impl TrainingServerPort for GpuServerClient {
    async fn start_training(
        &self,
        request: &TrainingJobRequest,
    ) -> Result<(), TrainingServerError> {
        let response = self
            .client
            .post(self.start_train_url())
            .json(request)
            .send()
            .await
            .map_err(|e| TrainingServerError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TrainingServerError::rejected(status.as_u16(), error_text));
        }

        tracing::debug!(
            training_id = %request.training_id,
            status = %status,
            "GPU server accepted training job"
        );
        Ok(())
    }
}
