//! Error types for port operations.

/// Outbound call to the GPU training server failed.
#[derive(Debug, thiserror::Error)]
pub enum TrainingServerError {
    /// The request never got a response (connection refused, DNS, timeout).
    #[error("Training server request failed: {0}")]
    Request(String),

    /// The server answered with a non-2xx status.
    #[error("Training server rejected request with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

impl TrainingServerError {
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            body: body.into(),
        }
    }
}
