//! Engine configuration from environment variables.
//!
//! Every value has a default, so the engine starts with no environment at all.

use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_GPU_SERVER_URL: &str = "http://172.10.5.110:8000";
pub const DEFAULT_TRAINING_WEBHOOK_URL: &str = "http://172.10.5.145:3000/api/training-callback";
pub const DEFAULT_TURN_LATENCY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    /// Base URL of the GPU training server (`/start-train` is appended).
    pub gpu_server_url: String,
    /// Address the GPU server calls back with results. Must be reachable
    /// from the GPU host, so not `localhost`.
    pub training_webhook_url: String,
    /// Simulated processing time before a command is answered.
    pub turn_latency: Duration,
    /// Comma-separated origins, or `*`. `None` disables the CORS layer.
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            gpu_server_url: DEFAULT_GPU_SERVER_URL.to_string(),
            training_webhook_url: DEFAULT_TRAINING_WEBHOOK_URL.to_string(),
            turn_latency: Duration::from_millis(DEFAULT_TURN_LATENCY_MS),
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unparseable numbers fall back
    /// to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let server_port = non_empty("SERVER_PORT")
            .or_else(|| non_empty("PORT"))
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);
        let turn_latency_ms = non_empty("TURN_LATENCY_MS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TURN_LATENCY_MS);

        Self {
            server_host: non_empty("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.into()),
            server_port,
            gpu_server_url: non_empty("GPU_SERVER_URL")
                .unwrap_or_else(|| DEFAULT_GPU_SERVER_URL.into()),
            training_webhook_url: non_empty("TRAINING_WEBHOOK_URL")
                .unwrap_or_else(|| DEFAULT_TRAINING_WEBHOOK_URL.into()),
            turn_latency: Duration::from_millis(turn_latency_ms),
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS"),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
