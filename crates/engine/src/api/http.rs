//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use samguk_domain::{CommandLogEntry, Nation, NationProfile};

use crate::app::App;
use crate::infrastructure::ports::TrainingCallback;
use crate::use_cases::kingdom::{KingdomError, KingdomStatusReport};
use crate::use_cases::session::{SessionError, SessionSnapshot};
use crate::use_cases::turn::{CommandOutcome, TurnError};

pub const TRAINING_REQUESTED_MESSAGE: &str = "학습 요청을 보냈습니다.";
pub const GPU_SERVER_ERROR_MESSAGE: &str = "GPU 서버 에러";
pub const KINGDOM_NOT_FOUND_MESSAGE: &str = "국가를 찾을 수 없습니다.";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/request-training", post(request_training))
        .route("/api/training-callback", post(training_callback))
        .route("/api/nations", get(list_nations))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/{id}", get(get_session).delete(end_session))
        .route("/api/sessions/{id}/commands", post(submit_command))
        .route("/status/{country_name}", get(kingdom_status))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Training Relay
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct TrainingRequestResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

async fn request_training(
    State(app): State<Arc<App>>,
) -> (StatusCode, Json<TrainingRequestResponse>) {
    match app.use_cases.training.request.execute().await {
        Ok(accepted) => (
            StatusCode::OK,
            Json(TrainingRequestResponse {
                success: true,
                message: TRAINING_REQUESTED_MESSAGE.to_string(),
                id: Some(accepted.training_id),
            }),
        ),
        // Detail was logged by the use case; the caller only gets a generic message.
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(TrainingRequestResponse {
                success: false,
                message: GPU_SERVER_ERROR_MESSAGE.to_string(),
                id: None,
            }),
        ),
    }
}

async fn training_callback(
    State(app): State<Arc<App>>,
    Json(callback): Json<TrainingCallback>,
) -> (StatusCode, &'static str) {
    app.use_cases.training.receive_result.execute(&callback);
    (StatusCode::OK, "OK")
}

// =============================================================================
// Game Sessions
// =============================================================================

async fn list_nations() -> Json<Vec<NationProfile>> {
    Json(Nation::all().iter().map(Nation::profile).collect())
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateSessionBody {
    #[serde(default)]
    pub nation: Option<String>,
}

async fn create_session(
    State(app): State<Arc<App>>,
    body: Option<Json<CreateSessionBody>>,
) -> Result<(StatusCode, Json<SessionSnapshot>), ApiError> {
    // A bare POST without a JSON body starts a default session.
    let body = body.map(|Json(body)| body).unwrap_or_default();
    let snapshot = app
        .use_cases
        .session
        .create
        .execute(body.nation.as_deref())
        .await?;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

async fn get_session(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let snapshot = app.use_cases.session.get.execute(id).await?;
    Ok(Json(snapshot))
}

async fn end_session(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases.session.end.execute(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct CommandBody {
    pub command: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandStatus {
    Resolved,
    Ignored,
    Busy,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub outcome: CommandStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<CommandLogEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finance_gain: Option<i64>,
    pub session: SessionSnapshot,
}

async fn submit_command(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(body): Json<CommandBody>,
) -> Result<Json<CommandResponse>, ApiError> {
    let outcome = app
        .use_cases
        .turn
        .submit
        .execute(id, body.command)
        .await?;

    let (status, entry, finance_gain) = match outcome {
        CommandOutcome::Resolved(resolution) => {
            let gain = resolution.finance_gain();
            (CommandStatus::Resolved, Some(resolution.entry), Some(gain))
        }
        CommandOutcome::Ignored => (CommandStatus::Ignored, None, None),
        CommandOutcome::Busy => (CommandStatus::Busy, None, None),
    };

    let session = app.use_cases.session.get.execute(id).await?;
    Ok(Json(CommandResponse {
        outcome: status,
        entry,
        finance_gain,
        session,
    }))
}

// =============================================================================
// Kingdom Status
// =============================================================================

async fn kingdom_status(
    State(app): State<Arc<App>>,
    Path(country_name): Path<String>,
) -> Result<Json<KingdomStatusReport>, ApiError> {
    let report = app.use_cases.kingdom.status.execute(&country_name)?;
    Ok(Json(report))
}

// =============================================================================
// Errors
// =============================================================================

/// Client errors carry a `{"detail": ...}` JSON body.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDetail { detail: msg })).into_response()
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDetail { detail: msg })).into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorDetail {
    detail: String,
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound(_) => ApiError::NotFound("Session not found".to_string()),
            SessionError::InvalidNation(_) => ApiError::BadRequest(e.to_string()),
        }
    }
}

impl From<TurnError> for ApiError {
    fn from(e: TurnError) -> Self {
        match e {
            TurnError::SessionNotFound(_) => ApiError::NotFound("Session not found".to_string()),
            TurnError::Interrupted(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<KingdomError> for ApiError {
    fn from(e: KingdomError) -> Self {
        match e {
            KingdomError::NotFound(_) => ApiError::NotFound(KINGDOM_NOT_FOUND_MESSAGE.to_string()),
        }
    }
}
