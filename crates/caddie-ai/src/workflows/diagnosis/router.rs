use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::domain::SessionId;
use super::repository::{RepositoryError, SessionRepository, SubmissionSink};
use super::service::{DiagnosisService, DiagnosisServiceError};

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub(crate) option: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PreviewRequest {
    #[serde(default)]
    pub(crate) answers: Vec<String>,
}

/// Router builder exposing HTTP endpoints for the diagnosis workflow.
pub fn diagnosis_router<R, S>(service: Arc<DiagnosisService<R, S>>) -> Router
where
    R: SessionRepository + 'static,
    S: SubmissionSink + 'static,
{
    Router::new()
        .route("/api/v1/diagnosis/sessions", post(start_handler::<R, S>))
        .route(
            "/api/v1/diagnosis/sessions/:session_id",
            get(state_handler::<R, S>),
        )
        .route(
            "/api/v1/diagnosis/sessions/:session_id/answers",
            post(answer_handler::<R, S>),
        )
        .route(
            "/api/v1/diagnosis/sessions/:session_id/back",
            post(back_handler::<R, S>),
        )
        .route(
            "/api/v1/diagnosis/sessions/:session_id/reset",
            post(reset_handler::<R, S>),
        )
        .route(
            "/api/v1/diagnosis/sessions/:session_id/recommendations",
            get(ranking_handler::<R, S>),
        )
        .route(
            "/api/v1/diagnosis/preview",
            post(preview_handler::<R, S>),
        )
        .with_state(service)
}

pub(crate) async fn start_handler<R, S>(
    State(service): State<Arc<DiagnosisService<R, S>>>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SubmissionSink + 'static,
{
    match service.start_session() {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn state_handler<R, S>(
    State(service): State<Arc<DiagnosisService<R, S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SubmissionSink + 'static,
{
    match service.current_state(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answer_handler<R, S>(
    State(service): State<Arc<DiagnosisService<R, S>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<AnswerRequest>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SubmissionSink + 'static,
{
    match service.submit_answer(&SessionId(session_id), &request.option) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn back_handler<R, S>(
    State(service): State<Arc<DiagnosisService<R, S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SubmissionSink + 'static,
{
    match service.go_back(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reset_handler<R, S>(
    State(service): State<Arc<DiagnosisService<R, S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SubmissionSink + 'static,
{
    match service.reset_session(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn ranking_handler<R, S>(
    State(service): State<Arc<DiagnosisService<R, S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SubmissionSink + 'static,
{
    match service.ranking(&SessionId(session_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn preview_handler<R, S>(
    State(service): State<Arc<DiagnosisService<R, S>>>,
    axum::Json(request): axum::Json<PreviewRequest>,
) -> Response
where
    R: SessionRepository + 'static,
    S: SubmissionSink + 'static,
{
    match service.preview(&request.answers) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: DiagnosisServiceError) -> Response {
    let status = match &error {
        // User picked something outside the offered set: re-prompt.
        DiagnosisServiceError::Flow(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DiagnosisServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        DiagnosisServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        DiagnosisServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DiagnosisServiceError::Catalog(_) => StatusCode::SERVICE_UNAVAILABLE,
        DiagnosisServiceError::Schema(_) => {
            // Option sets drifted between presentation and normalizer; this
            // is a configuration bug, not something the golfer can fix.
            error!(%error, "answer schema drift detected, aborting ranking");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
