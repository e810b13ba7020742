use super::types::{ChatRequest, ChatResponse, ErrorResponse};
use crate::{error::Error, model::QaModel};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    /// Inference handle, set once at startup and never mutated. Absent
    /// when no model backend is configured.
    pub model: Option<Arc<dyn QaModel>>,
}

/// Maps an error to its HTTP status at the boundary: handle unset is 503,
/// everything else surfaced from inference is 500.
fn error_response(err: &Error) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        Error::ModelUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorResponse {
            detail: err.to_string(),
        }),
    )
}

fn validation_error(detail: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse { detail }),
    )
}

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Every body rejection (missing field, malformed or empty JSON) is
    // normalized to 422 with the framework's validation message.
    let Json(request) = payload.map_err(|rejection| validation_error(rejection.body_text()))?;

    if request.question.trim().is_empty() {
        return Err(validation_error("question must not be empty".to_string()));
    }

    info!("Received question: {}", request.question);

    let Some(model) = &state.model else {
        error!("Rejecting /chat request: no model handle configured");
        return Err(error_response(&Error::ModelUnavailable));
    };

    match model.answer(&request.question, &request.context).await {
        Ok(result) => {
            info!("Answered question ({} chars)", result.answer.len());
            Ok(Json(ChatResponse {
                answer: result.answer,
            }))
        }
        Err(e) => {
            error!("Inference failed: {}", e);
            Err(error_response(&e))
        }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "qa-service"
    }))
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Welcome to the Question-Answering Service. POST a question and a context to /chat."
    }))
}
