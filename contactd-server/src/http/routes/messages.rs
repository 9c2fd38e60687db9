//! Contact form endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::SecondsFormat;
use serde::Serialize;

use crate::db::repos::{Message, MessageRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::Submission;

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub message: String,
    pub submitted_at: String,
}

impl From<Message> for MessageResponse {
    fn from(m: Message) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            message: m.message,
            submitted_at: m.submitted_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Acknowledgement for a stored submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
}

/// POST /submit - store a contact form submission
async fn submit(
    State(state): State<Arc<AppState>>,
    ValidJson(submission): ValidJson<Submission>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let id = MessageRepo::new(&state.pool)
        .insert_message(&submission.name, &submission.email, &submission.message)
        .await
        .map_err(ApiError::SaveFailed)?;

    tracing::debug!(id, "submission stored");

    Ok(Json(SubmitResponse {
        message: "Submission successful!",
    }))
}

/// GET /messages - list every submission, newest first
async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = MessageRepo::new(&state.pool)
        .list_messages()
        .await
        .map_err(ApiError::FetchFailed)?;

    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

/// Message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/submit", post(submit))
        .route("/messages", get(list_messages))
}
