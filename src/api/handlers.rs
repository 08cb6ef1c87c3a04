//! API handlers

use axum::extract::rejection::BytesRejection;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::types::{NewNote, Note};
use crate::{Error, Result};

/// Liveness check
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse { status: "alive" })
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
}

/// List all notes in creation order
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>> {
    let notes = state.store.list().await?;
    Ok(Json(notes))
}

/// Create a note
///
/// The body is decoded by hand rather than through `Json<T>` so that every
/// decoding failure is a 400, whatever the content type. Bodies over
/// [`MAX_BODY_BYTES`](crate::api::MAX_BODY_BYTES) are a 413.
pub async fn create_note(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Note>)> {
    let payload: NewNote = serde_json::from_slice(&body?)?;

    let note = state.store.create(payload.title, payload.content).await?;
    tracing::debug!(id = note.id, backend = state.backend(), "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// Any method other than GET/POST on `/notes`
pub async fn method_not_allowed() -> Error {
    Error::MethodNotSupported
}
