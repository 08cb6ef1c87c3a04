//! HTTP API server

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::store::NoteStore;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    let notes: MethodRouter<AppState> = get(handlers::list_notes)
        .post(handlers::create_note)
        .fallback(handlers::method_not_allowed);

    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/notes", notes)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Convenience helper wrapping a store directly
pub fn create_store_router(store: Arc<dyn NoteStore>) -> Router {
    create_router(AppState::new(store))
}
