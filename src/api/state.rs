//! API server state

use std::sync::Arc;

use crate::store::NoteStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Backend-agnostic note store
    pub store: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Name of the backing store
    pub fn backend(&self) -> &'static str {
        self.store.backend()
    }
}
