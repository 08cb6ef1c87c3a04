//! Note storage layer
//!
//! Provides a unified interface over the in-memory and Postgres backends

use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use std::sync::Arc;
use std::time::Duration;

use crate::types::Note;
use crate::Result;

pub mod memory;
pub mod postgres;

/// Note store trait
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Prepare the backend before it serves requests
    async fn init(&self) -> Result<()>;

    /// All notes in ascending id order
    async fn list(&self) -> Result<Vec<Note>>;

    /// Append a note, assigning its id and creation time
    async fn create(&self, title: String, content: String) -> Result<Note>;

    /// Short backend name for logs
    fn backend(&self) -> &'static str;
}

/// Store configuration
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Memory,
    Postgres {
        options: PgConnectOptions,
        max_connections: u32,
        acquire_timeout: Duration,
    },
}

/// Create and initialise a store from config
pub async fn create_store(config: StoreConfig) -> Result<Arc<dyn NoteStore>> {
    let store: Arc<dyn NoteStore> = match config {
        StoreConfig::Memory => Arc::new(memory::MemoryStore::new()),
        StoreConfig::Postgres {
            options,
            max_connections,
            acquire_timeout,
        } => Arc::new(
            postgres::PostgresStore::connect(options, max_connections, acquire_timeout).await?,
        ),
    };

    store.init().await?;
    tracing::info!(backend = store.backend(), "Note store ready");

    Ok(store)
}
