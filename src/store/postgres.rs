//! Postgres note store
//!
//! Ids and timestamps come from the database (`SERIAL`, `DEFAULT NOW()`), so
//! concurrent inserts are ordered by Postgres itself.

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;

use crate::types::Note;
use crate::Result;

use super::NoteStore;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS notes (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const SELECT_NOTES: &str = "SELECT id, title, content, created_at FROM notes ORDER BY id";

const INSERT_NOTE: &str = r#"
    INSERT INTO notes (title, content)
    VALUES ($1, $2)
    RETURNING id, title, content, created_at
"#;

pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connect a pool. Fails if the server cannot be reached.
    pub async fn connect(
        options: PgConnectOptions,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await?;

        tracing::info!(max_connections, "Connected to PostgreSQL");
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl NoteStore for PostgresStore {
    async fn init(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        tracing::info!(table = "notes", "Schema ready");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(SELECT_NOTES)
            .fetch_all(&self.pool)
            .await?;
        Ok(notes)
    }

    async fn create(&self, title: String, content: String) -> Result<Note> {
        let note = sqlx::query_as::<_, Note>(INSERT_NOTE)
            .bind(title)
            .bind(content)
            .fetch_one(&self.pool)
            .await?;
        Ok(note)
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
