//! In-process note store

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::types::{Note, NoteId};
use crate::Result;

use super::NoteStore;

pub const SEED_TITLE: &str = "First note";
pub const SEED_CONTENT: &str = "This note lives in memory";

struct Inner {
    notes: Vec<Note>,
    next_id: NoteId,
}

/// Notes kept in a vector. The counter and the vector share one lock so id
/// assignment and append happen together.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                notes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.notes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Inner {
    fn append(&mut self, title: String, content: String) -> Note {
        let note = Note {
            id: self.next_id,
            title,
            content,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        self.notes.push(note.clone());
        note
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn init(&self) -> Result<()> {
        let mut inner = self.inner.write().await;
        if inner.notes.is_empty() {
            let seed = inner.append(SEED_TITLE.to_string(), SEED_CONTENT.to_string());
            tracing::debug!(id = seed.id, "Seeded memory store");
        }
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Note>> {
        Ok(self.inner.read().await.notes.clone())
    }

    async fn create(&self, title: String, content: String) -> Result<Note> {
        Ok(self.inner.write().await.append(title, content))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_start_at_one() {
        let store = MemoryStore::new();
        assert!(store.list().await.unwrap().is_empty());

        for expected in 1..=5 {
            let note = store
                .create(format!("title {expected}"), String::new())
                .await
                .unwrap();
            assert_eq!(note.id, expected);
        }

        let ids: Vec<_> = store.list().await.unwrap().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_init_seeds_once() {
        let store = MemoryStore::new();
        store.init().await.unwrap();
        store.init().await.unwrap();

        let notes = store.list().await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, 1);
        assert_eq!(notes[0].title, SEED_TITLE);
        assert_eq!(notes[0].content, SEED_CONTENT);

        let next = store.create("a".into(), "b".into()).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_created_at_is_stable() {
        let store = MemoryStore::new();
        let created = store.create("t".into(), "c".into()).await.unwrap();
        store.create("u".into(), "d".into()).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed[0], created);
        assert!(listed[0].created_at <= listed[1].created_at);
    }
}
