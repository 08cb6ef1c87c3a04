//! Core types for notesd

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Note ID type (Postgres `serial`)
pub type NoteId = i32;

/// A single note. Ids and creation times are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    #[serde(serialize_with = "crate::timefmt::serialize")]
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /notes`
#[derive(Debug, Clone, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_note_wire_shape() {
        let note = Note {
            id: 7,
            title: "Из БД".to_string(),
            content: "Ура!".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "title": "Из БД",
                "content": "Ура!",
                "created_at": "2024-05-01T12:00:00Z",
            })
        );
    }

    #[test]
    fn test_new_note_requires_both_fields() {
        assert!(serde_json::from_str::<NewNote>(r#"{"title":"t"}"#).is_err());
        assert!(serde_json::from_str::<NewNote>(r#"{"title":1,"content":"c"}"#).is_err());

        let ok: NewNote = serde_json::from_str(r#"{"title":"","content":""}"#).unwrap();
        assert!(ok.title.is_empty());
    }
}
