use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::verse::Verse;

/// A verse the reader saved for later. At most one per verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: Uuid,
    pub global_index: u32,
    pub chapter_number: u16,
    pub chapter_name: String,
    pub verse_number: u16,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    pub fn for_verse(verse: &Verse) -> Self {
        Self {
            id: Uuid::new_v4(),
            global_index: verse.global_index,
            chapter_number: verse.chapter_number,
            chapter_name: verse.chapter_name_local.clone(),
            verse_number: verse.verse_number,
            created_at: Utc::now(),
        }
    }
}
