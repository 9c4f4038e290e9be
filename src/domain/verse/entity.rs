use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::settings::Language;
use crate::utils::three_digits;

/// Opaque handle the audio player resolves to something playable.
///
/// Corpus rows carry the bare `CCCVVV` key; `Reciter::resource_for` prefixes it
/// with the reciter's folder before it reaches the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioResourceId(String);

impl AudioResourceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Builds the canonical `CCCVVV` key for a verse.
    pub fn for_verse(chapter_number: u16, verse_number: u16) -> Self {
        Self(format!(
            "{}{}",
            three_digits(chapter_number as u32),
            three_digits(verse_number as u32)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AudioResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single verse of the corpus. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Position across the whole corpus (ordering key)
    pub global_index: u32,

    pub chapter_number: u16,
    pub chapter_name_local: String,
    pub chapter_name_translated: String,
    pub chapter_name_original: String,

    /// Reading-plan division (juz)
    pub section_number: u16,

    /// Print page
    pub page_number: u16,

    /// Verse number within its chapter, starting at 1
    pub verse_number: u16,

    pub original_text: String,
    pub translation_primary: String,

    /// Not every verse carries a secondary translation
    pub translation_secondary: Option<String>,

    pub audio_resource_id: AudioResourceId,
}

impl Verse {
    /// Translation for the given display language.
    ///
    /// Absence is preserved; callers decide how to render a missing value.
    pub fn translation_for(&self, language: Language) -> Option<&str> {
        match language {
            Language::Indonesian => Some(self.translation_primary.as_str()),
            Language::English => self.translation_secondary.as_deref(),
        }
    }

    /// `(chapter, verse)` pair, ordered the same way as `global_index`.
    pub fn position(&self) -> (u16, u16) {
        (self.chapter_number, self.verse_number)
    }
}
