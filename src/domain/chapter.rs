// src/domain/chapter.rs
//
// Derived views over the verse table: one row per chapter, section or page.
// Never mutated on their own; they are recomputed from the corpus.

use serde::{Deserialize, Serialize};

/// Highest chapter number in the corpus
pub const CHAPTER_COUNT: u16 = 114;

/// Number of reading-plan sections (juz)
pub const SECTION_COUNT: u16 = 30;

/// Number of print pages in the standard mushaf layout
pub const PAGE_COUNT: u16 = 604;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSummary {
    pub chapter_number: u16,
    pub name_local: String,
    pub name_translated: String,
    pub name_original: String,
    pub verse_count: u32,
}

impl ChapterSummary {
    /// Case-insensitive substring match against every name variant.
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        [&self.name_local, &self.name_translated, &self.name_original]
            .iter()
            .any(|name| name.to_lowercase().contains(needle))
    }
}

/// Drawer entry for a section or a page: where it starts and how long it is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub number: u16,
    pub first_chapter_number: u16,
    pub first_chapter_name: String,
    pub first_verse_number: u16,
    pub verse_count: u32,
}

/// Which grouping a reader screen is opened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "index", content = "number", rename_all = "snake_case")]
pub enum ReadTarget {
    Chapter(u16),
    Section(u16),
    Page(u16),
}

impl std::fmt::Display for ReadTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadTarget::Chapter(n) => write!(f, "chapter {}", n),
            ReadTarget::Section(n) => write!(f, "section {}", n),
            ReadTarget::Page(n) => write!(f, "page {}", n),
        }
    }
}
