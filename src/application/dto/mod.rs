// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)
// - Optional text degrades to "" here and nowhere else

use serde::{Deserialize, Serialize};

use crate::domain::{Bookmark, ChapterSummary, GroupSummary, Language, Verse};
use crate::utils::format_date;

// ============================================================================
// VERSE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseDto {
    pub global_index: u32,
    pub chapter_number: u16,
    pub chapter_name: String,
    pub chapter_name_translated: String,
    pub chapter_name_original: String,
    pub section_number: u16,
    pub page_number: u16,
    pub verse_number: u16,
    pub original_text: String,
    /// Translation in the reader's language
    pub translation: String,
    pub audio_resource_id: String,
}

impl VerseDto {
    pub fn from_verse(verse: Verse, language: Language) -> Self {
        let translation = verse
            .translation_for(language)
            .unwrap_or_default()
            .to_string();

        Self {
            global_index: verse.global_index,
            chapter_number: verse.chapter_number,
            chapter_name: verse.chapter_name_local,
            chapter_name_translated: verse.chapter_name_translated,
            chapter_name_original: verse.chapter_name_original,
            section_number: verse.section_number,
            page_number: verse.page_number,
            verse_number: verse.verse_number,
            original_text: verse.original_text,
            translation,
            audio_resource_id: verse.audio_resource_id.to_string(),
        }
    }
}

// ============================================================================
// INDEX DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterDto {
    pub chapter_number: u16,
    pub name: String,
    pub name_translated: String,
    pub name_original: String,
    pub verse_count: u32,
}

/// Drawer row for a section or a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDto {
    pub number: u16,
    pub chapter_name: String,
    pub verse_number: u16,
    pub verse_count: u32,
}

// ============================================================================
// BOOKMARK DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkDto {
    pub id: String,
    pub global_index: u32,
    pub chapter_number: u16,
    pub chapter_name: String,
    pub verse_number: u16,
    /// dd/MM/yyyy
    pub created_at: String,
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<ChapterSummary> for ChapterDto {
    fn from(chapter: ChapterSummary) -> Self {
        Self {
            chapter_number: chapter.chapter_number,
            name: chapter.name_local,
            name_translated: chapter.name_translated,
            name_original: chapter.name_original,
            verse_count: chapter.verse_count,
        }
    }
}

impl From<GroupSummary> for GroupDto {
    fn from(group: GroupSummary) -> Self {
        Self {
            number: group.number,
            chapter_name: group.first_chapter_name,
            verse_number: group.first_verse_number,
            verse_count: group.verse_count,
        }
    }
}

impl From<Bookmark> for BookmarkDto {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            id: bookmark.id.to_string(),
            global_index: bookmark.global_index,
            chapter_number: bookmark.chapter_number,
            chapter_name: bookmark.chapter_name,
            verse_number: bookmark.verse_number,
            created_at: format_date(&bookmark.created_at),
        }
    }
}
