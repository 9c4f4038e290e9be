// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod bookmark;
pub mod chapter;
pub mod corpus;
pub mod playback;
pub mod search;
pub mod settings;
pub mod verse;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Verse Domain
pub use verse::{validate_verse_order, AudioResourceId, Verse};

// Derived views
pub use chapter::{
    ChapterSummary, GroupSummary, ReadTarget, CHAPTER_COUNT, PAGE_COUNT, SECTION_COUNT,
};

// Corpus snapshot
pub use corpus::Corpus;

// Search
pub use search::SearchResult;

// Playback
pub use playback::{PlaybackMode, PlaybackSession, PlaybackSnapshot, PlaybackState, TrackToken};

// Bookmarks
pub use bookmark::Bookmark;

// Settings
pub use settings::{Language, Reciter, Settings, SettingsProvider, StaticSettings};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of corpus invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
