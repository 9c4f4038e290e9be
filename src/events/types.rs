// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::PlaybackMode;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($name)
            }
        }
    };
}

// ============================================================================
// PLAYBACK EVENTS
// ============================================================================

/// Emitted when a new playback session starts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub mode: PlaybackMode,
    pub position: usize,
    pub length: usize,
}

impl PlaybackStarted {
    pub fn new(mode: PlaybackMode, position: usize, length: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            mode,
            position,
            length,
        }
    }
}

domain_event!(PlaybackStarted);

/// Emitted whenever a different verse of the sequence starts playing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayingVerseChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
}

impl PlayingVerseChanged {
    pub fn new(position: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
        }
    }
}

domain_event!(PlayingVerseChanged);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackPaused {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
}

impl PlaybackPaused {
    pub fn new(position: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
        }
    }
}

domain_event!(PlaybackPaused);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackResumed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
}

impl PlaybackResumed {
    pub fn new(position: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
        }
    }
}

domain_event!(PlaybackResumed);

/// Emitted when the sequence ran to its end (or the single verse ended)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackFinished {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
}

impl PlaybackFinished {
    pub fn new(position: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
        }
    }
}

domain_event!(PlaybackFinished);

/// Emitted when a session is discarded by an explicit stop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStopped {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl PlaybackStopped {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for PlaybackStopped {
    fn default() -> Self {
        Self::new()
    }
}

domain_event!(PlaybackStopped);

/// Emitted when the player reported an error; the session is abandoned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
    pub message: String,
}

impl PlaybackFailed {
    pub fn new(position: usize, message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
            message,
        }
    }
}

domain_event!(PlaybackFailed);

// ============================================================================
// READER EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub bookmark_id: Uuid,
    pub chapter_name: String,
    pub verse_number: u16,
}

impl BookmarkAdded {
    pub fn new(bookmark_id: Uuid, chapter_name: String, verse_number: u16) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            bookmark_id,
            chapter_name,
            verse_number,
        }
    }
}

domain_event!(BookmarkAdded);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub bookmark_id: Uuid,
}

impl BookmarkRemoved {
    pub fn new(bookmark_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            bookmark_id,
        }
    }
}

domain_event!(BookmarkRemoved);

/// Emitted after verse text was composed for the clipboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseCopied {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub chapter_name: String,
    pub verse_number: u16,
}

impl VerseCopied {
    pub fn new(chapter_name: String, verse_number: u16) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            chapter_name,
            verse_number,
        }
    }
}

domain_event!(VerseCopied);

/// Emitted after verse text was composed for a share sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerseShared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub chapter_name: String,
    pub verse_number: u16,
}

impl VerseShared {
    pub fn new(chapter_name: String, verse_number: u16) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            chapter_name,
            verse_number,
        }
    }
}

domain_event!(VerseShared);
