// src/events/mod.rs
//
// Internal Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod handlers;
pub mod types;
pub mod ui;

pub use types::DomainEvent;

pub use types::{
    // Reader
    BookmarkAdded,
    BookmarkRemoved,
    // Playback
    PlaybackFailed,
    PlaybackFinished,
    PlaybackPaused,
    PlaybackResumed,
    PlaybackStarted,
    PlaybackStopped,
    PlayingVerseChanged,
    VerseCopied,
    VerseShared,
};

pub use bus::{EventBus, EventLogEntry};

pub use handlers::register_ui_projection;

pub use ui::{ReadUiEvent, UiEventChannel};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
