// src/lib.rs
// MyQoran core - verse corpus queries and recitation playback
//
// Architecture:
// - Domain-centric: the corpus and the playback session live in `domain`
// - Event-driven: services report through the EventBus, the UI observes one
//   projected `ReadUiEvent` at a time
// - Explicit: language and reciter are passed into calls, never read globally
// - Single consumer: one controller task owns playback state
// - Application Layer: plain command functions for the host UI

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;
pub mod utils;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_verse_order,
    AudioResourceId,
    Bookmark,
    ChapterSummary,
    Corpus,
    DomainError,
    GroupSummary,
    Language,
    PlaybackMode,
    PlaybackSession,
    PlaybackSnapshot,
    PlaybackState,
    ReadTarget,
    Reciter,
    SearchResult,
    Settings,
    SettingsProvider,
    StaticSettings,
    TrackToken,
    Verse,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::{load_config, CoreConfig, PlayerConfig};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    register_ui_projection,
    DomainEvent,
    EventBus,
    EventLogEntry,
    ReadUiEvent,
    UiEventChannel,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    insert_verses,
    BookmarkRepository,
    SqliteBookmarkRepository,
    SqliteVerseRepository,
    VerseRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    BookmarkService,
    CorpusService,
    PlaybackController,
    PlaybackHandle,
    PlaybackSequencer,
    PlaybackService,
    StartPlaybackRequest,
    VerseActionService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

#[cfg(unix)]
pub use integrations::MpvAudioPlayer;
pub use integrations::{AudioPlayer, PlayerEvent, PlayerEventSink, PlayerNotification};
