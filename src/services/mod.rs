// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod bookmark_service;
pub mod corpus_service;
pub mod playback_controller;
pub mod playback_sequencer;
pub mod playback_service;
pub mod verse_action_service;

pub use bookmark_service::BookmarkService;

pub use corpus_service::CorpusService;

pub use playback_controller::{PlaybackController, PlaybackHandle};

pub use playback_sequencer::PlaybackSequencer;

pub use playback_service::{PlaybackService, StartPlaybackRequest};

pub use verse_action_service::{compose_verse_text, VerseActionService};
