// src/events/ui.rs
//
// The observer stream handed to the presentation layer.
//
// Exactly one notification is active at a time; a new one replaces the
// previous, and the screen acknowledges it back to `Idle` once shown.

use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ReadUiEvent {
    #[default]
    Idle,
    SuccessAddToBookmark(String),
    SuccessCopiedAyah(String),
    SuccessSharedAyah(String),
    /// Index into the sequence handed to playback
    PlayingAyahChanged(usize),
    ErrorPlayingAyah(String),
}

/// Holds the active `ReadUiEvent` and fans it out to any number of observers.
#[derive(Debug, Clone)]
pub struct UiEventChannel {
    sender: Arc<watch::Sender<ReadUiEvent>>,
}

impl UiEventChannel {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(ReadUiEvent::Idle);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn publish(&self, event: ReadUiEvent) {
        self.sender.send_replace(event);
    }

    /// Returns the active notification to `Idle` after it has been shown.
    pub fn acknowledge(&self) {
        self.sender.send_replace(ReadUiEvent::Idle);
    }

    pub fn current(&self) -> ReadUiEvent {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ReadUiEvent> {
        self.sender.subscribe()
    }
}

impl Default for UiEventChannel {
    fn default() -> Self {
        Self::new()
    }
}
