// src/integrations/player/mod.rs
//
// Audio Player Primitive
//
// The core never decodes audio. It drives something that can load-and-play
// a resource by identifier and later reports how that track ended.
//
// Notifications may arrive on any thread. They are pushed into the playback
// controller's queue through `PlayerEventSink` and applied there.

#[cfg(unix)]
pub mod mpv;

#[cfg(unix)]
pub use mpv::MpvAudioPlayer;

use tokio::sync::mpsc;

use crate::domain::{AudioResourceId, TrackToken};
use crate::error::AppResult;

/// Transport surface of an external player.
///
/// Implementations report the end of every loaded track through the
/// `PlayerEventSink` they were built with, tagged with the track's token.
#[cfg_attr(test, mockall::automock)]
pub trait AudioPlayer: Send {
    /// Replace whatever is loaded with `resource` and start playing it.
    fn load_and_play(&mut self, token: TrackToken, resource: &AudioResourceId) -> AppResult<()>;

    fn pause(&mut self) -> AppResult<()>;

    fn resume(&mut self) -> AppResult<()>;

    /// Free the underlying player. Loading again after release must work.
    fn release(&mut self) -> AppResult<()>;
}

/// How a loaded track ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    Completed,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerNotification {
    pub token: TrackToken,
    pub event: PlayerEvent,
}

/// Thread-safe handle players use to report track endings.
#[derive(Debug, Clone)]
pub struct PlayerEventSink {
    sender: mpsc::UnboundedSender<PlayerNotification>,
}

impl PlayerEventSink {
    pub fn new(sender: mpsc::UnboundedSender<PlayerNotification>) -> Self {
        Self { sender }
    }

    pub fn completed(&self, token: TrackToken) {
        self.notify(token, PlayerEvent::Completed);
    }

    pub fn failed(&self, token: TrackToken, message: impl Into<String>) {
        self.notify(token, PlayerEvent::Error(message.into()));
    }

    fn notify(&self, token: TrackToken, event: PlayerEvent) {
        // The controller is gone once playback is shut down; nothing to tell.
        if self.sender.send(PlayerNotification { token, event }).is_err() {
            log::debug!("Dropped player notification for track {:?}", token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_forwards_notifications() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sink = PlayerEventSink::new(tx);

        sink.completed(TrackToken(1));
        sink.failed(TrackToken(2), "decoder error");

        assert_eq!(
            rx.try_recv().unwrap(),
            PlayerNotification {
                token: TrackToken(1),
                event: PlayerEvent::Completed
            }
        );
        assert_eq!(
            rx.try_recv().unwrap().event,
            PlayerEvent::Error("decoder error".to_string())
        );
    }

    #[test]
    fn test_sink_survives_closed_queue() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        PlayerEventSink::new(tx).completed(TrackToken(7));
    }
}
