// src/integrations/mod.rs
//
// External Integrations Module

pub mod player;

#[cfg(unix)]
pub use player::MpvAudioPlayer;
pub use player::{AudioPlayer, PlayerEvent, PlayerEventSink, PlayerNotification};
