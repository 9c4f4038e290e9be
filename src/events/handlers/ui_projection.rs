// src/events/handlers/ui_projection.rs
//
// UI Projection
//
// Maps domain events onto the single active `ReadUiEvent`.
//
// CRITICAL RULES:
// - No business logic, only translation
// - Never calls back into services

use crate::events::types::{
    BookmarkAdded, PlaybackFailed, PlaybackFinished, PlaybackStopped, PlayingVerseChanged,
    VerseCopied, VerseShared,
};
use crate::events::ui::{ReadUiEvent, UiEventChannel};
use crate::events::EventBus;

/// Registers the projection and returns the channel it publishes to.
pub fn register_ui_projection(bus: &EventBus) -> UiEventChannel {
    let channel = UiEventChannel::new();

    let ui = channel.clone();
    bus.subscribe::<PlayingVerseChanged, _>(move |event| {
        ui.publish(ReadUiEvent::PlayingAyahChanged(event.position));
    });

    let ui = channel.clone();
    bus.subscribe::<PlaybackFailed, _>(move |event| {
        ui.publish(ReadUiEvent::ErrorPlayingAyah(event.message.clone()));
    });

    let ui = channel.clone();
    bus.subscribe::<PlaybackFinished, _>(move |_| ui.publish(ReadUiEvent::Idle));

    let ui = channel.clone();
    bus.subscribe::<PlaybackStopped, _>(move |_| ui.publish(ReadUiEvent::Idle));

    let ui = channel.clone();
    bus.subscribe::<BookmarkAdded, _>(move |event| {
        ui.publish(ReadUiEvent::SuccessAddToBookmark(format!(
            "{} : {} added to bookmarks",
            event.chapter_name, event.verse_number
        )));
    });

    let ui = channel.clone();
    bus.subscribe::<VerseCopied, _>(move |event| {
        ui.publish(ReadUiEvent::SuccessCopiedAyah(format!(
            "{} : {} copied",
            event.chapter_name, event.verse_number
        )));
    });

    let ui = channel.clone();
    bus.subscribe::<VerseShared, _>(move |event| {
        ui.publish(ReadUiEvent::SuccessSharedAyah(format!(
            "{} : {} shared",
            event.chapter_name, event.verse_number
        )));
    });

    log::debug!("UI projection registered");
    channel
}
