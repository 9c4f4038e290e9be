// src/application/commands/reader_commands.rs
//
// Verse panel actions and the notification stream

use tokio::sync::watch;

use crate::application::error_handling::CommandResult;
use crate::application::state::AppState;
use crate::domain::{Reciter, Settings};
use crate::events::ReadUiEvent;

/// Text for the clipboard
pub fn copy_verse(
    state: &AppState,
    chapter_number: u16,
    verse_number: u16,
) -> CommandResult<String> {
    let language = state.settings.current().language;
    let verse = state.corpus_service.verse_at(chapter_number, verse_number)?;
    Ok(state.verse_action_service.copy_verse(&verse, language))
}

/// Text for the share sheet
pub fn share_verse(
    state: &AppState,
    chapter_number: u16,
    verse_number: u16,
) -> CommandResult<String> {
    let language = state.settings.current().language;
    let verse = state.corpus_service.verse_at(chapter_number, verse_number)?;
    Ok(state.verse_action_service.share_verse(&verse, language))
}

pub fn current_ui_event(state: &AppState) -> ReadUiEvent {
    state.ui_events.current()
}

pub fn subscribe_ui_events(state: &AppState) -> watch::Receiver<ReadUiEvent> {
    state.ui_events.subscribe()
}

/// Called once the active notification has been shown
pub fn acknowledge_ui_event(state: &AppState) {
    state.ui_events.acknowledge();
}

pub fn get_settings(state: &AppState) -> Settings {
    state.settings.current()
}

pub fn list_reciters() -> Vec<Reciter> {
    Reciter::catalog()
}
