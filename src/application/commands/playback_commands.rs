// src/application/commands/playback_commands.rs

use crate::application::error_handling::CommandResult;
use crate::application::state::AppState;
use crate::domain::{PlaybackMode, PlaybackSnapshot, PlaybackState, ReadTarget};
use crate::services::StartPlaybackRequest;

/// Plays `target` from `start_index` with the reciter currently selected.
pub async fn start_playback(
    state: &AppState,
    target: ReadTarget,
    start_index: usize,
    mode: PlaybackMode,
) -> CommandResult<()> {
    let verses = state.corpus_service.read(target)?;
    let reciter = state.settings.current().reciter;

    let request = StartPlaybackRequest {
        verses,
        start_index,
        mode,
        reciter,
    };

    Ok(state.playback_service.play(request).await?)
}

pub async fn toggle_pause_playback(state: &AppState) -> CommandResult<PlaybackState> {
    Ok(state.playback_service.toggle_pause().await?)
}

pub async fn skip_next_verse(state: &AppState) -> CommandResult<()> {
    Ok(state.playback_service.skip_next().await?)
}

pub async fn skip_previous_verse(state: &AppState) -> CommandResult<()> {
    Ok(state.playback_service.skip_previous().await?)
}

pub async fn stop_playback(state: &AppState) -> CommandResult<()> {
    Ok(state.playback_service.stop().await?)
}

pub async fn get_playback_status(state: &AppState) -> CommandResult<PlaybackSnapshot> {
    Ok(state.playback_service.snapshot().await?)
}
