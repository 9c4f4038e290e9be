// src/application/commands/bookmark_commands.rs

use uuid::Uuid;

use crate::application::dto::BookmarkDto;
use crate::application::error_handling::{CommandResult, ErrorResponse};
use crate::application::state::AppState;

pub fn add_bookmark(
    state: &AppState,
    chapter_number: u16,
    verse_number: u16,
) -> CommandResult<BookmarkDto> {
    let verse = state.corpus_service.verse_at(chapter_number, verse_number)?;
    let bookmark = state.bookmark_service.add_bookmark(&verse)?;
    Ok(BookmarkDto::from(bookmark))
}

/// Newest first
pub fn list_bookmarks(state: &AppState) -> CommandResult<Vec<BookmarkDto>> {
    let bookmarks = state.bookmark_service.list_bookmarks()?;
    Ok(bookmarks.into_iter().map(BookmarkDto::from).collect())
}

pub fn remove_bookmark(state: &AppState, bookmark_id: &str) -> CommandResult<()> {
    let id = Uuid::parse_str(bookmark_id)
        .map_err(|e| ErrorResponse::validation(format!("Invalid UUID: {}", e)))?;

    Ok(state.bookmark_service.remove_bookmark(id)?)
}
