// src/application/commands/corpus_commands.rs
//
// Reading and search commands
//
// RULES:
// - Read settings, call services, return DTOs
// - Never contain business logic

use crate::application::dto::{ChapterDto, GroupDto, VerseDto};
use crate::application::error_handling::CommandResult;
use crate::application::state::AppState;
use crate::domain::{ReadTarget, SearchResult};

/// Chapter drawer
pub fn list_chapters(state: &AppState) -> Vec<ChapterDto> {
    state
        .corpus_service
        .chapter_index()
        .into_iter()
        .map(ChapterDto::from)
        .collect()
}

/// Section drawer
pub fn list_sections(state: &AppState) -> Vec<GroupDto> {
    state
        .corpus_service
        .section_index()
        .into_iter()
        .map(GroupDto::from)
        .collect()
}

/// Page drawer
pub fn list_pages(state: &AppState) -> Vec<GroupDto> {
    state
        .corpus_service
        .page_index()
        .into_iter()
        .map(GroupDto::from)
        .collect()
}

/// Verses of a chapter, section or page in reading order
pub fn read_target(state: &AppState, target: ReadTarget) -> CommandResult<Vec<VerseDto>> {
    let language = state.settings.current().language;
    let verses = state.corpus_service.read(target)?;

    Ok(verses
        .into_iter()
        .map(|verse| VerseDto::from_verse(verse, language))
        .collect())
}

pub fn get_verse(
    state: &AppState,
    chapter_number: u16,
    verse_number: u16,
) -> CommandResult<VerseDto> {
    let language = state.settings.current().language;
    let verse = state.corpus_service.verse_at(chapter_number, verse_number)?;
    Ok(VerseDto::from_verse(verse, language))
}

pub fn search_chapters(state: &AppState, term: &str) -> SearchResult<ChapterDto> {
    state
        .corpus_service
        .search_chapters(term)
        .map(ChapterDto::from)
}

pub fn search_verses(state: &AppState, term: &str) -> SearchResult<VerseDto> {
    let language = state.settings.current().language;
    state
        .corpus_service
        .search_verses(term)
        .map(|verse| VerseDto::from_verse(verse, language))
}
