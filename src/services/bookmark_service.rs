// src/services/bookmark_service.rs
//
// Bookmark Service
//
// At most one bookmark per verse. Adding a verse that is already bookmarked
// returns the stored bookmark and still confirms to the reader.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Bookmark, Verse};
use crate::error::{AppError, AppResult};
use crate::events::{BookmarkAdded, BookmarkRemoved, EventBus};
use crate::repositories::BookmarkRepository;

pub struct BookmarkService {
    bookmark_repo: Arc<dyn BookmarkRepository>,
    event_bus: Arc<EventBus>,
}

impl BookmarkService {
    pub fn new(bookmark_repo: Arc<dyn BookmarkRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            bookmark_repo,
            event_bus,
        }
    }

    pub fn add_bookmark(&self, verse: &Verse) -> AppResult<Bookmark> {
        let bookmark = match self.bookmark_repo.get_by_verse(verse.global_index)? {
            Some(existing) => existing,
            None => {
                let bookmark = Bookmark::for_verse(verse);
                self.bookmark_repo.save(&bookmark)?;
                log::debug!(
                    "Bookmarked {}:{}",
                    bookmark.chapter_number,
                    bookmark.verse_number
                );
                bookmark
            }
        };

        self.event_bus.emit(BookmarkAdded::new(
            bookmark.id,
            bookmark.chapter_name.clone(),
            bookmark.verse_number,
        ));

        Ok(bookmark)
    }

    pub fn list_bookmarks(&self) -> AppResult<Vec<Bookmark>> {
        self.bookmark_repo.list_all()
    }

    pub fn is_bookmarked(&self, verse: &Verse) -> AppResult<bool> {
        Ok(self.bookmark_repo.get_by_verse(verse.global_index)?.is_some())
    }

    pub fn remove_bookmark(&self, id: Uuid) -> AppResult<()> {
        if !self.bookmark_repo.delete(id)? {
            return Err(AppError::NotFound(format!("Bookmark {}", id)));
        }

        self.event_bus.emit(BookmarkRemoved::new(id));
        Ok(())
    }
}
