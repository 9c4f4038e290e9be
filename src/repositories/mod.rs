// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO event emission
// - NO cross-repository calls
// - Explicit SQL only

pub mod bookmark_repository;
pub mod verse_repository;

pub use bookmark_repository::{BookmarkRepository, SqliteBookmarkRepository};
pub use verse_repository::{insert_verses, SqliteVerseRepository, VerseRepository};
