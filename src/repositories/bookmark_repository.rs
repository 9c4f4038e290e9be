// src/repositories/bookmark_repository.rs
//
// Bookmark Repository
//
// All parse failures are explicit errors, not silent defaults.

use crate::db::ConnectionPool;
use crate::domain::Bookmark;
use crate::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use rusqlite::Row;
use std::sync::Arc;
use uuid::Uuid;

pub trait BookmarkRepository: Send + Sync {
    fn save(&self, bookmark: &Bookmark) -> AppResult<()>;

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Bookmark>>;

    fn get_by_verse(&self, global_index: u32) -> AppResult<Option<Bookmark>>;

    /// Newest first
    fn list_all(&self) -> AppResult<Vec<Bookmark>>;

    /// Returns false when nothing was deleted.
    fn delete(&self, id: Uuid) -> AppResult<bool>;
}

pub struct SqliteBookmarkRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteBookmarkRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_bookmark(row: &Row) -> rusqlite::Result<Bookmark> {
        let id_str: String = row.get("id")?;
        let created_at_str: String = row.get("created_at")?;

        let id = Uuid::parse_str(&id_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Invalid bookmark UUID '{}': {}", id_str, e),
                )),
            )
        })?;

        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    5,
                    rusqlite::types::Type::Text,
                    Box::new(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("Invalid created_at timestamp '{}': {}", created_at_str, e),
                    )),
                )
            })?;

        Ok(Bookmark {
            id,
            global_index: row.get("global_index")?,
            chapter_number: row.get("chapter_number")?,
            chapter_name: row.get("chapter_name")?,
            verse_number: row.get("verse_number")?,
            created_at,
        })
    }

    fn query_one(&self, sql: &str, param: &dyn rusqlite::ToSql) -> AppResult<Option<Bookmark>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(sql)?;

        match stmt.query_row([param], Self::row_to_bookmark) {
            Ok(bookmark) => Ok(Some(bookmark)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(AppError::Database(e)),
        }
    }
}

impl BookmarkRepository for SqliteBookmarkRepository {
    fn save(&self, bookmark: &Bookmark) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT OR REPLACE INTO bookmarks (
                id, global_index, chapter_number, chapter_name, verse_number, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                bookmark.id.to_string(),
                bookmark.global_index,
                bookmark.chapter_number,
                bookmark.chapter_name,
                bookmark.verse_number,
                bookmark.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    fn get_by_id(&self, id: Uuid) -> AppResult<Option<Bookmark>> {
        self.query_one(
            "SELECT id, global_index, chapter_number, chapter_name, verse_number, created_at
             FROM bookmarks WHERE id = ?1",
            &id.to_string(),
        )
    }

    fn get_by_verse(&self, global_index: u32) -> AppResult<Option<Bookmark>> {
        self.query_one(
            "SELECT id, global_index, chapter_number, chapter_name, verse_number, created_at
             FROM bookmarks WHERE global_index = ?1",
            &global_index,
        )
    }

    fn list_all(&self) -> AppResult<Vec<Bookmark>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT id, global_index, chapter_number, chapter_name, verse_number, created_at
             FROM bookmarks ORDER BY created_at DESC, global_index",
        )?;

        let bookmarks = stmt
            .query_map([], Self::row_to_bookmark)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(bookmarks)
    }

    fn delete(&self, id: Uuid) -> AppResult<bool> {
        let conn = self.pool.get()?;
        let affected = conn.execute(
            "DELETE FROM bookmarks WHERE id = ?1",
            rusqlite::params![id.to_string()],
        )?;
        Ok(affected > 0)
    }
}
