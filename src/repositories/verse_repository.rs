// src/repositories/verse_repository.rs
//
// Verse Repository - read side of the shipped corpus
//
// The corpus is loaded once at startup into a `Corpus` snapshot; this
// repository only needs to list it in order.

use crate::db::ConnectionPool;
use crate::domain::{AudioResourceId, ChapterSummary, Verse};
use crate::error::AppResult;
use rusqlite::Row;
use std::sync::Arc;

const VERSE_COLUMNS: &str = "global_index, chapter_number, chapter_name_local, chapter_name_translated,
     chapter_name_original, section_number, page_number, verse_number,
     original_text, translation_primary, translation_secondary, audio_resource_id";

// ---------------------------------------------------------------------
// Repository contract
// ---------------------------------------------------------------------
pub trait VerseRepository: Send + Sync {
    /// Every verse, ordered by `global_index`.
    fn list_verses(&self) -> AppResult<Vec<Verse>>;

    /// The `chapter_summaries` view, ordered by chapter number.
    fn list_chapter_summaries(&self) -> AppResult<Vec<ChapterSummary>>;
}

pub struct SqliteVerseRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteVerseRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_verse(row: &Row) -> rusqlite::Result<Verse> {
        let audio_resource_id: String = row.get("audio_resource_id")?;

        Ok(Verse {
            global_index: row.get("global_index")?,
            chapter_number: row.get("chapter_number")?,
            chapter_name_local: row.get("chapter_name_local")?,
            chapter_name_translated: row.get("chapter_name_translated")?,
            chapter_name_original: row.get("chapter_name_original")?,
            section_number: row.get("section_number")?,
            page_number: row.get("page_number")?,
            verse_number: row.get("verse_number")?,
            original_text: row.get("original_text")?,
            translation_primary: row.get("translation_primary")?,
            translation_secondary: row.get("translation_secondary")?,
            audio_resource_id: AudioResourceId::new(audio_resource_id),
        })
    }

    fn row_to_chapter(row: &Row) -> rusqlite::Result<ChapterSummary> {
        Ok(ChapterSummary {
            chapter_number: row.get("chapter_number")?,
            name_local: row.get("name_local")?,
            name_translated: row.get("name_translated")?,
            name_original: row.get("name_original")?,
            verse_count: row.get("verse_count")?,
        })
    }
}

// ---------------------------------------------------------------------
// SQLite Implementation
// ---------------------------------------------------------------------
impl VerseRepository for SqliteVerseRepository {
    fn list_verses(&self) -> AppResult<Vec<Verse>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM verses ORDER BY global_index",
            VERSE_COLUMNS
        ))?;

        let verses = stmt
            .query_map([], Self::row_to_verse)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(verses)
    }

    fn list_chapter_summaries(&self) -> AppResult<Vec<ChapterSummary>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT chapter_number, name_local, name_translated, name_original, verse_count
             FROM chapter_summaries ORDER BY chapter_number",
        )?;

        let chapters = stmt
            .query_map([], Self::row_to_chapter)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(chapters)
    }
}

/// Writes verses into a fresh database. Used to build corpus files and by tests.
pub fn insert_verses(conn: &rusqlite::Connection, verses: &[Verse]) -> AppResult<()> {
    let mut stmt = conn.prepare(&format!(
        "INSERT INTO verses ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        VERSE_COLUMNS
    ))?;

    for verse in verses {
        stmt.execute(rusqlite::params![
            verse.global_index,
            verse.chapter_number,
            verse.chapter_name_local,
            verse.chapter_name_translated,
            verse.chapter_name_original,
            verse.section_number,
            verse.page_number,
            verse.verse_number,
            verse.original_text,
            verse.translation_primary,
            verse.translation_secondary,
            verse.audio_resource_id.as_str(),
        ])?;
    }

    Ok(())
}


#[cfg(test)]
mod tests {
    use super::test_support::seeded_pool;
    use super::*;
    use crate::domain::verse::fixtures;
    use crate::domain::Corpus;

    #[test]
    fn test_lists_verses_in_global_order() {
        let (_dir, pool) = seeded_pool();
        let repo = SqliteVerseRepository::new(pool);

        let verses = repo.list_verses().unwrap();
        assert_eq!(verses, fixtures::sample_verses());
    }

    #[test]
    fn test_missing_secondary_translation_stays_none() {
        let (_dir, pool) = seeded_pool();
        let repo = SqliteVerseRepository::new(pool);

        let verses = repo.list_verses().unwrap();
        let alif_lam_mim = verses.iter().find(|v| v.position() == (2, 1)).unwrap();
        assert!(alif_lam_mim.translation_secondary.is_none());
    }

    #[test]
    fn test_chapter_view_agrees_with_verses() {
        let (_dir, pool) = seeded_pool();
        let repo = SqliteVerseRepository::new(pool);

        let chapters = repo.list_chapter_summaries().unwrap();
        let counts: Vec<(u16, u32)> = chapters
            .iter()
            .map(|c| (c.chapter_number, c.verse_count))
            .collect();
        assert_eq!(counts, vec![(1, 7), (2, 5), (114, 6)]);

        // The view must be accepted by the snapshot validation
        let corpus = Corpus::new(repo.list_verses().unwrap(), chapters);
        assert!(corpus.is_ok());
    }

    #[test]
    fn test_duplicate_position_is_rejected_by_schema() {
        let (_dir, pool) = seeded_pool();
        let conn = pool.get().unwrap();

        let mut dup = fixtures::sample_verses().remove(0);
        dup.global_index = 500;
        assert!(insert_verses(&conn, &[dup]).is_err());
    }
}
