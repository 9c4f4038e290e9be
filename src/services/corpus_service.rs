// src/services/corpus_service.rs
//
// Corpus Query Engine
//
// Read-only lookups over the `Corpus` snapshot. The snapshot is loaded once
// and shared through an `Arc`; callers on any thread query it without locks.

use std::sync::Arc;

use crate::domain::{
    ChapterSummary, Corpus, GroupSummary, ReadTarget, SearchResult, Verse, CHAPTER_COUNT,
    PAGE_COUNT, SECTION_COUNT,
};
use crate::error::{AppError, AppResult};
use crate::repositories::VerseRepository;

#[derive(Debug, Clone)]
pub struct CorpusService {
    corpus: Arc<Corpus>,
}

impl CorpusService {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }

    /// Reads the verse table and the chapter summary view into a snapshot.
    pub fn load(repo: &dyn VerseRepository) -> AppResult<Self> {
        let verses = repo.list_verses()?;
        let chapters = repo.list_chapter_summaries()?;
        let corpus = Corpus::new(verses, chapters)?;

        log::info!(
            "Corpus loaded: {} verses in {} chapters",
            corpus.len(),
            corpus.chapters().len()
        );

        Ok(Self::new(Arc::new(corpus)))
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    // ========================================================================
    // SEQUENCES
    // ========================================================================

    /// Verses of one chapter, ordered by verse number.
    pub fn verses_by_chapter(&self, chapter_number: u16) -> AppResult<Vec<Verse>> {
        lookup(
            self.corpus.chapter_verses(chapter_number),
            "Chapter",
            chapter_number,
            CHAPTER_COUNT,
        )
    }

    /// Verses of one section, ordered by `global_index`. May span chapters.
    pub fn verses_by_section(&self, section_number: u16) -> AppResult<Vec<Verse>> {
        lookup(
            self.corpus.section_verses(section_number),
            "Section",
            section_number,
            SECTION_COUNT,
        )
    }

    /// Verses of one page, ordered by `global_index`. May span chapters.
    pub fn verses_by_page(&self, page_number: u16) -> AppResult<Vec<Verse>> {
        lookup(
            self.corpus.page_verses(page_number),
            "Page",
            page_number,
            PAGE_COUNT,
        )
    }

    pub fn read(&self, target: ReadTarget) -> AppResult<Vec<Verse>> {
        match target {
            ReadTarget::Chapter(n) => self.verses_by_chapter(n),
            ReadTarget::Section(n) => self.verses_by_section(n),
            ReadTarget::Page(n) => self.verses_by_page(n),
        }
    }

    pub fn verse_at(&self, chapter_number: u16, verse_number: u16) -> AppResult<Verse> {
        self.corpus
            .verse_at(chapter_number, verse_number)
            .cloned()
            .ok_or_else(|| {
                AppError::NotFound(format!("Verse {}:{}", chapter_number, verse_number))
            })
    }

    // ========================================================================
    // SEARCH
    // ========================================================================

    /// Case-insensitive substring match on any of the three chapter names.
    pub fn search_chapters(&self, term: &str) -> SearchResult<ChapterSummary> {
        SearchResult::evaluate(term, |needle| {
            self.corpus
                .chapters()
                .iter()
                .filter(|chapter| chapter.matches(needle))
                .cloned()
                .collect()
        })
    }

    /// Case-insensitive substring match on the original text and both
    /// translations. Diacritics are significant.
    pub fn search_verses(&self, term: &str) -> SearchResult<Verse> {
        SearchResult::evaluate(term, |needle| {
            self.corpus
                .verses()
                .iter()
                .filter(|verse| verse_matches(verse, needle))
                .cloned()
                .collect()
        })
    }

    // ========================================================================
    // DRAWER INDEXES
    // ========================================================================

    pub fn chapter_index(&self) -> Vec<ChapterSummary> {
        self.corpus.chapters().to_vec()
    }

    pub fn section_index(&self) -> Vec<GroupSummary> {
        self.corpus.section_index()
    }

    pub fn page_index(&self) -> Vec<GroupSummary> {
        self.corpus.page_index()
    }
}

fn lookup(found: Option<&[Verse]>, kind: &str, number: u16, max: u16) -> AppResult<Vec<Verse>> {
    if number == 0 || number > max {
        return Err(AppError::NotFound(format!(
            "{} {} is outside 1..={}",
            kind, number, max
        )));
    }

    found
        .map(<[Verse]>::to_vec)
        .ok_or_else(|| AppError::NotFound(format!("{} {} is not in the corpus", kind, number)))
}

fn verse_matches(verse: &Verse, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(&verse.original_text)
        || contains(&verse.translation_primary)
        || verse.translation_secondary.as_deref().is_some_and(contains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::verse::fixtures;
    use crate::repositories::verse_repository::test_support::seeded_pool;
    use crate::repositories::SqliteVerseRepository;

    fn service() -> CorpusService {
        let corpus = Corpus::from_verses(fixtures::sample_verses()).unwrap();
        CorpusService::new(Arc::new(corpus))
    }

    #[test]
    fn test_chapter_sequence_is_ordered() {
        let svc = service();
        for chapter in svc.chapter_index() {
            let verses = svc.verses_by_chapter(chapter.chapter_number).unwrap();
            assert!(!verses.is_empty());
            assert_eq!(verses.len() as u32, chapter.verse_count);
            assert!(verses
                .windows(2)
                .all(|w| w[0].verse_number < w[1].verse_number));
        }
    }

    #[test]
    fn test_unknown_chapter_is_not_found() {
        let svc = service();
        assert!(matches!(svc.verses_by_chapter(0), Err(AppError::NotFound(_))));
        assert!(matches!(svc.verses_by_chapter(115), Err(AppError::NotFound(_))));
        // valid number, absent from the sample corpus
        assert!(matches!(svc.verses_by_chapter(50), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_out_of_range_number_is_rejected_before_the_corpus() {
        let verses = fixtures::sample_verses();
        assert!(matches!(
            lookup(Some(verses.as_slice()), "Chapter", CHAPTER_COUNT + 1, CHAPTER_COUNT),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            lookup(Some(verses.as_slice()), "Page", 0, PAGE_COUNT),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_corpus_with_chapter_past_the_last_is_refused() {
        let mut verses = fixtures::sample_verses();
        let mut extra = verses.last().unwrap().clone();
        extra.global_index += 1;
        extra.chapter_number = CHAPTER_COUNT + 1;
        extra.verse_number = 1;
        verses.push(extra);

        assert!(Corpus::from_verses(verses).is_err());
    }

    #[test]
    fn test_section_spans_chapters() {
        let svc = service();
        let verses = svc.verses_by_section(1).unwrap();

        assert_eq!(verses.len(), 12);
        assert_eq!(verses.first().unwrap().position(), (1, 1));
        assert_eq!(verses.last().unwrap().position(), (2, 5));
        assert!(verses
            .windows(2)
            .all(|w| w[0].global_index < w[1].global_index));
    }

    #[test]
    fn test_page_lookup_and_miss() {
        let svc = service();
        assert_eq!(svc.verses_by_page(604).unwrap().len(), 6);
        assert!(matches!(svc.verses_by_page(605), Err(AppError::NotFound(_))));
        assert!(matches!(svc.verses_by_section(31), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_section_and_page_are_non_decreasing() {
        let svc = service();
        let verses = svc.corpus().verses();
        assert!(verses.windows(2).all(|w| {
            w[0].section_number <= w[1].section_number && w[0].page_number <= w[1].page_number
        }));
    }

    #[test]
    fn test_read_routes_target() {
        let svc = service();
        assert_eq!(svc.read(ReadTarget::Chapter(114)).unwrap().len(), 6);
        assert_eq!(svc.read(ReadTarget::Page(2)).unwrap().len(), 5);
        assert!(svc.read(ReadTarget::Section(2)).is_err());
    }

    #[test]
    fn test_verse_at() {
        let svc = service();
        assert_eq!(svc.verse_at(2, 3).unwrap().global_index, 10);
        assert!(matches!(svc.verse_at(2, 99), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_blank_search_is_empty_query() {
        let svc = service();
        assert_eq!(svc.search_verses(""), SearchResult::EmptyQuery);
        assert_eq!(svc.search_verses("   "), SearchResult::EmptyQuery);
        assert_eq!(svc.search_chapters("\t"), SearchResult::EmptyQuery);
    }

    #[test]
    fn test_chapter_search_without_match_keeps_term() {
        let svc = service();
        assert_eq!(
            svc.search_chapters("xyz-no-match"),
            SearchResult::Empty {
                query: "xyz-no-match".to_string()
            }
        );
    }

    #[test]
    fn test_chapter_search_matches_every_name_variant() {
        let svc = service();

        let by_local = svc.search_chapters("BAQARAH");
        assert_eq!(by_local.len(), 1);

        let by_translated = svc.search_chapters("manusia");
        match by_translated {
            SearchResult::NotEmpty(chapters) => assert_eq!(chapters[0].chapter_number, 114),
            other => panic!("unexpected {:?}", other),
        }

        assert_eq!(svc.search_chapters("الفاتحة").len(), 1);
    }

    #[test]
    fn test_chapter_search_orders_by_chapter() {
        let svc = service();
        match svc.search_chapters("a") {
            SearchResult::NotEmpty(chapters) => {
                let numbers: Vec<u16> = chapters.iter().map(|c| c.chapter_number).collect();
                assert_eq!(numbers, vec![1, 2, 114]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_verse_search_covers_translations_in_order() {
        let svc = service();
        match svc.search_verses("ALLAH") {
            SearchResult::NotEmpty(verses) => {
                assert!(verses
                    .windows(2)
                    .all(|w| w[0].global_index < w[1].global_index));
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(matches!(
            svc.search_verses("mankind"),
            SearchResult::NotEmpty(_)
        ));
    }

    #[test]
    fn test_load_from_repository() {
        let (_dir, pool) = seeded_pool();
        let repo = SqliteVerseRepository::new(pool);

        let svc = CorpusService::load(&repo).unwrap();
        assert_eq!(svc.corpus().len(), fixtures::sample_verses().len());
        assert_eq!(svc.chapter_index().len(), 3);
        assert_eq!(svc.section_index().len(), 2);
    }
}
