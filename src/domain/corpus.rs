// src/domain/corpus.rs
//
// Immutable in-memory snapshot of the verse table.
//
// Chapters, sections and pages are contiguous runs of `global_index`, so each
// one is stored as a range into the verse list and answered as a slice.

use std::collections::BTreeMap;
use std::ops::Range;

use super::chapter::{ChapterSummary, GroupSummary};
use super::verse::{validate_verse_order, Verse};
use super::{DomainError, DomainResult};

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    verses: Vec<Verse>,
    chapters: Vec<ChapterSummary>,
    chapter_ranges: BTreeMap<u16, Range<usize>>,
    section_ranges: BTreeMap<u16, Range<usize>>,
    page_ranges: BTreeMap<u16, Range<usize>>,
}

impl Corpus {
    /// Builds a snapshot from verses listed by `global_index` and the chapter
    /// summary view. Fails if either violates the corpus invariants.
    pub fn new(verses: Vec<Verse>, chapters: Vec<ChapterSummary>) -> DomainResult<Self> {
        validate_verse_order(&verses)?;

        let chapter_ranges = group_ranges(&verses, |v| v.chapter_number);
        let section_ranges = group_ranges(&verses, |v| v.section_number);
        let page_ranges = group_ranges(&verses, |v| v.page_number);

        validate_chapter_summaries(&verses, &chapters, &chapter_ranges)?;

        Ok(Self {
            verses,
            chapters,
            chapter_ranges,
            section_ranges,
            page_ranges,
        })
    }

    /// Builds a snapshot and derives the chapter summaries from the verses.
    pub fn from_verses(verses: Vec<Verse>) -> DomainResult<Self> {
        validate_verse_order(&verses)?;
        let ranges = group_ranges(&verses, |v| v.chapter_number);
        let chapters = ranges
            .iter()
            .map(|(number, range)| {
                let first = &verses[range.start];
                ChapterSummary {
                    chapter_number: *number,
                    name_local: first.chapter_name_local.clone(),
                    name_translated: first.chapter_name_translated.clone(),
                    name_original: first.chapter_name_original.clone(),
                    verse_count: range.len() as u32,
                }
            })
            .collect();
        Self::new(verses, chapters)
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn chapters(&self) -> &[ChapterSummary] {
        &self.chapters
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn chapter(&self, chapter_number: u16) -> Option<&ChapterSummary> {
        self.chapters
            .binary_search_by_key(&chapter_number, |c| c.chapter_number)
            .ok()
            .map(|idx| &self.chapters[idx])
    }

    pub fn chapter_verses(&self, chapter_number: u16) -> Option<&[Verse]> {
        self.slice(self.chapter_ranges.get(&chapter_number))
    }

    pub fn section_verses(&self, section_number: u16) -> Option<&[Verse]> {
        self.slice(self.section_ranges.get(&section_number))
    }

    pub fn page_verses(&self, page_number: u16) -> Option<&[Verse]> {
        self.slice(self.page_ranges.get(&page_number))
    }

    pub fn verse_at(&self, chapter_number: u16, verse_number: u16) -> Option<&Verse> {
        let verses = self.chapter_verses(chapter_number)?;
        verses
            .binary_search_by_key(&verse_number, |v| v.verse_number)
            .ok()
            .map(|idx| &verses[idx])
    }

    pub fn by_global_index(&self, global_index: u32) -> Option<&Verse> {
        self.verses
            .binary_search_by_key(&global_index, |v| v.global_index)
            .ok()
            .map(|idx| &self.verses[idx])
    }

    pub fn section_index(&self) -> Vec<GroupSummary> {
        self.group_index(&self.section_ranges)
    }

    pub fn page_index(&self) -> Vec<GroupSummary> {
        self.group_index(&self.page_ranges)
    }

    fn slice(&self, range: Option<&Range<usize>>) -> Option<&[Verse]> {
        range.map(|r| &self.verses[r.clone()])
    }

    fn group_index(&self, ranges: &BTreeMap<u16, Range<usize>>) -> Vec<GroupSummary> {
        ranges
            .iter()
            .map(|(number, range)| {
                let first = &self.verses[range.start];
                GroupSummary {
                    number: *number,
                    first_chapter_number: first.chapter_number,
                    first_chapter_name: first.chapter_name_local.clone(),
                    first_verse_number: first.verse_number,
                    verse_count: range.len() as u32,
                }
            })
            .collect()
    }
}

/// Collects the contiguous index range of every key.
/// Relies on the key being non-decreasing over the list.
fn group_ranges<F>(verses: &[Verse], key: F) -> BTreeMap<u16, Range<usize>>
where
    F: Fn(&Verse) -> u16,
{
    let mut ranges: BTreeMap<u16, Range<usize>> = BTreeMap::new();
    for (idx, verse) in verses.iter().enumerate() {
        ranges
            .entry(key(verse))
            .and_modify(|range| range.end = idx + 1)
            .or_insert(idx..idx + 1);
    }
    ranges
}

fn validate_chapter_summaries(
    verses: &[Verse],
    chapters: &[ChapterSummary],
    ranges: &BTreeMap<u16, Range<usize>>,
) -> DomainResult<()> {
    if chapters.len() != ranges.len() {
        return Err(DomainError::InvariantViolation(format!(
            "{} chapter summaries for {} chapters",
            chapters.len(),
            ranges.len()
        )));
    }

    for (summary, (number, range)) in chapters.iter().zip(ranges.iter()) {
        if summary.chapter_number != *number {
            return Err(DomainError::InvariantViolation(format!(
                "chapter summary {} found where chapter {} was expected",
                summary.chapter_number, number
            )));
        }
        if summary.verse_count as usize != range.len() {
            return Err(DomainError::InvariantViolation(format!(
                "chapter {} lists {} verses, corpus has {}",
                number,
                summary.verse_count,
                range.len()
            )));
        }
        if verses[range.start].chapter_name_local != summary.name_local {
            return Err(DomainError::InvariantViolation(format!(
                "chapter {} name mismatch",
                number
            )));
        }
    }

    Ok(())
}
