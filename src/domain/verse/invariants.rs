use super::entity::Verse;
use crate::domain::{DomainError, DomainResult, CHAPTER_COUNT, PAGE_COUNT, SECTION_COUNT};

/// Validates the ordering invariants of a corpus listed by `global_index`.
///
/// 1. `global_index` strictly increases
/// 2. `(chapter_number, verse_number)` strictly increases along with it
/// 3. `section_number` and `page_number` never decrease
/// 4. verse numbers start at 1; chapter, section and page numbers stay
///    within `1..=CHAPTER_COUNT`, `1..=SECTION_COUNT` and `1..=PAGE_COUNT`
pub fn validate_verse_order(verses: &[Verse]) -> DomainResult<()> {
    for verse in verses {
        validate_numbering(verse)?;
    }

    for pair in verses.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);

        if next.global_index <= prev.global_index {
            return Err(DomainError::InvariantViolation(format!(
                "global index {} follows {}",
                next.global_index, prev.global_index
            )));
        }
        if next.position() <= prev.position() {
            return Err(DomainError::InvariantViolation(format!(
                "verse {}:{} is listed after {}:{}",
                next.chapter_number, next.verse_number, prev.chapter_number, prev.verse_number
            )));
        }
        if next.section_number < prev.section_number {
            return Err(DomainError::InvariantViolation(format!(
                "section decreases from {} to {} at global index {}",
                prev.section_number, next.section_number, next.global_index
            )));
        }
        if next.page_number < prev.page_number {
            return Err(DomainError::InvariantViolation(format!(
                "page decreases from {} to {} at global index {}",
                prev.page_number, next.page_number, next.global_index
            )));
        }
    }

    Ok(())
}

fn validate_numbering(verse: &Verse) -> DomainResult<()> {
    if verse.verse_number == 0 {
        return Err(DomainError::InvariantViolation(format!(
            "verse at global index {} has numbering {}:{}",
            verse.global_index, verse.chapter_number, verse.verse_number
        )));
    }

    let ranges = [
        ("chapter", verse.chapter_number, CHAPTER_COUNT),
        ("section", verse.section_number, SECTION_COUNT),
        ("page", verse.page_number, PAGE_COUNT),
    ];
    for (kind, number, max) in ranges {
        if number == 0 || number > max {
            return Err(DomainError::InvariantViolation(format!(
                "verse at global index {} has {} {} outside 1..={}",
                verse.global_index, kind, number, max
            )));
        }
    }
    Ok(())
}
