// src/services/verse_action_service.rs
//
// Copy / share text for a single verse.
//
// The host owns the clipboard and the share sheet; this service only
// composes the text and confirms the action to the reader.

use std::sync::Arc;

use crate::domain::{Language, Verse};
use crate::events::{EventBus, VerseCopied, VerseShared};

pub struct VerseActionService {
    event_bus: Arc<EventBus>,
}

impl VerseActionService {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self { event_bus }
    }

    /// Text to put on the clipboard.
    pub fn copy_verse(&self, verse: &Verse, language: Language) -> String {
        let text = compose_verse_text(verse, language);
        self.event_bus.emit(VerseCopied::new(
            verse.chapter_name_local.clone(),
            verse.verse_number,
        ));
        text
    }

    /// Text to hand to the share target.
    pub fn share_verse(&self, verse: &Verse, language: Language) -> String {
        let text = compose_verse_text(verse, language);
        self.event_bus.emit(VerseShared::new(
            verse.chapter_name_local.clone(),
            verse.verse_number,
        ));
        text
    }
}

/// `"{chapter} : {verse}\n\n{original}\n\n{translation}"`
///
/// A missing translation renders as an empty line.
pub fn compose_verse_text(verse: &Verse, language: Language) -> String {
    format!(
        "{} : {}\n\n{}\n\n{}",
        verse.chapter_name_local,
        verse.verse_number,
        verse.original_text,
        verse.translation_for(language).unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::verse::fixtures;
    use crate::events::{register_ui_projection, ReadUiEvent};

    #[test]
    fn test_text_follows_language() {
        let verse = &fixtures::sample_verses()[0];

        let indonesian = compose_verse_text(verse, Language::Indonesian);
        assert!(indonesian.starts_with("Al-Fatihah : 1\n\n"));
        assert!(indonesian.ends_with("Dengan nama Allah Yang Maha Pengasih, Maha Penyayang."));

        let english = compose_verse_text(verse, Language::English);
        assert!(english.ends_with("the Especially Merciful."));
    }

    #[test]
    fn test_missing_translation_degrades_to_empty() {
        let verse = &fixtures::sample_verses()[7];
        let text = compose_verse_text(verse, Language::English);
        assert_eq!(text, "Al-Baqarah : 1\n\nالم\n\n");
    }

    #[test]
    fn test_copy_and_share_confirm() {
        let bus = Arc::new(EventBus::new());
        let ui = register_ui_projection(&bus);
        let svc = VerseActionService::new(bus);
        let verse = &fixtures::sample_verses()[1];

        svc.copy_verse(verse, Language::Indonesian);
        assert_eq!(
            ui.current(),
            ReadUiEvent::SuccessCopiedAyah("Al-Fatihah : 2 copied".to_string())
        );

        svc.share_verse(verse, Language::English);
        assert_eq!(
            ui.current(),
            ReadUiEvent::SuccessSharedAyah("Al-Fatihah : 2 shared".to_string())
        );
    }
}
