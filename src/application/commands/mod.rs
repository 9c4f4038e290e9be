// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept plain values, return DTOs
// - Commands convert AppError into ErrorResponse
// - Commands NEVER contain business logic

pub mod bookmark_commands;
pub mod corpus_commands;
pub mod playback_commands;
pub mod reader_commands;

pub use bookmark_commands::*;
pub use corpus_commands::*;
pub use playback_commands::*;
pub use reader_commands::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::application::state::AppState;
    use crate::domain::{
        Language, PlaybackMode, PlaybackState, ReadTarget, SearchResult, Settings, StaticSettings,
    };
    use crate::events::ReadUiEvent;
    use crate::integrations::player::MockAudioPlayer;
    use crate::repositories::verse_repository::test_support::seeded_pool;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn app(language: Language) -> (TempDir, AppState) {
        let (dir, pool) = seeded_pool();
        let settings = Arc::new(StaticSettings::new(Settings {
            language,
            ..Settings::default()
        }));

        let state = AppState::from_pool(pool, settings, |_sink| {
            let mut player = MockAudioPlayer::new();
            player.expect_load_and_play().returning(|_, _| Ok(()));
            player.expect_pause().returning(|| Ok(()));
            player.expect_resume().returning(|| Ok(()));
            player.expect_release().returning(|| Ok(()));
            Box::new(player)
        })
        .unwrap();

        (dir, state)
    }

    #[tokio::test]
    async fn test_drawers_and_reading() {
        let (_dir, state) = app(Language::Indonesian);

        assert_eq!(list_chapters(&state).len(), 3);
        assert_eq!(list_sections(&state)[1].chapter_name, "An-Nas");
        assert_eq!(list_pages(&state).len(), 3);

        let verses = read_target(&state, ReadTarget::Chapter(1)).unwrap();
        assert_eq!(verses.len(), 7);
        assert_eq!(verses[1].translation, "Segala puji bagi Allah, Tuhan seluruh alam,");

        let err = read_target(&state, ReadTarget::Page(700)).unwrap_err();
        assert_eq!(err.error_type, ErrorType::NotFound);
    }

    #[tokio::test]
    async fn test_search_commands() {
        let (_dir, state) = app(Language::English);

        assert_eq!(search_verses(&state, "  "), SearchResult::EmptyQuery);
        match search_verses(&state, "whisper") {
            SearchResult::NotEmpty(verses) => {
                assert_eq!(verses.len(), 2);
                assert!(verses[0].translation.contains("whisperer"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            search_chapters(&state, "xyz-no-match"),
            SearchResult::Empty { .. }
        ));
    }

    #[tokio::test]
    async fn test_bookmark_commands() {
        let (_dir, state) = app(Language::Indonesian);

        let added = add_bookmark(&state, 114, 1).unwrap();
        assert_eq!(
            current_ui_event(&state),
            ReadUiEvent::SuccessAddToBookmark("An-Nas : 1 added to bookmarks".to_string())
        );
        acknowledge_ui_event(&state);
        assert_eq!(current_ui_event(&state), ReadUiEvent::Idle);

        assert_eq!(list_bookmarks(&state).unwrap(), vec![added.clone()]);
        remove_bookmark(&state, &added.id).unwrap();
        assert!(list_bookmarks(&state).unwrap().is_empty());

        let err = remove_bookmark(&state, "not-a-uuid").unwrap_err();
        assert_eq!(err.error_type, ErrorType::Validation);
    }

    #[tokio::test]
    async fn test_copy_uses_reader_language() {
        let (_dir, state) = app(Language::English);

        let text = copy_verse(&state, 1, 6).unwrap();
        assert_eq!(text, "Al-Fatihah : 6\n\nاهْدِنَا الصِّرَاطَ الْمُسْتَقِيمَ\n\nGuide us to the straight path.");
        assert!(matches!(current_ui_event(&state), ReadUiEvent::SuccessCopiedAyah(_)));

        assert!(share_verse(&state, 9, 1).is_err());
    }

    #[tokio::test]
    async fn test_playback_commands() {
        let (_dir, state) = app(Language::Indonesian);

        start_playback(&state, ReadTarget::Page(604), 2, PlaybackMode::PlayAll)
            .await
            .unwrap();
        assert_eq!(current_ui_event(&state), ReadUiEvent::PlayingAyahChanged(2));

        assert_eq!(
            toggle_pause_playback(&state).await.unwrap(),
            PlaybackState::Paused
        );
        skip_next_verse(&state).await.unwrap();

        let status = get_playback_status(&state).await.unwrap();
        assert_eq!(status.cursor, Some(3));
        assert_eq!(status.state, PlaybackState::Playing);

        stop_playback(&state).await.unwrap();
        assert_eq!(current_ui_event(&state), ReadUiEvent::Idle);

        let err = skip_previous_verse(&state).await.unwrap_err();
        assert_eq!(err.error_type, ErrorType::InvalidState);
    }
}
