// src/application/state.rs
//
// Application state and startup wiring.
//
// Order matters: infrastructure, repositories, services, event wiring.
// Must be built inside a tokio runtime; the playback controller is spawned
// onto it.

use std::sync::Arc;

use crate::config::CoreConfig;
use crate::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
    ConnectionPool,
};
use crate::domain::SettingsProvider;
use crate::error::AppResult;
use crate::events::{register_ui_projection, EventBus, UiEventChannel};
use crate::integrations::player::{AudioPlayer, PlayerEventSink};
use crate::repositories::{
    BookmarkRepository, SqliteBookmarkRepository, SqliteVerseRepository, VerseRepository,
};
use crate::services::{
    BookmarkService, CorpusService, PlaybackController, PlaybackService, VerseActionService,
};

/// Everything the commands need. Cheap to share behind an `Arc`.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub ui_events: UiEventChannel,
    pub settings: Arc<dyn SettingsProvider>,
    pub corpus_service: Arc<CorpusService>,
    pub bookmark_service: Arc<BookmarkService>,
    pub verse_action_service: Arc<VerseActionService>,
    pub playback_service: Arc<PlaybackService>,
}

impl AppState {
    /// Opens the database named by `config` and wires the core around it.
    pub fn bootstrap<F>(
        config: &CoreConfig,
        settings: Arc<dyn SettingsProvider>,
        make_player: F,
    ) -> AppResult<Self>
    where
        F: FnOnce(PlayerEventSink) -> Box<dyn AudioPlayer>,
    {
        let db_path = config.database_path()?;
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let pool = Arc::new(create_connection_pool(&db_path, config.pool_max_size)?);
        Self::from_pool(pool, settings, make_player)
    }

    /// Same as `bootstrap`, with mpv as the audio player.
    #[cfg(unix)]
    pub fn bootstrap_with_mpv(
        config: &CoreConfig,
        settings: Arc<dyn SettingsProvider>,
    ) -> AppResult<Self> {
        let player_config = config.player.clone();
        Self::bootstrap(config, settings, move |sink| {
            Box::new(crate::integrations::MpvAudioPlayer::new(player_config, sink))
        })
    }

    pub fn from_pool<F>(
        pool: Arc<ConnectionPool>,
        settings: Arc<dyn SettingsProvider>,
        make_player: F,
    ) -> AppResult<Self>
    where
        F: FnOnce(PlayerEventSink) -> Box<dyn AudioPlayer>,
    {
        // 1. INFRASTRUCTURE
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;
        }
        let event_bus = Arc::new(EventBus::new());

        // 2. REPOSITORIES
        let verse_repo: Arc<dyn VerseRepository> =
            Arc::new(SqliteVerseRepository::new(pool.clone()));
        let bookmark_repo: Arc<dyn BookmarkRepository> =
            Arc::new(SqliteBookmarkRepository::new(pool.clone()));

        // 3. SERVICES
        let corpus_service = Arc::new(CorpusService::load(verse_repo.as_ref())?);
        if corpus_service.corpus().is_empty() {
            log::warn!("Verse table is empty; every lookup will be NotFound");
        }
        let bookmark_service = Arc::new(BookmarkService::new(bookmark_repo, event_bus.clone()));
        let verse_action_service = Arc::new(VerseActionService::new(event_bus.clone()));
        let playback_service = Arc::new(PlaybackService::new(PlaybackController::spawn(
            make_player,
            event_bus.clone(),
        )));

        // 4. EVENT HANDLER REGISTRATION (WIRING)
        let ui_events = register_ui_projection(&event_bus);

        log::info!("Application state ready");

        // 5. APPLICATION STATE
        Ok(Self {
            event_bus,
            ui_events,
            settings,
            corpus_service,
            bookmark_service,
            verse_action_service,
            playback_service,
        })
    }
}
