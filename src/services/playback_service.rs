// src/services/playback_service.rs
//
// Playback Service - what the reading screen talks to
//
// Turns verses into reciter-qualified audio resources and forwards transport
// requests to the playback controller. Starting a new run replaces any run
// that is still playing or paused.

use crate::domain::{
    AudioResourceId, PlaybackMode, PlaybackSnapshot, PlaybackState, Reciter, Verse,
};
use crate::error::{AppError, AppResult};
use crate::services::playback_controller::PlaybackHandle;

#[derive(Debug, Clone)]
pub struct StartPlaybackRequest {
    /// The sequence as displayed, e.g. one chapter or one page
    pub verses: Vec<Verse>,
    pub start_index: usize,
    pub mode: PlaybackMode,
    pub reciter: Reciter,
}

#[derive(Debug, Clone)]
pub struct PlaybackService {
    controller: PlaybackHandle,
}

impl PlaybackService {
    pub fn new(controller: PlaybackHandle) -> Self {
        Self { controller }
    }

    pub async fn play(&self, request: StartPlaybackRequest) -> AppResult<()> {
        if request.start_index >= request.verses.len() {
            return Err(AppError::InvalidArgument(format!(
                "Cannot start at verse {} of {}",
                request.start_index,
                request.verses.len()
            )));
        }

        let sequence: Vec<AudioResourceId> = request
            .verses
            .iter()
            .map(|verse| request.reciter.resource_for(verse))
            .collect();

        log::info!(
            "Playing {} verses from {} with {}",
            sequence.len(),
            request.start_index,
            request.reciter.name
        );

        self.controller
            .replace(sequence, request.start_index, request.mode)
            .await
    }

    pub async fn pause(&self) -> AppResult<()> {
        self.controller.pause().await
    }

    pub async fn resume(&self) -> AppResult<()> {
        self.controller.resume().await
    }

    pub async fn toggle_pause(&self) -> AppResult<PlaybackState> {
        self.controller.toggle_pause().await
    }

    pub async fn skip_next(&self) -> AppResult<()> {
        self.controller.skip_next().await
    }

    pub async fn skip_previous(&self) -> AppResult<()> {
        self.controller.skip_previous().await
    }

    pub async fn stop(&self) -> AppResult<()> {
        self.controller.stop().await
    }

    pub async fn snapshot(&self) -> AppResult<PlaybackSnapshot> {
        self.controller.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::verse::fixtures;
    use crate::events::EventBus;
    use crate::integrations::player::MockAudioPlayer;
    use crate::services::playback_controller::PlaybackController;
    use std::sync::{Arc, Mutex};

    fn service(loaded: Arc<Mutex<Vec<String>>>, releases: Arc<Mutex<usize>>) -> PlaybackService {
        let mut player = MockAudioPlayer::new();
        player.expect_load_and_play().returning(move |_, resource| {
            loaded.lock().unwrap().push(resource.to_string());
            Ok(())
        });
        player.expect_release().returning(move || {
            *releases.lock().unwrap() += 1;
            Ok(())
        });

        let handle =
            PlaybackController::spawn(move |_sink| Box::new(player), Arc::new(EventBus::new()));
        PlaybackService::new(handle)
    }

    fn request(start_index: usize, reciter: Reciter) -> StartPlaybackRequest {
        StartPlaybackRequest {
            verses: fixtures::sample_verses()[12..].to_vec(),
            start_index,
            mode: PlaybackMode::PlayAll,
            reciter,
        }
    }

    #[tokio::test]
    async fn test_play_uses_reciter_folder() {
        let loaded = Arc::new(Mutex::new(Vec::new()));
        let svc = service(loaded.clone(), Arc::new(Mutex::new(0)));

        let reciter = Reciter::find("husary").unwrap();
        svc.play(request(2, reciter.clone())).await.unwrap();

        assert_eq!(
            *loaded.lock().unwrap(),
            vec![format!("{}/114003", reciter.folder)]
        );
        assert_eq!(svc.snapshot().await.unwrap().length, 6);
    }

    #[tokio::test]
    async fn test_play_replaces_live_session() {
        let loaded = Arc::new(Mutex::new(Vec::new()));
        let releases = Arc::new(Mutex::new(0));
        let svc = service(loaded.clone(), releases.clone());

        svc.play(request(0, Reciter::default())).await.unwrap();
        svc.play(request(4, Reciter::default())).await.unwrap();

        assert_eq!(*releases.lock().unwrap(), 1);
        assert_eq!(loaded.lock().unwrap().len(), 2);
        assert_eq!(svc.snapshot().await.unwrap().cursor, Some(4));
    }

    #[tokio::test]
    async fn test_concurrent_plays_do_not_collide() {
        let loaded = Arc::new(Mutex::new(Vec::new()));
        let releases = Arc::new(Mutex::new(0));
        let svc = service(loaded.clone(), releases.clone());
        let other = svc.clone();

        let (first, second) = tokio::join!(
            svc.play(request(0, Reciter::default())),
            other.play(request(3, Reciter::default())),
        );

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(loaded.lock().unwrap().len(), 2);
        assert_eq!(*releases.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_bad_request_keeps_live_session() {
        let loaded = Arc::new(Mutex::new(Vec::new()));
        let releases = Arc::new(Mutex::new(0));
        let svc = service(loaded, releases.clone());

        svc.play(request(0, Reciter::default())).await.unwrap();
        let result = svc.play(request(6, Reciter::default())).await;

        assert!(matches!(result, Err(AppError::InvalidArgument(_))));
        assert_eq!(*releases.lock().unwrap(), 0);
        assert_eq!(svc.snapshot().await.unwrap().state, PlaybackState::Playing);
    }
}
