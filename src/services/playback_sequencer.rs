// src/services/playback_sequencer.rs
//
// Playback Sequencer
//
// Deterministic state machine over one `PlaybackSession`:
//
//   Idle/Finished --start--> Playing <--pause/resume--> Paused
//   Playing --completed(PlayAll, more)--> Playing (cursor + 1)
//   Playing --completed(last or SingleVerse)--> Finished
//   Playing/Paused --error--> Finished
//   any --stop--> Idle
//
// CRITICAL RULES:
// - The sequencer is the only owner of the session and of the player
// - Side effects go through the player and the event bus, nothing else
// - Player failures become PlaybackFailed events, never Err returns
// - Not thread-safe by itself; PlaybackController serializes access

use std::sync::Arc;

use crate::domain::{
    AudioResourceId, PlaybackMode, PlaybackSession, PlaybackSnapshot, PlaybackState, TrackToken,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    EventBus, PlaybackFailed, PlaybackFinished, PlaybackPaused, PlaybackResumed, PlaybackStarted,
    PlaybackStopped, PlayingVerseChanged,
};
use crate::integrations::player::AudioPlayer;

pub struct PlaybackSequencer {
    player: Box<dyn AudioPlayer>,
    session: Option<PlaybackSession>,
    /// Token of the most recent `load_and_play`, cleared once the track is no
    /// longer expected to report.
    current_track: Option<TrackToken>,
    next_token: u64,
    player_acquired: bool,
    event_bus: Arc<EventBus>,
}

impl PlaybackSequencer {
    pub fn new(player: Box<dyn AudioPlayer>, event_bus: Arc<EventBus>) -> Self {
        Self {
            player,
            session: None,
            current_track: None,
            next_token: 0,
            player_acquired: false,
            event_bus,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.session
            .as_ref()
            .map(PlaybackSession::state)
            .unwrap_or_default()
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.session
            .as_ref()
            .map(PlaybackSession::snapshot)
            .unwrap_or_default()
    }

    /// Token a player notification must carry to be acted upon.
    pub fn current_track(&self) -> Option<TrackToken> {
        self.current_track
    }

    /// Starts a new run over `sequence` at `start_index`.
    ///
    /// Only valid from `Idle` or `Finished`. Arguments are checked before the
    /// player is touched.
    pub fn start(
        &mut self,
        sequence: Vec<AudioResourceId>,
        start_index: usize,
        mode: PlaybackMode,
    ) -> AppResult<()> {
        let state = self.state();
        if state.is_active() {
            return Err(AppError::InvalidState(format!(
                "Cannot start playback while {:?}",
                state
            )));
        }
        check_arguments(&sequence, start_index)?;

        let length = sequence.len();
        self.session = Some(PlaybackSession::new(sequence, start_index, mode));

        log::debug!(
            "Playback started: {:?} at {} of {}",
            mode,
            start_index,
            length
        );
        self.event_bus
            .emit(PlaybackStarted::new(mode, start_index, length));
        self.event_bus.emit(PlayingVerseChanged::new(start_index));

        self.load_current();
        Ok(())
    }

    /// Stops any live run and starts the new one. A bad sequence or index is
    /// rejected before the live run is touched.
    pub fn replace(
        &mut self,
        sequence: Vec<AudioResourceId>,
        start_index: usize,
        mode: PlaybackMode,
    ) -> AppResult<()> {
        check_arguments(&sequence, start_index)?;
        if self.state().is_active() {
            self.stop();
        }
        self.start(sequence, start_index, mode)
    }

    pub fn pause(&mut self) -> AppResult<()> {
        let session = self.require_state(PlaybackState::Playing, "pause")?;
        let cursor = session.cursor();

        if let Err(e) = self.player.pause() {
            self.fail(e.to_string());
            return Ok(());
        }

        self.set_state(PlaybackState::Paused);
        log::debug!("Playback paused at {}", cursor);
        self.event_bus.emit(PlaybackPaused::new(cursor));
        Ok(())
    }

    pub fn resume(&mut self) -> AppResult<()> {
        let session = self.require_state(PlaybackState::Paused, "resume")?;
        let cursor = session.cursor();

        if let Err(e) = self.player.resume() {
            self.fail(e.to_string());
            return Ok(());
        }

        self.set_state(PlaybackState::Playing);
        log::debug!("Playback resumed at {}", cursor);
        self.event_bus.emit(PlaybackResumed::new(cursor));
        Ok(())
    }

    pub fn skip_next(&mut self) -> AppResult<()> {
        self.skip(true)
    }

    pub fn skip_previous(&mut self) -> AppResult<()> {
        self.skip(false)
    }

    fn skip(&mut self, forward: bool) -> AppResult<()> {
        let state = self.state();
        let session = match self.session.as_mut() {
            // single-verse runs ignore skips in any state
            Some(session) if session.mode() == PlaybackMode::SingleVerse => return Ok(()),
            Some(session) if state.is_active() => session,
            _ => {
                return Err(AppError::InvalidState(format!(
                    "Cannot skip while {:?}",
                    state
                )))
            }
        };

        if !session.step(forward) {
            log::debug!("Skip ignored at boundary {}", session.cursor());
            return Ok(());
        }

        session.set_state(PlaybackState::Playing);
        let cursor = session.cursor();
        self.event_bus.emit(PlayingVerseChanged::new(cursor));
        self.load_current();
        Ok(())
    }

    /// Releases the player and discards the session. Safe to repeat.
    pub fn stop(&mut self) {
        self.current_track = None;
        let had_session = self.session.take().is_some();

        if self.player_acquired {
            self.player_acquired = false;
            if let Err(e) = self.player.release() {
                log::warn!("Failed to release player: {}", e);
            }
        }

        if had_session {
            log::debug!("Playback stopped");
            self.event_bus.emit(PlaybackStopped::new());
        }
    }

    /// The current track played to its end.
    pub fn on_playback_completed(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.state().is_active() {
            return;
        }

        if session.mode() == PlaybackMode::PlayAll && session.step(true) {
            session.set_state(PlaybackState::Playing);
            let cursor = session.cursor();
            self.event_bus.emit(PlayingVerseChanged::new(cursor));
            self.load_current();
            return;
        }

        session.set_state(PlaybackState::Finished);
        let cursor = session.cursor();
        self.current_track = None;
        log::debug!("Playback finished at {}", cursor);
        self.event_bus.emit(PlaybackFinished::new(cursor));
    }

    /// The player gave up on the current track. No retry.
    pub fn on_playback_error(&mut self, message: String) {
        if self.state().is_active() {
            self.fail(message);
        }
    }

    fn load_current(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let resource = session.current().clone();

        self.next_token += 1;
        let token = TrackToken(self.next_token);
        self.current_track = Some(token);
        self.player_acquired = true;

        if let Err(e) = self.player.load_and_play(token, &resource) {
            self.fail(e.to_string());
        }
    }

    fn fail(&mut self, message: String) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.set_state(PlaybackState::Finished);
        let cursor = session.cursor();
        self.current_track = None;

        log::warn!("Playback failed at {}: {}", cursor, message);
        self.event_bus.emit(PlaybackFailed::new(cursor, message));
    }

    fn require_state(&self, expected: PlaybackState, action: &str) -> AppResult<&PlaybackSession> {
        match self.session.as_ref() {
            Some(session) if session.state() == expected => Ok(session),
            _ => Err(AppError::InvalidState(format!(
                "Cannot {} while {:?}",
                action,
                self.state()
            ))),
        }
    }

    fn set_state(&mut self, state: PlaybackState) {
        if let Some(session) = self.session.as_mut() {
            session.set_state(state);
        }
    }
}

fn check_arguments(sequence: &[AudioResourceId], start_index: usize) -> AppResult<()> {
    if sequence.is_empty() {
        return Err(AppError::InvalidArgument(
            "Playback sequence is empty".to_string(),
        ));
    }
    if start_index >= sequence.len() {
        return Err(AppError::InvalidArgument(format!(
            "Start index {} out of range for sequence of {}",
            start_index,
            sequence.len()
        )));
    }
    Ok(())
}

impl Drop for PlaybackSequencer {
    fn drop(&mut self) {
        self.stop();
    }
}
