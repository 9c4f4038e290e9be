// src/services/playback_controller.rs
//
// Playback Controller - single consumer of transport commands
//
// One tokio task owns the PlaybackSequencer. Transport commands arrive from
// `PlaybackHandle` clones; player notifications arrive from whatever thread
// the player reports on. Both are applied on the task, one at a time.
//
// Notifications are matched against the sequencer's current track token;
// anything else belongs to a track that was skipped, stopped or replaced.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

use crate::domain::{AudioResourceId, PlaybackMode, PlaybackSnapshot, PlaybackState};
use crate::error::{AppError, AppResult};
use crate::events::EventBus;
use crate::integrations::player::{AudioPlayer, PlayerEvent, PlayerEventSink, PlayerNotification};
use crate::services::playback_sequencer::PlaybackSequencer;

const COMMAND_QUEUE_DEPTH: usize = 32;

type Reply<T> = oneshot::Sender<AppResult<T>>;

enum PlaybackCommand {
    Start {
        sequence: Vec<AudioResourceId>,
        start_index: usize,
        mode: PlaybackMode,
        reply: Reply<()>,
    },
    Replace {
        sequence: Vec<AudioResourceId>,
        start_index: usize,
        mode: PlaybackMode,
        reply: Reply<()>,
    },
    Pause(Reply<()>),
    Resume(Reply<()>),
    TogglePause(Reply<PlaybackState>),
    SkipNext(Reply<()>),
    SkipPrevious(Reply<()>),
    Stop(Reply<()>),
    Snapshot(Reply<PlaybackSnapshot>),
}

impl std::fmt::Debug for PlaybackCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PlaybackCommand::Start { .. } => "Start",
            PlaybackCommand::Replace { .. } => "Replace",
            PlaybackCommand::Pause(_) => "Pause",
            PlaybackCommand::Resume(_) => "Resume",
            PlaybackCommand::TogglePause(_) => "TogglePause",
            PlaybackCommand::SkipNext(_) => "SkipNext",
            PlaybackCommand::SkipPrevious(_) => "SkipPrevious",
            PlaybackCommand::Stop(_) => "Stop",
            PlaybackCommand::Snapshot(_) => "Snapshot",
        };
        f.write_str(name)
    }
}

pub struct PlaybackController;

impl PlaybackController {
    /// Spawns the controller task on the current tokio runtime.
    ///
    /// `make_player` receives the sink the player must report through.
    /// The task ends, releasing the player, once every handle is dropped.
    pub fn spawn<F>(make_player: F, event_bus: Arc<EventBus>) -> PlaybackHandle
    where
        F: FnOnce(PlayerEventSink) -> Box<dyn AudioPlayer>,
    {
        let (notify_tx, notify_rx) = mpsc::unbounded_channel();
        let player = make_player(PlayerEventSink::new(notify_tx));
        let sequencer = PlaybackSequencer::new(player, event_bus);

        let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE_DEPTH);
        tokio::spawn(run(sequencer, command_rx, notify_rx));

        PlaybackHandle {
            commands: command_tx,
        }
    }
}

async fn run(
    mut sequencer: PlaybackSequencer,
    mut commands: mpsc::Receiver<PlaybackCommand>,
    mut notifications: mpsc::UnboundedReceiver<PlayerNotification>,
) {
    log::debug!("Playback controller started");

    loop {
        tokio::select! {
            biased;

            Some(notification) = notifications.recv() => {
                apply_notification(&mut sequencer, notification);
            }
            command = commands.recv() => match command {
                Some(command) => apply_command(&mut sequencer, command),
                None => break,
            },
        }
    }

    sequencer.stop();
    log::debug!("Playback controller stopped");
}

fn apply_notification(sequencer: &mut PlaybackSequencer, notification: PlayerNotification) {
    if sequencer.current_track() != Some(notification.token) {
        log::debug!("Dropping stale notification for {:?}", notification.token);
        return;
    }

    match notification.event {
        PlayerEvent::Completed => sequencer.on_playback_completed(),
        PlayerEvent::Error(message) => sequencer.on_playback_error(message),
    }
}

fn apply_command(sequencer: &mut PlaybackSequencer, command: PlaybackCommand) {
    // A caller that stopped waiting is not an error
    match command {
        PlaybackCommand::Start {
            sequence,
            start_index,
            mode,
            reply,
        } => {
            let _ = reply.send(sequencer.start(sequence, start_index, mode));
        }
        PlaybackCommand::Replace {
            sequence,
            start_index,
            mode,
            reply,
        } => {
            let _ = reply.send(sequencer.replace(sequence, start_index, mode));
        }
        PlaybackCommand::Pause(reply) => {
            let _ = reply.send(sequencer.pause());
        }
        PlaybackCommand::Resume(reply) => {
            let _ = reply.send(sequencer.resume());
        }
        PlaybackCommand::TogglePause(reply) => {
            let result = match sequencer.state() {
                PlaybackState::Playing => sequencer.pause(),
                PlaybackState::Paused => sequencer.resume(),
                other => Err(AppError::InvalidState(format!(
                    "Nothing to pause or resume while {:?}",
                    other
                ))),
            };
            let _ = reply.send(result.map(|_| sequencer.state()));
        }
        PlaybackCommand::SkipNext(reply) => {
            let _ = reply.send(sequencer.skip_next());
        }
        PlaybackCommand::SkipPrevious(reply) => {
            let _ = reply.send(sequencer.skip_previous());
        }
        PlaybackCommand::Stop(reply) => {
            sequencer.stop();
            let _ = reply.send(Ok(()));
        }
        PlaybackCommand::Snapshot(reply) => {
            let _ = reply.send(Ok(sequencer.snapshot()));
        }
    }
}

/// Cloneable front door to the controller task.
#[derive(Debug, Clone)]
pub struct PlaybackHandle {
    commands: mpsc::Sender<PlaybackCommand>,
}

impl PlaybackHandle {
    pub async fn start(
        &self,
        sequence: Vec<AudioResourceId>,
        start_index: usize,
        mode: PlaybackMode,
    ) -> AppResult<()> {
        self.request(|reply| PlaybackCommand::Start {
            sequence,
            start_index,
            mode,
            reply,
        })
        .await
    }

    /// Starts a run, stopping any live one first, as a single command.
    pub async fn replace(
        &self,
        sequence: Vec<AudioResourceId>,
        start_index: usize,
        mode: PlaybackMode,
    ) -> AppResult<()> {
        self.request(|reply| PlaybackCommand::Replace {
            sequence,
            start_index,
            mode,
            reply,
        })
        .await
    }

    pub async fn pause(&self) -> AppResult<()> {
        self.request(PlaybackCommand::Pause).await
    }

    pub async fn resume(&self) -> AppResult<()> {
        self.request(PlaybackCommand::Resume).await
    }

    /// Pauses when playing, resumes when paused. Returns the new state.
    pub async fn toggle_pause(&self) -> AppResult<PlaybackState> {
        self.request(PlaybackCommand::TogglePause).await
    }

    pub async fn skip_next(&self) -> AppResult<()> {
        self.request(PlaybackCommand::SkipNext).await
    }

    pub async fn skip_previous(&self) -> AppResult<()> {
        self.request(PlaybackCommand::SkipPrevious).await
    }

    pub async fn stop(&self) -> AppResult<()> {
        self.request(PlaybackCommand::Stop).await
    }

    pub async fn snapshot(&self) -> AppResult<PlaybackSnapshot> {
        self.request(PlaybackCommand::Snapshot).await
    }

    async fn request<T, F>(&self, build: F) -> AppResult<T>
    where
        F: FnOnce(Reply<T>) -> PlaybackCommand,
    {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.commands
            .send(build(reply_tx))
            .await
            .map_err(|_| controller_gone())?;
        reply_rx.await.map_err(|_| controller_gone())?
    }
}

fn controller_gone() -> AppError {
    AppError::Playback("Playback controller is not running".to_string())
}
