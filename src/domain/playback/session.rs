use serde::{Deserialize, Serialize};

use crate::domain::verse::AudioResourceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    /// Play the addressed verse once, then finish
    SingleVerse,
    /// Advance through the sequence until its end
    PlayAll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    Paused,
    Finished,
}

impl PlaybackState {
    /// A track is loaded and owned by the player
    pub fn is_active(self) -> bool {
        matches!(self, PlaybackState::Playing | PlaybackState::Paused)
    }
}

/// Identifies one `load_and_play` call.
///
/// Player notifications carry the token of the track they refer to, so a
/// completion that races with a skip or a stop can be recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackToken(pub u64);

/// Mutable state of one playback run. Owned by the sequencer only.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    sequence: Vec<AudioResourceId>,
    cursor: usize,
    mode: PlaybackMode,
    state: PlaybackState,
}

impl PlaybackSession {
    /// Caller guarantees `cursor < sequence.len()`.
    pub(crate) fn new(sequence: Vec<AudioResourceId>, cursor: usize, mode: PlaybackMode) -> Self {
        debug_assert!(cursor < sequence.len());
        Self {
            sequence,
            cursor,
            mode,
            state: PlaybackState::Playing,
        }
    }

    pub fn sequence(&self) -> &[AudioResourceId] {
        &self.sequence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current(&self) -> &AudioResourceId {
        &self.sequence[self.cursor]
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.sequence.len()
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    pub(crate) fn set_state(&mut self, state: PlaybackState) {
        self.state = state;
    }

    /// Moves the cursor by one step, clamped to the sequence.
    /// Returns false when already at the boundary.
    pub(crate) fn step(&mut self, forward: bool) -> bool {
        if forward && self.has_next() {
            self.cursor += 1;
            true
        } else if !forward && self.has_previous() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            state: self.state,
            mode: Some(self.mode),
            cursor: Some(self.cursor),
            length: self.sequence.len(),
        }
    }
}

/// Read-only view of the sequencer for control panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub state: PlaybackState,
    pub mode: Option<PlaybackMode>,
    pub cursor: Option<usize>,
    pub length: usize,
}
