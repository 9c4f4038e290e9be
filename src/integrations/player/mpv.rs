// src/integrations/player/mpv.rs
//
// mpv-backed audio player (unix)
//
// mpv is launched once, idle and audio-only, with a JSON IPC socket:
//   mpv --idle=yes --no-video --no-terminal --input-ipc-server=<socket>
//
// Commands are newline-delimited JSON written to the socket. A reader thread
// follows mpv's event stream and turns `end-file` into player notifications.
//
// Track bookkeeping: `loadfile` is sent with the track token as its
// `request_id`. mpv's reply carries the `playlist_entry_id` of the new entry,
// and `end-file` names the entry it ended, so every end maps back to the
// token of its own load. The replaced track's end carries the old token and
// is discarded downstream as stale.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use super::{AudioPlayer, PlayerEventSink};
use crate::config::PlayerConfig;
use crate::domain::{AudioResourceId, TrackToken};
use crate::error::{AppError, AppResult};

const SOCKET_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// MPV IPC command envelope
#[derive(Debug, Serialize)]
struct MpvCommand {
    command: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<u64>,
}

/// Anything mpv writes to the socket: command replies and async events
#[derive(Debug, Default, Deserialize)]
struct MpvMessage {
    #[serde(default)]
    event: Option<String>,
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    file_error: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    request_id: Option<u64>,
    #[serde(default)]
    playlist_entry_id: Option<i64>,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

#[derive(Debug, Default)]
struct TrackState {
    /// `loadfile` requests awaiting their reply, by request id
    requested: HashMap<u64, TrackToken>,
    /// Loaded playlist entries that have not ended yet
    entries: HashMap<i64, TrackToken>,
    latest: Option<TrackToken>,
}

impl TrackState {
    fn clear(&mut self) {
        self.requested.clear();
        self.entries.clear();
        self.latest = None;
    }

    /// The most recent load, if mpv has not reported its end
    fn unfinished(&mut self) -> Option<TrackToken> {
        let latest = self.latest.take()?;
        let unfinished = self
            .requested
            .values()
            .chain(self.entries.values())
            .any(|token| *token == latest);
        self.clear();
        unfinished.then_some(latest)
    }
}

fn lock(state: &Mutex<TrackState>) -> MutexGuard<'_, TrackState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct MpvProcess {
    child: Child,
    socket: UnixStream,
    socket_path: PathBuf,
    reader: Option<JoinHandle<()>>,
}

pub struct MpvAudioPlayer {
    config: PlayerConfig,
    sink: PlayerEventSink,
    tracks: Arc<Mutex<TrackState>>,
    process: Option<MpvProcess>,
}

impl MpvAudioPlayer {
    /// mpv is not started until the first track is loaded.
    pub fn new(config: PlayerConfig, sink: PlayerEventSink) -> Self {
        Self {
            config,
            sink,
            tracks: Arc::new(Mutex::new(TrackState::default())),
            process: None,
        }
    }

    /// Playable location of a resource: `{base_url}/{resource}.mp3`
    pub fn locate(&self, resource: &AudioResourceId) -> String {
        format!(
            "{}/{}.mp3",
            self.config.audio_base_url.trim_end_matches('/'),
            resource
        )
    }

    fn is_running(&mut self) -> bool {
        match self.process.as_mut() {
            Some(process) => matches!(process.child.try_wait(), Ok(None)),
            None => false,
        }
    }

    fn ensure_running(&mut self) -> AppResult<()> {
        if self.is_running() {
            return Ok(());
        }
        self.shutdown();

        let socket_path = self.config.socket_path();
        let _ = std::fs::remove_file(&socket_path);

        let child = Command::new(&self.config.mpv_binary)
            .arg("--idle=yes")
            .arg("--no-video")
            .arg("--no-terminal")
            .arg(format!("--input-ipc-server={}", socket_path.display()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AppError::Playback(format!("Failed to launch MPV: {}", e)))?;

        log::info!("Launched mpv (pid {})", child.id());

        let socket = match connect_with_timeout(&socket_path, self.config.startup_timeout_ms) {
            Ok(socket) => socket,
            Err(e) => {
                let mut child = child;
                let _ = child.kill();
                let _ = child.wait();
                return Err(e);
            }
        };

        let reader_socket = socket.try_clone()?;
        let sink = self.sink.clone();
        let tracks = Arc::clone(&self.tracks);
        let reader = std::thread::Builder::new()
            .name("mpv-events".to_string())
            .spawn(move || follow_events(reader_socket, tracks, sink))?;

        self.process = Some(MpvProcess {
            child,
            socket,
            socket_path,
            reader: Some(reader),
        });
        Ok(())
    }

    fn send_command(&mut self, command: Vec<serde_json::Value>) -> AppResult<()> {
        self.send(MpvCommand {
            command,
            request_id: None,
        })
    }

    fn send(&mut self, command: MpvCommand) -> AppResult<()> {
        let process = self
            .process
            .as_mut()
            .ok_or_else(|| AppError::Playback("MPV is not running".to_string()))?;

        let mut payload = serde_json::to_string(&command)?;
        payload.push('\n');

        process
            .socket
            .write_all(payload.as_bytes())
            .map_err(|e| AppError::Playback(format!("IPC write error: {}", e)))
    }

    /// Stops mpv and forgets any track. Safe to call when not running.
    fn shutdown(&mut self) {
        {
            lock(&self.tracks).clear();
        }

        let Some(mut process) = self.process.take() else {
            return;
        };

        let _ = process.socket.write_all(b"{\"command\":[\"quit\"]}\n");
        let _ = process.socket.shutdown(std::net::Shutdown::Both);
        let _ = process.child.kill();
        let _ = process.child.wait();
        if let Some(reader) = process.reader.take() {
            let _ = reader.join();
        }
        let _ = std::fs::remove_file(&process.socket_path);

        log::info!("mpv stopped");
    }
}

impl AudioPlayer for MpvAudioPlayer {
    fn load_and_play(&mut self, token: TrackToken, resource: &AudioResourceId) -> AppResult<()> {
        self.ensure_running()?;

        {
            let mut tracks = lock(&self.tracks);
            tracks.requested.insert(token.0, token);
            tracks.latest = Some(token);
        }

        let location = self.locate(resource);
        log::debug!("Loading {} as track {:?}", location, token);

        self.send(MpvCommand {
            command: vec![json!("loadfile"), json!(location), json!("replace")],
            request_id: Some(token.0),
        })?;
        self.send_command(vec![json!("set_property"), json!("pause"), json!(false)])
    }

    fn pause(&mut self) -> AppResult<()> {
        self.send_command(vec![json!("set_property"), json!("pause"), json!(true)])
    }

    fn resume(&mut self) -> AppResult<()> {
        self.send_command(vec![json!("set_property"), json!("pause"), json!(false)])
    }

    fn release(&mut self) -> AppResult<()> {
        self.shutdown();
        Ok(())
    }
}

impl Drop for MpvAudioPlayer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn connect_with_timeout(path: &Path, timeout_ms: u64) -> AppResult<UnixStream> {
    let deadline = Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        match UnixStream::connect(path) {
            Ok(stream) => return Ok(stream),
            Err(e) if Instant::now() >= deadline => {
                return Err(AppError::Playback(format!(
                    "MPV IPC socket {} did not open: {}",
                    path.display(),
                    e
                )));
            }
            Err(_) => std::thread::sleep(SOCKET_POLL_INTERVAL),
        }
    }
}

/// Reader loop. Ends when mpv closes the socket.
fn follow_events(socket: UnixStream, tracks: Arc<Mutex<TrackState>>, sink: PlayerEventSink) {
    let reader = BufReader::new(socket);

    for line in reader.lines() {
        let Ok(line) = line else { break };
        let message: MpvMessage = match serde_json::from_str(&line) {
            Ok(message) => message,
            Err(e) => {
                log::warn!("Unparseable mpv message '{}': {}", line, e);
                continue;
            }
        };
        handle_message(&message, &tracks, &sink);
    }

    // mpv went away on its own before the latest track ended
    let orphaned = lock(&tracks).unfinished();
    if let Some(token) = orphaned {
        sink.failed(token, "MPV exited during playback");
    }
}

fn handle_message(message: &MpvMessage, tracks: &Mutex<TrackState>, sink: &PlayerEventSink) {
    if let Some(error) = message.error.as_deref() {
        handle_reply(message, error, tracks, sink);
        return;
    }

    if message.event.as_deref() != Some("end-file") {
        return;
    }
    let Some(entry) = message.playlist_entry_id else {
        log::debug!("end-file without playlist entry id");
        return;
    };
    let finished = lock(tracks).entries.remove(&entry);
    let Some(token) = finished else { return };

    match message.reason.as_deref() {
        Some("eof") => sink.completed(token),
        Some("error") => sink.failed(
            token,
            message
                .file_error
                .clone()
                .unwrap_or_else(|| "playback error".to_string()),
        ),
        // "stop", "quit", "redirect": replaced or shut down on purpose
        _ => {}
    }
}

fn handle_reply(
    message: &MpvMessage,
    error: &str,
    tracks: &Mutex<TrackState>,
    sink: &PlayerEventSink,
) {
    let load = message
        .request_id
        .and_then(|id| lock(tracks).requested.remove(&id));

    let Some(token) = load else {
        if error != "success" {
            log::warn!("MPV IPC error: {}", error);
        }
        return;
    };

    if error != "success" {
        sink.failed(token, format!("loadfile failed: {}", error));
        return;
    }

    let entry = message
        .data
        .as_ref()
        .and_then(|data| data.get("playlist_entry_id"))
        .and_then(serde_json::Value::as_i64);

    match entry {
        Some(entry) => {
            lock(tracks).entries.insert(entry, token);
        }
        None => log::warn!("loadfile reply for {:?} has no playlist entry id", token),
    }
}
