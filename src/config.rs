// src/config.rs
//
// Runtime configuration.
//
// Every field has a default so a partial (or missing) config file is valid.
// Stored as JSON next to the database in the application data directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "myqoran";
const DATABASE_FILE: &str = "quran.db";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Corpus database; `None` means `{data_dir}/myqoran/quran.db`
    pub database_path: Option<PathBuf>,
    pub pool_max_size: u32,
    pub player: PlayerConfig,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            database_path: None,
            pool_max_size: 4,
            player: PlayerConfig::default(),
        }
    }
}

impl CoreConfig {
    /// Resolved database path.
    pub fn database_path(&self) -> AppResult<PathBuf> {
        match &self.database_path {
            Some(path) => Ok(path.clone()),
            None => Ok(app_data_dir()?.join(DATABASE_FILE)),
        }
    }
}

/// Settings for the mpv-backed audio player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub mpv_binary: String,
    /// Prefix joined with `{resource}.mp3`
    pub audio_base_url: String,
    /// IPC socket; `None` means a per-process path in the temp directory
    pub ipc_socket_path: Option<PathBuf>,
    /// How long to wait for mpv to open its IPC socket
    pub startup_timeout_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            mpv_binary: "mpv".to_string(),
            audio_base_url: "https://everyayah.com/data".to_string(),
            ipc_socket_path: None,
            startup_timeout_ms: 3000,
        }
    }
}

impl PlayerConfig {
    pub fn socket_path(&self) -> PathBuf {
        self.ipc_socket_path.clone().unwrap_or_else(|| {
            std::env::temp_dir().join(format!("myqoran-mpv-{}.sock", std::process::id()))
        })
    }
}

/// `{data_dir}/myqoran`, created on demand.
pub fn app_data_dir() -> AppResult<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    let dir = data_dir.join(APP_DIR);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn default_config_path() -> AppResult<PathBuf> {
    Ok(app_data_dir()?.join(CONFIG_FILE))
}

/// Reads a config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> AppResult<CoreConfig> {
    if !path.exists() {
        log::info!("No config at {}, using defaults", path.display());
        return Ok(CoreConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;
    let config: CoreConfig = serde_json::from_str(&raw)?;
    Ok(config)
}
