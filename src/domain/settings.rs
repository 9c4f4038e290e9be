// src/domain/settings.rs
//
// User-facing preferences the core needs at call time. The core never reads
// them from a global; the application layer asks a `SettingsProvider` and
// passes the values into each call.

use serde::{Deserialize, Serialize};
use std::sync::RwLock;

use crate::domain::verse::{AudioResourceId, Verse};

/// Display language; selects which translation field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Indonesian,
    English,
}

/// A recitation voice and the folder its audio lives under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reciter {
    pub id: String,
    pub name: String,
    pub folder: String,
}

impl Reciter {
    pub fn new(id: &str, name: &str, folder: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            folder: folder.to_string(),
        }
    }

    /// Reciters known to the bundled audio source.
    pub fn catalog() -> Vec<Reciter> {
        vec![
            Reciter::new("alafasy", "Mishary Rashid Alafasy", "Alafasy_128kbps"),
            Reciter::new(
                "abdul_basit",
                "Abdul Basit Abdus Samad",
                "Abdul_Basit_Murattal_192kbps",
            ),
            Reciter::new("husary", "Mahmoud Khalil Al-Husary", "Husary_128kbps"),
            Reciter::new(
                "minshawy",
                "Mohamed Siddiq El-Minshawi",
                "Minshawy_Murattal_128kbps",
            ),
        ]
    }

    pub fn find(id: &str) -> Option<Reciter> {
        Self::catalog().into_iter().find(|r| r.id == id)
    }

    /// Reciter-qualified audio handle for a verse: `{folder}/{CCCVVV}`.
    pub fn resource_for(&self, verse: &Verse) -> AudioResourceId {
        AudioResourceId::new(format!("{}/{}", self.folder, verse.audio_resource_id))
    }
}

impl Default for Reciter {
    fn default() -> Self {
        Reciter::new("alafasy", "Mishary Rashid Alafasy", "Alafasy_128kbps")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    pub language: Language,
    pub reciter: Reciter,
}

/// Source of the current settings. Storage is owned by the host application.
pub trait SettingsProvider: Send + Sync {
    fn current(&self) -> Settings;
}

/// Settings held in memory, replaced wholesale by the host.
#[derive(Debug, Default)]
pub struct StaticSettings {
    inner: RwLock<Settings>,
}

impl StaticSettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: RwLock::new(settings),
        }
    }

    pub fn replace(&self, settings: Settings) {
        match self.inner.write() {
            Ok(mut guard) => *guard = settings,
            Err(poisoned) => *poisoned.into_inner() = settings,
        }
    }
}

impl SettingsProvider for StaticSettings {
    fn current(&self) -> Settings {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
