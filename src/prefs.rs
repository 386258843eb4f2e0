use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Prompt answers remembered across runs of this generator only.
///
/// Lifecycle: [`PreferenceStore::load`] once at startup, [`get`](Self::get)
/// when building prompt defaults, [`set`](Self::set) for each answered
/// question marked `store`, then a single [`save`](Self::save) once the
/// questions are done.
///
/// A store without a path (see [`PreferenceStore::in_memory`]) keeps answers
/// for the current run only.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
    dirty: bool,
}

impl PreferenceStore {
    /// Location used when no explicit path is configured, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "ts-scaffold", "ts-scaffold")
            .map(|dirs| dirs.config_dir().join("preferences.json"))
    }

    /// Loads from the configured path, else the default one. Without either the
    /// store lives in memory and nothing is remembered.
    pub fn open(configured: Option<PathBuf>) -> Self {
        match configured.or_else(Self::default_path) {
            Some(path) => Self::load(path),
            None => {
                warn!("No configuration directory found, author answers will not be remembered");
                Self::in_memory()
            }
        }
    }

    pub fn in_memory() -> Self {
        Self {
            path: None,
            values: BTreeMap::new(),
            dirty: false,
        }
    }

    /// Loads stored answers. A missing or unreadable file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), "Ignoring unreadable preferences: {}", e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        debug!(path = %path.display(), count = values.len(), "Loaded preferences");

        Self {
            path: Some(path),
            values,
            dirty: false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        if self.get(key) != Some(value) {
            self.values.insert(key.to_string(), value.to_string());
            self.dirty = true;
        }
    }

    /// Persists the store if anything changed since it was loaded.
    pub fn save(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let Some(path) = &self.path else {
            debug!("Preferences kept in memory only");
            return Ok(());
        };

        let to_err = |source| Error::Preferences {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(to_err)?;
        }
        let content = serde_json::to_string_pretty(&self.values)
            .map_err(|e| to_err(std::io::Error::other(e)))?;
        fs::write(path, content).map_err(to_err)?;

        debug!(path = %path.display(), "Saved preferences");
        self.dirty = false;
        Ok(())
    }
}
