use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Name of the directory holding the preference file, inside the user's config directory.
pub const APP_DIR: &str = "team-splitter";

/// Name of the preference file.
pub const FILE_NAME: &str = "preferences.json";

/// The user's persisted choices.
#[derive(Serialize, Deserialize, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Preferences {
    /// Whether generated team names are used instead of "Team N".
    #[serde(rename = "teamNamesEnabled", default)]
    pub team_names_enabled: bool,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PreferencesError {
    #[error("could not access preferences at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid preferences at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads and saves [`Preferences`].
pub trait PreferenceStore {
    /// Returns the saved preferences, or the defaults if none were saved.
    fn load(&self) -> Result<Preferences, PreferencesError>;

    /// Persists `preferences`.
    fn save(&mut self, preferences: &Preferences) -> Result<(), PreferencesError>;
}

/// Stores the preferences as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[inline]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/team-splitter/preferences.json`, if the platform has a config directory.
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(APP_DIR).join(FILE_NAME)))
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> PreferencesError {
        PreferencesError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> Result<Preferences, PreferencesError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved preferences");
                return Ok(Preferences::default());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        serde_json::from_str(&content).map_err(|source| PreferencesError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&mut self, preferences: &Preferences) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }
        let json = serde_json::to_string_pretty(preferences).map_err(|source| {
            PreferencesError::Json {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|err| self.io_error(err))?;
        debug!(path = %self.path.display(), ?preferences, "saved preferences");
        Ok(())
    }
}

/// Keeps the preferences in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Option<Preferences>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Preferences, PreferencesError> {
        Ok(self.saved.unwrap_or_default())
    }

    fn save(&mut self, preferences: &Preferences) -> Result<(), PreferencesError> {
        self.saved = Some(*preferences);
        Ok(())
    }
}

/// Applies an explicit toggle, saving only when one was given. Returns the preferences to use.
///
/// An unreadable preference file never blocks a generation: without a toggle the defaults are used,
/// and an explicit toggle overwrites the file.
pub fn toggle_team_names<S: PreferenceStore + ?Sized>(
    store: &mut S,
    team_names_enabled: Option<bool>,
) -> Result<Preferences, PreferencesError> {
    match team_names_enabled {
        Some(enabled) => {
            let preferences = Preferences {
                team_names_enabled: enabled,
            };
            store.save(&preferences)?;
            Ok(preferences)
        }
        None => Ok(store.load().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring saved preferences");
            Preferences::default()
        })),
    }
}
