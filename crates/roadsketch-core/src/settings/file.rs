//! File-based settings store for native platforms.

use super::{Settings, SettingsError, SettingsResult, SettingsStore};
use std::fs;
use std::path::{Path, PathBuf};

/// File name used inside the settings directory.
const SETTINGS_FILE: &str = "settings.json";

/// Stores settings as a JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Use the settings file at `path`. The file need not exist yet.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Settings file in the default location.
    ///
    /// On Unix: `~/.config/roadsketch/settings.json`
    /// On Windows: `%APPDATA%\roadsketch\settings.json`
    pub fn default_location() -> SettingsResult<Self> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| SettingsError::Io("Could not determine home directory".to_string()))?;
        Ok(Self::new(base.join("roadsketch").join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> SettingsResult<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let json = fs::read_to_string(&self.path).map_err(|e| {
            SettingsError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        Settings::from_json(&json).map_err(|e| {
            SettingsError::Serialization(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, settings: &Settings) -> SettingsResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                SettingsError::Io(format!("Failed to create settings directory: {}", e))
            })?;
        }
        let json = settings
            .to_json()
            .map_err(|e| SettingsError::Serialization(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| {
            SettingsError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("settings.json"));
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("settings.json"));
        let settings = Settings {
            eraser_size: 90.0,
            delete_on_change: false,
            ..Settings::default()
        };
        store.save(&settings).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let store = FileStore::new(path);
        assert!(matches!(store.load(), Err(SettingsError::Serialization(_))));
    }
}
