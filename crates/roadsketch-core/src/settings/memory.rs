//! In-memory settings store.

use super::{Settings, SettingsError, SettingsResult, SettingsStore};
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStore {
    settings: RwLock<Option<Settings>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with `settings`.
    pub fn with(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(Some(settings)),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> SettingsResult<Settings> {
        let settings = self
            .settings
            .read()
            .map_err(|e| SettingsError::Other(format!("Lock error: {}", e)))?;
        Ok(settings.clone().unwrap_or_default())
    }

    fn save(&self, settings: &Settings) -> SettingsResult<()> {
        let mut slot = self
            .settings
            .write()
            .map_err(|e| SettingsError::Other(format!("Lock error: {}", e)))?;
        *slot = Some(settings.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Scenario;

    #[test]
    fn test_empty_store_yields_defaults() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        let settings = Settings {
            eraser_size: 60.0,
            last_scenario: Scenario::Intersection,
            ..Settings::default()
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }
}
