//! Headless session driver.
//!
//! Replays a JSON script of interaction events through a sketching session,
//! prints the resulting scene and saves the settings it ended with.

use roadsketch_app::{replay, AppError};
use roadsketch_core::settings::{load_or_default, FileStore};
use roadsketch_core::SettingsStore;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let Some(script) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: roadsketch <script.json>");
        return ExitCode::from(2);
    };

    match run(&script) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("roadsketch: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(script: &Path) -> Result<String, AppError> {
    let store = match FileStore::default_location() {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("No settings location: {}", e);
            None
        }
    };
    let settings = store.as_ref().map(|s| load_or_default(s)).unwrap_or_default();

    log::info!("Replaying {}", script.display());
    let json = std::fs::read_to_string(script)
        .map_err(|e| AppError::Io(format!("Failed to read {}: {}", script.display(), e)))?;
    let driver = replay(&json, settings)?;

    if let Some(store) = &store {
        if let Err(e) = store.save(driver.sketch().settings()) {
            log::warn!("Failed to save settings to {}: {}", store.path().display(), e);
        }
    }
    Ok(serde_json::to_string_pretty(&driver.report())?)
}
