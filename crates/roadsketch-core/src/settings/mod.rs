//! User settings and where they are stored.
//!
//! Settings are read once at session start and handed to the session
//! explicitly; nothing in the core looks them up on its own.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

use crate::color::{SerializableColor, Tint, DEFAULT_DRAGGABLE_COLOR, DEFAULT_PEN_COLOR};
use crate::draggable::DraggableDefaults;
use crate::palette::Scenario;
use crate::pen::{Pen, DEFAULT_ERASER_SIZE, ERASER_SIZES};
use kurbo::Size;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings errors.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Settings error: {0}")]
    Other(String),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Color theme of the surrounding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Persisted user preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
    /// Pencil color for freehand strokes.
    pub pen_color: SerializableColor,
    /// Tint given to newly placed items.
    pub initial_tint: Tint,
    /// Clear the scene when the scenario changes.
    pub delete_on_change: bool,
    /// Eraser width, one of `ERASER_SIZES`.
    pub eraser_size: f64,
    /// Radius of the popout arc.
    pub popout_radius: f64,
    /// Scenario shown when the app was last closed.
    pub last_scenario: Scenario,
}

impl Settings {
    pub const DEFAULT_POPOUT_RADIUS: f64 = 100.0;

    /// Placement defaults for a viewport of the given size.
    pub fn draggable_defaults(&self, viewport: Size) -> DraggableDefaults {
        DraggableDefaults::centered(viewport, self.initial_tint)
    }

    /// Pen in pencil mode with the configured color and eraser width.
    pub fn pen(&self) -> Pen {
        Pen::new(self.pen_color, self.eraser_size)
    }

    /// Replace out-of-range values with defaults.
    pub fn sanitized(mut self) -> Self {
        if !ERASER_SIZES.contains(&self.eraser_size) {
            self.eraser_size = DEFAULT_ERASER_SIZE;
        }
        if !(self.popout_radius.is_finite() && self.popout_radius > 0.0) {
            self.popout_radius = Self::DEFAULT_POPOUT_RADIUS;
        }
        self
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            pen_color: DEFAULT_PEN_COLOR,
            initial_tint: Tint::Color(DEFAULT_DRAGGABLE_COLOR),
            delete_on_change: true,
            eraser_size: DEFAULT_ERASER_SIZE,
            popout_radius: Self::DEFAULT_POPOUT_RADIUS,
            last_scenario: Scenario::default(),
        }
    }
}

/// Trait for settings storage backends.
pub trait SettingsStore {
    /// Load settings. A store with nothing saved yields defaults.
    fn load(&self) -> SettingsResult<Settings>;

    /// Save settings.
    fn save(&self, settings: &Settings) -> SettingsResult<()>;
}

/// Load settings, falling back to defaults on any error.
pub fn load_or_default(store: &dyn SettingsStore) -> Settings {
    match store.load() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Using default settings: {}", e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenStore;

    impl SettingsStore for BrokenStore {
        fn load(&self) -> SettingsResult<Settings> {
            Err(SettingsError::Other("broken".to_string()))
        }

        fn save(&self, _settings: &Settings) -> SettingsResult<()> {
            Err(SettingsError::Other("broken".to_string()))
        }
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.pen_color.to_hex(), "#20303c");
        assert_eq!(settings.initial_tint, Tint::parse("#e09f3e").unwrap());
        assert!(settings.delete_on_change);
        assert_eq!(settings.eraser_size, 80.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"eraser_size": 50.0, "theme": "light"}"#).unwrap();
        assert_eq!(settings.eraser_size, 50.0);
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.initial_tint, Tint::Color(DEFAULT_DRAGGABLE_COLOR));
        assert!(settings.delete_on_change);
    }

    #[test]
    fn test_sanitized() {
        let settings =
            Settings::from_json(r#"{"eraser_size": 55.0, "popout_radius": 0.0}"#).unwrap();
        assert_eq!(settings.eraser_size, DEFAULT_ERASER_SIZE);
        assert_eq!(settings.popout_radius, Settings::DEFAULT_POPOUT_RADIUS);
    }

    #[test]
    fn test_round_trip() {
        let settings = Settings {
            initial_tint: Tint::Color(SerializableColor::rgb(1, 2, 3)),
            delete_on_change: false,
            last_scenario: Scenario::Roundabout,
            ..Settings::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_pen_follows_settings() {
        let settings = Settings {
            pen_color: SerializableColor::black(),
            eraser_size: 100.0,
            ..Settings::default()
        };
        let mut pen = settings.pen();
        assert_eq!(pen.stroke_color(), SerializableColor::black());
        pen.use_eraser();
        assert_eq!(pen.stroke_width(), 100.0);
    }

    #[test]
    fn test_draggable_defaults() {
        let settings = Settings {
            initial_tint: Tint::Color(SerializableColor::black()),
            ..Settings::default()
        };
        let defaults = settings.draggable_defaults(Size::new(100.0, 40.0));
        assert_eq!(defaults.anchor, kurbo::Point::new(50.0, 20.0));
        assert_eq!(defaults.initial_tint, settings.initial_tint);
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(load_or_default(&BrokenStore), Settings::default());
    }
}
