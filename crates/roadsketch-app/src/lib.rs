//! Roadsketch headless driver
//!
//! Scripts are JSON arrays of events, applied in order to a session over a
//! `RecordingCanvas`. Placed items are addressed by placement order.

use kurbo::Size;
use roadsketch_core::{
    GestureDelta, ImageSource, ItemId, RecordingCanvas, RoadElement, Scenario, SceneSnapshot,
    SerializableColor, Settings, Sketch, Theme, Tint, UndoOutcome,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Viewport used for headless sessions.
pub const DEFAULT_VIEWPORT: Size = Size::new(1080.0, 1920.0);

/// Driver errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("Unknown road element: {0}")]
    UnknownElement(String),
    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),
    #[error("Invalid color: {0}")]
    InvalidColor(String),
    #[error("IO error: {0}")]
    Io(String),
}

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Place a palette element by key.
    Place { element: String },
    /// Draw one complete freehand stroke.
    Stroke,
    LongPress { item: usize },
    /// Drag an item by an offset (start, pan, end).
    Drag { item: usize, dx: f64, dy: f64 },
    /// Raw gesture update on an item.
    Gesture {
        item: usize,
        #[serde(flatten)]
        delta: GestureDelta,
    },
    /// Choose a popout option by index.
    Select { item: usize, option: usize },
    /// Retint an item with a hex color or `none`.
    Tint { item: usize, color: String },
    Delete { item: usize },
    Undo,
    /// The renderer finished exit animations.
    Purge,
    Scenario { name: String },
    /// Delete every stroke and item, keeping the scenario.
    ClearAll,
    Eraser,
    Pencil,
    /// Pick a pencil color by hex.
    PenColor { color: String },
    PencilSize { size: f64 },
    Animate { seconds: f64 },
}

/// Result of a replayed script.
#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub theme: Theme,
    /// Strokes left on the canvas.
    pub strokes: usize,
    pub undo_outcomes: Vec<String>,
    pub scene: SceneSnapshot,
}

/// Applies events to a session, tracking placement order.
pub struct Driver {
    sketch: Sketch<RecordingCanvas>,
    placed: Vec<ItemId>,
    undo_outcomes: Vec<String>,
}

impl Driver {
    pub fn new(settings: Settings) -> Self {
        Self {
            sketch: Sketch::new(RecordingCanvas::new(), settings, DEFAULT_VIEWPORT),
            placed: Vec::new(),
            undo_outcomes: Vec::new(),
        }
    }

    /// The session being driven.
    pub fn sketch(&self) -> &Sketch<RecordingCanvas> {
        &self.sketch
    }

    fn item(&self, index: usize) -> Option<ItemId> {
        let id = self.placed.get(index).copied();
        if id.is_none() {
            log::warn!("Script refers to item {} which was never placed", index);
        }
        id
    }

    pub fn apply(&mut self, event: SessionEvent) -> Result<(), AppError> {
        log::debug!("Applying {:?}", event);
        match event {
            SessionEvent::Place { element } => {
                let element = RoadElement::by_key(&element)
                    .ok_or(AppError::UnknownElement(element))?;
                let id = self.sketch.place(ImageSource::from(element));
                self.placed.push(id);
            }
            SessionEvent::Stroke => {
                self.sketch.stroke_started();
                self.sketch.canvas_mut().commit_stroke();
                self.sketch.stroke_ended();
            }
            SessionEvent::LongPress { item } => {
                if let Some(id) = self.item(item) {
                    self.sketch.long_press(id);
                }
            }
            SessionEvent::Drag { item, dx, dy } => {
                if let Some(id) = self.item(item) {
                    self.sketch.drag_start(id);
                    self.sketch.gesture(id, GestureDelta::pan(dx, dy));
                    self.sketch.drag_end(id);
                }
            }
            SessionEvent::Gesture { item, delta } => {
                if let Some(id) = self.item(item) {
                    self.sketch.gesture(id, delta);
                }
            }
            SessionEvent::Select { item, option } => {
                if let Some(id) = self.item(item) {
                    self.sketch.select_option(id, option);
                }
            }
            SessionEvent::Tint { item, color } => {
                let tint = Tint::parse(&color).ok_or(AppError::InvalidColor(color))?;
                if let Some(id) = self.item(item) {
                    self.sketch.set_tint(id, tint);
                }
            }
            SessionEvent::Delete { item } => {
                if let Some(id) = self.item(item) {
                    self.sketch.delete(id);
                }
            }
            SessionEvent::Undo => {
                let outcome = self.sketch.undo();
                self.undo_outcomes.push(describe(outcome));
            }
            SessionEvent::Purge => {
                self.sketch.purge();
            }
            SessionEvent::Scenario { name } => {
                let scenario = Scenario::from_key(&name).ok_or(AppError::UnknownScenario(name))?;
                if self.sketch.set_scenario(scenario) && self.sketch.settings().delete_on_change {
                    self.placed.clear();
                }
            }
            SessionEvent::ClearAll => {
                self.sketch.clear_all();
                self.placed.clear();
            }
            SessionEvent::Eraser => self.sketch.use_eraser(),
            SessionEvent::Pencil => self.sketch.use_pencil(),
            SessionEvent::PenColor { color } => {
                let color = SerializableColor::from_hex(&color)
                    .ok_or(AppError::InvalidColor(color))?;
                self.sketch.set_pen_color(color);
            }
            SessionEvent::PencilSize { size } => {
                if !self.sketch.set_pencil_size(size) {
                    log::warn!("Ignoring pencil size {}", size);
                }
            }
            SessionEvent::Animate { seconds } => {
                self.sketch.animate(seconds);
            }
        }
        Ok(())
    }

    pub fn report(&self) -> ReplayReport {
        ReplayReport {
            theme: self.sketch.settings().theme,
            strokes: self.sketch.canvas().stroke_count(),
            undo_outcomes: self.undo_outcomes.clone(),
            scene: self.sketch.snapshot(),
        }
    }
}

fn describe(outcome: UndoOutcome) -> String {
    match outcome {
        UndoOutcome::Nothing => "nothing".to_string(),
        UndoOutcome::Stroke => "stroke".to_string(),
        UndoOutcome::DraggableMarked(id) => format!("removed {}", id),
        UndoOutcome::DraggableMissing(id) => format!("already gone {}", id),
        UndoOutcome::Dropped => "dropped".to_string(),
    }
}

/// Parse a script and replay it on a fresh session.
pub fn replay(json: &str, settings: Settings) -> Result<Driver, AppError> {
    let events: Vec<SessionEvent> = serde_json::from_str(json)?;
    let mut driver = Driver::new(settings);
    for event in events {
        driver.apply(event)?;
    }
    Ok(driver)
}

/// Replay a script and return the report as pretty JSON.
pub fn run_script(json: &str, settings: Settings) -> Result<String, AppError> {
    let driver = replay(json, settings)?;
    Ok(serde_json::to_string_pretty(&driver.report())?)
}
