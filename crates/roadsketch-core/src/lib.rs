//! Roadsketch Core Library
//!
//! Platform-agnostic interaction core for the roadsketch trainer: draggable
//! road-element overlays, their radial popout menus, and the undo history
//! shared between freehand strokes and placed elements.

pub mod animation;
pub mod canvas;
pub mod color;
pub mod draggable;
pub mod geometry;
pub mod history;
pub mod palette;
pub mod pen;
pub mod settings;
pub mod sketch;

pub use animation::Spring;
pub use canvas::{RecordingCanvas, StrokeCanvas};
pub use color::{
    SerializableColor, Tint, DEFAULT_DRAGGABLE_COLOR, DEFAULT_PEN_COLOR, DEFAULT_POPOUT_TINTS,
    DRAGGABLE_COLORS, PEN_COLORS,
};
pub use draggable::{
    DraggableCollection, DraggableDefaults, DraggableItem, GestureDelta, ItemId, ItemRequest,
    PopoutMenu, PopoutOption, Transform,
};
pub use geometry::{popout_layout, popout_offset, ARC_SPAN_DEGREES};
pub use history::{ActionHistory, HistoryEntry, HistoryState, UndoOutcome};
pub use palette::{ImageSource, RoadElement, Scenario};
pub use pen::{Pen, PenKind, PENCIL_SIZES};
pub use settings::{Settings, SettingsError, SettingsResult, SettingsStore, Theme};
pub use sketch::{SceneSnapshot, Sketch};
