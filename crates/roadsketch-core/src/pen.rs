//! Freehand pen: pencil or eraser, and the brush each one draws with.

use crate::color::SerializableColor;
use serde::{Deserialize, Serialize};

/// Pencil width used until the user picks another.
pub const DEFAULT_PENCIL_SIZE: f64 = 5.0;

/// Pencil widths offered by the size picker.
pub const PENCIL_SIZES: [f64; 3] = [5.0, 8.0, 11.0];

/// Eraser widths offered in settings.
pub const ERASER_SIZES: [f64; 6] = [50.0, 60.0, 70.0, 80.0, 90.0, 100.0];

/// Default eraser width.
pub const DEFAULT_ERASER_SIZE: f64 = 80.0;

/// Which end of the pen is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenKind {
    #[default]
    Pencil,
    Eraser,
}

/// Current pen and the pencil choices kept while erasing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    kind: PenKind,
    /// Chosen pencil color.
    color: SerializableColor,
    /// Chosen pencil width.
    size: f64,
    eraser_size: f64,
}

impl Pen {
    /// A pencil with the default width.
    pub fn new(color: SerializableColor, eraser_size: f64) -> Self {
        Self {
            kind: PenKind::Pencil,
            color,
            size: DEFAULT_PENCIL_SIZE,
            eraser_size,
        }
    }

    pub fn kind(&self) -> PenKind {
        self.kind
    }

    pub fn is_eraser(&self) -> bool {
        self.kind == PenKind::Eraser
    }

    /// Chosen pencil color, kept while erasing.
    pub fn color(&self) -> SerializableColor {
        self.color
    }

    /// Chosen pencil width, kept while erasing.
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn eraser_size(&self) -> f64 {
        self.eraser_size
    }

    /// Color the canvas should stroke with. The eraser paints transparent.
    pub fn stroke_color(&self) -> SerializableColor {
        match self.kind {
            PenKind::Pencil => self.color,
            PenKind::Eraser => SerializableColor::transparent(),
        }
    }

    /// Width the canvas should stroke with.
    pub fn stroke_width(&self) -> f64 {
        match self.kind {
            PenKind::Pencil => self.size,
            PenKind::Eraser => self.eraser_size,
        }
    }

    pub fn use_eraser(&mut self) {
        self.kind = PenKind::Eraser;
    }

    /// Back to the pencil with the chosen color and width.
    pub fn use_pencil(&mut self) {
        self.kind = PenKind::Pencil;
    }

    /// Switch between pencil and eraser.
    pub fn toggle(&mut self) {
        match self.kind {
            PenKind::Pencil => self.use_eraser(),
            PenKind::Eraser => self.use_pencil(),
        }
    }

    /// Pick a pencil width. Non-positive widths are ignored.
    ///
    /// The eraser keeps its own width, so this only shows once the pencil
    /// is back in use.
    pub fn set_size(&mut self, size: f64) -> bool {
        if !(size.is_finite() && size > 0.0) {
            return false;
        }
        self.size = size;
        true
    }

    /// Pick a pencil color and return to the pencil.
    pub fn set_color(&mut self, color: SerializableColor) {
        self.color = color;
        self.use_pencil();
    }

    pub fn set_eraser_size(&mut self, size: f64) -> bool {
        if !(size.is_finite() && size > 0.0) {
            return false;
        }
        self.eraser_size = size;
        true
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new(crate::color::DEFAULT_PEN_COLOR, DEFAULT_ERASER_SIZE)
    }
}
