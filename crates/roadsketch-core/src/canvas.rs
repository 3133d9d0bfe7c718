//! Contract with the freehand stroke canvas.
//!
//! The stroke renderer lives outside the core. The core clears it on scene
//! reset, steps it back one stroke on undo and tells it which brush to use.

use crate::color::SerializableColor;

/// Operations the core needs from the freehand canvas.
pub trait StrokeCanvas {
    /// Use this color and width for the next strokes.
    fn set_brush(&mut self, color: SerializableColor, width: f64);

    /// Erase every stroke.
    fn clear(&mut self);

    /// Remove the most recent stroke. No-op when empty.
    fn undo(&mut self);
}

/// In-memory canvas that only counts strokes.
///
/// Used by the headless driver and in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingCanvas {
    brush: Option<(SerializableColor, f64)>,
    strokes: usize,
    undos: usize,
    clears: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a finished stroke.
    pub fn commit_stroke(&mut self) {
        self.strokes += 1;
    }

    /// Strokes currently on the canvas.
    pub fn stroke_count(&self) -> usize {
        self.strokes
    }

    /// Number of effective undo calls received.
    pub fn undo_count(&self) -> usize {
        self.undos
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    /// Last brush set, if any.
    pub fn brush(&self) -> Option<(SerializableColor, f64)> {
        self.brush
    }
}

impl StrokeCanvas for RecordingCanvas {
    fn set_brush(&mut self, color: SerializableColor, width: f64) {
        self.brush = Some((color, width));
    }

    fn clear(&mut self) {
        self.strokes = 0;
        self.clears += 1;
    }

    fn undo(&mut self) {
        if self.strokes > 0 {
            self.strokes -= 1;
            self.undos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_empty_canvas() {
        let mut canvas = RecordingCanvas::new();
        canvas.undo();
        assert_eq!(canvas.stroke_count(), 0);
        assert_eq!(canvas.undo_count(), 0);
    }

    #[test]
    fn test_commit_undo_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.commit_stroke();
        canvas.commit_stroke();
        canvas.undo();
        assert_eq!(canvas.stroke_count(), 1);
        canvas.clear();
        assert_eq!(canvas.stroke_count(), 0);
        assert_eq!(canvas.clear_count(), 1);
    }

    #[test]
    fn test_brush() {
        let mut canvas = RecordingCanvas::new();
        assert_eq!(canvas.brush(), None);
        canvas.set_brush(SerializableColor::black(), 5.0);
        assert_eq!(canvas.brush(), Some((SerializableColor::black(), 5.0)));
    }
}
