//! A sketching session: canvas, placed items and their shared history.
//!
//! Every placement is recorded in the history, so undo reverts placements
//! and strokes alike in the order they happened.

use crate::canvas::StrokeCanvas;
use crate::color::{SerializableColor, Tint};
use crate::draggable::{
    DraggableCollection, DraggableItem, GestureDelta, ItemId, ItemRequest, PopoutOption,
};
use crate::history::{ActionHistory, UndoOutcome};
use crate::palette::{ImageSource, Scenario};
use crate::pen::Pen;
use crate::settings::Settings;
use kurbo::{Point, Size};
use serde::Serialize;

/// Serializable view of a session, for inspection and export.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub scenario: Scenario,
    pub pen: Pen,
    /// Items back to front.
    pub items: Vec<DraggableItem>,
    pub history: ActionHistory,
}

/// One sketching session over a stroke canvas `C`.
#[derive(Debug)]
pub struct Sketch<C: StrokeCanvas> {
    canvas: C,
    history: ActionHistory,
    items: DraggableCollection,
    scenario: Scenario,
    settings: Settings,
    pen: Pen,
    drawing: bool,
}

impl<C: StrokeCanvas> Sketch<C> {
    /// Start a session on `canvas` with a settings snapshot.
    pub fn new(canvas: C, settings: Settings, viewport: Size) -> Self {
        let items = DraggableCollection::new(settings.draggable_defaults(viewport));
        let mut sketch = Self {
            canvas,
            history: ActionHistory::new(),
            items,
            scenario: settings.last_scenario,
            pen: settings.pen(),
            settings,
            drawing: false,
        };
        sketch.sync_brush();
        sketch
    }

    /// The stroke canvas.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// The stroke canvas, for committing strokes.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Shared undo history.
    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    /// Placed items.
    pub fn items(&self) -> &DraggableCollection {
        &self.items
    }

    /// Look up one placed item.
    pub fn item(&self, id: ItemId) -> Option<&DraggableItem> {
        self.items.get(id)
    }

    /// Current background.
    pub fn scenario(&self) -> Scenario {
        self.scenario
    }

    /// Settings snapshot, including the scenario to reopen.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Current pen.
    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Re-centre the placement anchor.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.items.set_viewport(viewport);
    }

    /// Place a palette element and record it for undo.
    pub fn place(&mut self, image: ImageSource) -> ItemId {
        let id = self.items.add(image);
        self.history.record_draggable_placement(id);
        id
    }

    /// A stroke began: popouts are hidden while drawing.
    pub fn stroke_started(&mut self) {
        self.drawing = true;
        self.items.close_all_popouts();
    }

    /// A stroke was committed by the canvas.
    pub fn stroke_ended(&mut self) {
        self.drawing = false;
        self.history.record_stroke();
    }

    /// Toggle an item's popout. Ignored while a stroke is in progress.
    pub fn long_press(&mut self, id: ItemId) {
        if self.drawing {
            return;
        }
        if let Some(item) = self.items.get_live_mut(id) {
            item.on_long_press();
        }
    }

    pub fn drag_start(&mut self, id: ItemId) {
        if let Some(item) = self.items.get_live_mut(id) {
            item.on_drag_start();
            self.items.bring_to_front(id);
        }
    }

    pub fn drag_end(&mut self, id: ItemId) {
        if let Some(item) = self.items.get_live_mut(id) {
            item.on_drag_end();
        }
    }

    pub fn gesture(&mut self, id: ItemId, delta: GestureDelta) {
        if let Some(item) = self.items.get_live_mut(id) {
            item.apply_gesture(delta);
        }
    }

    pub fn set_tint(&mut self, id: ItemId, tint: Tint) {
        if let Some(item) = self.items.get_live_mut(id) {
            item.set_tint(tint);
        }
    }

    /// Apply the popout option at `index` of an item.
    pub fn select_option(&mut self, id: ItemId, index: usize) {
        let request = match self.items.get_live_mut(id) {
            Some(item) => item.select_option(index),
            None => return,
        };
        if let ItemRequest::Remove(id) = request {
            self.delete(id);
        }
    }

    /// Start removing an item; `purge` finishes it.
    pub fn delete(&mut self, id: ItemId) -> bool {
        self.items.mark_for_deferred_removal(id)
    }

    /// Drop items whose exit animation has finished.
    pub fn purge(&mut self) -> Vec<ItemId> {
        self.items.purge_marked()
    }

    /// Popout option positions on the canvas, or `None` while it is hidden.
    pub fn popout_layout(&self, id: ItemId) -> Option<Vec<(PopoutOption, Point)>> {
        let item = self.items.get(id)?;
        if !item.popout_open() {
            return None;
        }
        let radius = self.settings.popout_radius;
        Some(item.popout().layout_at(item.transform.position, radius))
    }

    /// Switch to the eraser, keeping the pencil choices.
    pub fn use_eraser(&mut self) {
        self.pen.use_eraser();
        self.sync_brush();
    }

    /// Switch back to the pencil with its chosen color and width.
    pub fn use_pencil(&mut self) {
        self.pen.use_pencil();
        self.sync_brush();
    }

    /// Toggle between pencil and eraser.
    pub fn toggle_eraser(&mut self) {
        self.pen.toggle();
        self.sync_brush();
    }

    /// Pick a pencil width.
    pub fn set_pencil_size(&mut self, size: f64) -> bool {
        let changed = self.pen.set_size(size);
        if changed {
            self.sync_brush();
        }
        changed
    }

    /// Pick a pencil color. Also remembered in the settings.
    pub fn set_pen_color(&mut self, color: SerializableColor) {
        self.pen.set_color(color);
        self.settings.pen_color = color;
        self.sync_brush();
    }

    fn sync_brush(&mut self) {
        self.canvas.set_brush(self.pen.stroke_color(), self.pen.stroke_width());
    }

    /// Topmost live item at a canvas point.
    pub fn item_at(&self, point: Point) -> Option<ItemId> {
        self.items.item_at(point, 0.0)
    }

    /// Revert the most recent stroke or placement.
    pub fn undo(&mut self) -> UndoOutcome {
        self.history.undo(&mut self.canvas, &mut self.items)
    }

    /// Switch backgrounds.
    ///
    /// With `delete_on_change` set the new scenario starts from an empty
    /// scene; otherwise strokes, items and history carry over.
    pub fn set_scenario(&mut self, scenario: Scenario) -> bool {
        if scenario == self.scenario {
            return false;
        }
        log::info!("Switching scenario to {}", scenario.key());
        self.scenario = scenario;
        self.settings.last_scenario = scenario;
        if self.settings.delete_on_change {
            self.reset();
        }
        true
    }

    /// Delete everything the user added, keeping the scenario.
    pub fn clear_all(&mut self) {
        log::debug!("Clearing sketch");
        self.reset();
    }

    /// Clear canvas, items and history.
    pub fn reset(&mut self) {
        self.canvas.clear();
        self.history.clear_all();
        self.items.clear();
        self.drawing = false;
    }

    /// Advance all transitions.
    pub fn animate(&mut self, dt: f64) {
        self.items.animate(dt);
    }

    /// Serializable view of the current scene.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            scenario: self.scenario,
            pen: self.pen,
            items: self.items.items_ordered().cloned().collect(),
            history: self.history.clone(),
        }
    }
}
