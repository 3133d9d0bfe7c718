//! Undo history shared by freehand strokes and placed items.
//!
//! One stack records both kinds of action in the order they happened, so a
//! single undo always reverts the most recent action whatever its kind.
//! Strokes are undone by the canvas; items are flagged for animated removal.

use crate::canvas::StrokeCanvas;
use crate::draggable::{DraggableCollection, ItemId};
use serde::{Deserialize, Serialize};

/// Maximum number of entries to keep.
const MAX_HISTORY: usize = 200;

/// One undoable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryEntry {
    /// A finished freehand stroke.
    Stroke,
    /// An item placed on the canvas.
    Draggable { item_id: ItemId },
    /// An entry whose kind this build does not know (from a saved history).
    #[serde(other)]
    Unknown,
}

/// Whether there is anything to undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    Idle,
    HasEntries,
}

/// What an `undo` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The stack was empty.
    Nothing,
    /// The canvas was asked to undo its last stroke.
    Stroke,
    /// The item was flagged for removal.
    DraggableMarked(ItemId),
    /// The item was already gone or already flagged.
    DraggableMissing(ItemId),
    /// An unrecognised entry was discarded.
    Dropped,
}

/// Chronological stack of undoable actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionHistory {
    entries: Vec<HistoryEntry>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
        }
    }

    pub fn record_stroke(&mut self) {
        self.push(HistoryEntry::Stroke);
    }

    pub fn record_draggable_placement(&mut self, item_id: ItemId) {
        self.push(HistoryEntry::Draggable { item_id });
    }

    /// Revert the most recent action.
    pub fn undo(
        &mut self,
        canvas: &mut dyn StrokeCanvas,
        items: &mut DraggableCollection,
    ) -> UndoOutcome {
        let Some(entry) = self.entries.pop() else {
            return UndoOutcome::Nothing;
        };
        match entry {
            HistoryEntry::Stroke => {
                canvas.undo();
                UndoOutcome::Stroke
            }
            HistoryEntry::Draggable { item_id } => {
                if items.mark_for_deferred_removal(item_id) {
                    UndoOutcome::DraggableMarked(item_id)
                } else {
                    log::debug!("Undo skipped: item {} already removed", item_id);
                    UndoOutcome::DraggableMissing(item_id)
                }
            }
            HistoryEntry::Unknown => {
                log::warn!("Dropping history entry of unknown kind");
                UndoOutcome::Dropped
            }
        }
    }

    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.is_empty()
    }

    pub fn state(&self) -> HistoryState {
        if self.entries.is_empty() {
            HistoryState::Idle
        } else {
            HistoryState::HasEntries
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON. Unknown entry kinds are kept as `Unknown`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
