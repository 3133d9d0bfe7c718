//! Draggable road-element overlays.
//!
//! - `DraggableItem`: one placed icon with its transform, tint and popout
//! - `PopoutMenu`: the radial tint/delete/exit menu attached to an item
//! - `DraggableCollection`: exclusive owner of every placed item
//!
//! Gesture recognition and rendering live outside the core; items only hold
//! the logical state those collaborators read and drive.

mod collection;
mod item;
mod popout;

pub use collection::{DraggableCollection, DraggableDefaults};
pub use item::{DraggableItem, GestureDelta, ItemId, ItemRequest, Transform, ICON_SIZE, LIFT_SCALE};
pub use popout::{PopoutMenu, PopoutOption};
