//! A single placed road element.

use super::popout::{PopoutMenu, PopoutOption};
use crate::animation::Spring;
use crate::color::Tint;
use crate::palette::ImageSource;
use kurbo::{Affine, Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for placed items.
pub type ItemId = Uuid;

/// Icon edge length at scale 1.0, in canvas units.
pub const ICON_SIZE: f64 = 100.0;

/// Scale multiplier while an item is lifted by a drag.
pub const LIFT_SCALE: f64 = 1.2;

/// Pinch limits for the user-controlled scale.
const MIN_SCALE: f64 = 0.25;
const MAX_SCALE: f64 = 4.0;

/// Position, uniform scale and rotation of an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Centre of the icon.
    pub position: Point,
    pub scale: f64,
    /// Rotation in radians around the centre.
    pub rotation: f64,
}

impl Transform {
    /// Unscaled, unrotated transform centred on `position`.
    pub fn at(position: Point) -> Self {
        Self {
            position,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

/// One gesture update: pan, pinch factor and twist, applied together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureDelta {
    pub translation: Vec2,
    /// Multiplicative scale factor (1.0 = unchanged).
    pub scale: f64,
    /// Rotation delta in radians.
    pub rotation: f64,
}

impl Default for GestureDelta {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl GestureDelta {
    /// A pure translation.
    pub fn pan(dx: f64, dy: f64) -> Self {
        Self {
            translation: Vec2::new(dx, dy),
            ..Self::default()
        }
    }
}

/// What an item asks of its owner after handling input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRequest {
    None,
    /// The owner should remove this item.
    Remove(ItemId),
}

/// A placed, manipulable road-element icon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "DraggableItemData")]
pub struct DraggableItem {
    id: ItemId,
    image: ImageSource,
    tint: Tint,
    pub transform: Transform,
    lifted: bool,
    pending_removal: bool,
    popout: PopoutMenu,
    #[serde(skip)]
    lift: Spring,
}

/// Persisted part of an item; the lift spring is rebuilt from `lifted`.
#[derive(Deserialize)]
struct DraggableItemData {
    id: ItemId,
    image: ImageSource,
    tint: Tint,
    transform: Transform,
    lifted: bool,
    pending_removal: bool,
    popout: PopoutMenu,
}

impl From<DraggableItemData> for DraggableItem {
    fn from(data: DraggableItemData) -> Self {
        Self {
            id: data.id,
            image: data.image,
            tint: data.tint,
            transform: data.transform,
            lifted: data.lifted,
            pending_removal: data.pending_removal,
            popout: data.popout,
            lift: lift_spring(data.lifted),
        }
    }
}

fn lift_spring(lifted: bool) -> Spring {
    Spring::at(if lifted { LIFT_SCALE } else { 1.0 })
}

impl DraggableItem {
    /// Create a new item centred on `anchor`, with its popout closed.
    pub fn new(
        image: ImageSource,
        initial_tint: Tint,
        anchor: Point,
        popout_tints: &[Tint],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            tint: initial_tint,
            transform: Transform::at(anchor),
            lifted: false,
            pending_removal: false,
            popout: PopoutMenu::new(popout_tints.iter().copied()),
            lift: lift_spring(false),
        }
    }

    /// Identifier assigned at placement.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Icon asset chosen at placement.
    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    /// Current tint.
    pub fn tint(&self) -> Tint {
        self.tint
    }

    /// Whether a drag is holding the item up.
    pub fn is_lifted(&self) -> bool {
        self.lifted
    }

    /// Whether the item is waiting for its exit animation.
    pub fn is_pending_removal(&self) -> bool {
        self.pending_removal
    }

    pub(crate) fn set_pending_removal(&mut self) {
        self.pending_removal = true;
        self.lifted = false;
        self.popout.close();
    }

    /// The attached popout menu.
    pub fn popout(&self) -> &PopoutMenu {
        &self.popout
    }

    /// Whether the popout is shown.
    pub fn popout_open(&self) -> bool {
        self.popout.is_active()
    }

    /// Close the popout without any other effect.
    pub fn close_popout(&mut self) {
        self.popout.close();
    }

    /// Lift the item and force its popout closed.
    pub fn on_drag_start(&mut self) {
        self.lifted = true;
        self.lift.set_target(LIFT_SCALE);
        self.popout.close();
    }

    /// Drop the item back to its resting scale.
    pub fn on_drag_end(&mut self) {
        self.lifted = false;
        self.lift.set_target(1.0);
    }

    /// Apply a pan/pinch/rotate update from the gesture recognizer.
    pub fn apply_gesture(&mut self, delta: GestureDelta) {
        if delta.translation.is_finite() {
            self.transform.position += delta.translation;
        }
        if delta.scale.is_finite() && delta.scale > 0.0 {
            let scale = self.transform.scale * delta.scale;
            self.transform.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        }
        if delta.rotation.is_finite() {
            self.transform.rotation += delta.rotation;
        }
    }

    /// Toggle the popout.
    pub fn on_long_press(&mut self) {
        self.popout.toggle();
    }

    /// Retint the item. The popout always ends up closed.
    pub fn set_tint(&mut self, tint: Tint) {
        self.tint = tint;
        self.popout.close();
    }

    /// Ask the owner to remove this item.
    pub fn request_removal(&self) -> ItemRequest {
        ItemRequest::Remove(self.id)
    }

    /// Handle a popout choice. Ignored while the popout is closed.
    pub fn select_option(&mut self, index: usize) -> ItemRequest {
        match self.popout.select(index) {
            Some(PopoutOption::Tint(tint)) => {
                self.set_tint(tint);
                ItemRequest::None
            }
            Some(PopoutOption::Delete) => self.request_removal(),
            Some(PopoutOption::Exit) | None => ItemRequest::None,
        }
    }

    /// User scale times the drag lift.
    pub fn display_scale(&self) -> f64 {
        self.transform.scale * self.lift.value()
    }

    /// Icon-local to canvas transform (icon centred on the origin).
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.transform.position.to_vec2())
            * Affine::rotate(self.transform.rotation)
            * Affine::scale(self.display_scale())
    }

    /// Axis-aligned bounds of the rotated icon.
    pub fn bounds(&self) -> Rect {
        let half = ICON_SIZE / 2.0;
        let affine = self.to_affine();
        let corners = [
            Point::new(-half, -half),
            Point::new(half, -half),
            Point::new(half, half),
            Point::new(-half, half),
        ];
        let first = affine * corners[0];
        corners[1..]
            .iter()
            .fold(Rect::from_points(first, first), |r, &c| r.union_pt(affine * c))
    }

    /// Check if a canvas point hits the (rotated) icon.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let scale = self.display_scale();
        if scale <= 0.0 {
            return false;
        }
        let local = self.to_affine().inverse() * point;
        let half = ICON_SIZE / 2.0 + tolerance / scale;
        local.x.abs() <= half && local.y.abs() <= half
    }

    /// Advance lift and popout transitions.
    pub fn animate(&mut self, dt: f64) {
        self.lift.step(dt);
        self.popout.animate(dt);
    }

    /// Finish every running transition.
    pub fn finish_animations(&mut self) {
        self.lift.settle();
        self.popout.finish_animation();
    }
}
