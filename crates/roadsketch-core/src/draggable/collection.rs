//! Owner of every placed item.

use super::item::{DraggableItem, ItemId};
use crate::color::{Tint, DEFAULT_POPOUT_TINTS};
use crate::palette::ImageSource;
use kurbo::{Point, Size};
use std::collections::HashMap;

/// Values new items are created with.
///
/// Passed in explicitly from the session settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DraggableDefaults {
    /// Where new items are centred (normally the viewport centre).
    pub anchor: Point,
    pub initial_tint: Tint,
    /// Tints offered by each item's popout.
    pub popout_tints: Vec<Tint>,
}

impl DraggableDefaults {
    /// Defaults centred in a viewport of `viewport` size.
    pub fn centered(viewport: Size, initial_tint: Tint) -> Self {
        Self {
            anchor: viewport.to_rect().center(),
            initial_tint,
            popout_tints: DEFAULT_POPOUT_TINTS.to_vec(),
        }
    }
}

impl Default for DraggableDefaults {
    fn default() -> Self {
        Self {
            anchor: Point::ZERO,
            initial_tint: Tint::None,
            popout_tints: DEFAULT_POPOUT_TINTS.to_vec(),
        }
    }
}

/// Placed items keyed by id, with back-to-front z-order.
///
/// Removal is two-phase when animated: `mark_for_deferred_removal` flags the
/// item so the renderer can play its exit, then `remove` or `purge_marked`
/// drops it.
#[derive(Debug, Clone, Default)]
pub struct DraggableCollection {
    items: HashMap<ItemId, DraggableItem>,
    z_order: Vec<ItemId>,
    defaults: DraggableDefaults,
}

impl DraggableCollection {
    pub fn new(defaults: DraggableDefaults) -> Self {
        Self {
            items: HashMap::new(),
            z_order: Vec::new(),
            defaults,
        }
    }

    pub fn defaults(&self) -> &DraggableDefaults {
        &self.defaults
    }

    /// Re-centre the placement anchor after a viewport change.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.defaults.anchor = viewport.to_rect().center();
    }

    /// Place a new item at the default anchor and return its id.
    pub fn add(&mut self, image: ImageSource) -> ItemId {
        let item = DraggableItem::new(
            image,
            self.defaults.initial_tint,
            self.defaults.anchor,
            &self.defaults.popout_tints,
        );
        let id = item.id();
        log::debug!("Placed {} as {}", item.image().key(), id);
        self.z_order.push(id);
        self.items.insert(id, item);
        id
    }

    /// Remove an item. Absent ids are ignored.
    pub fn remove(&mut self, id: ItemId) -> Option<DraggableItem> {
        let removed = self.items.remove(&id)?;
        self.z_order.retain(|&item_id| item_id != id);
        log::debug!("Removed {}", id);
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.z_order.clear();
    }

    /// Flag an item for removal once its exit animation has played.
    ///
    /// Returns false if the item is absent or already flagged.
    pub fn mark_for_deferred_removal(&mut self, id: ItemId) -> bool {
        match self.items.get_mut(&id) {
            Some(item) if !item.is_pending_removal() => {
                item.set_pending_removal();
                log::debug!("Marked {} for removal", id);
                true
            }
            _ => false,
        }
    }

    /// Items flagged for removal, back to front.
    pub fn pending_removals(&self) -> Vec<ItemId> {
        self.items_ordered()
            .filter(|item| item.is_pending_removal())
            .map(|item| item.id())
            .collect()
    }

    /// Drop every flagged item. Returns the removed ids, back to front.
    pub fn purge_marked(&mut self) -> Vec<ItemId> {
        let pending = self.pending_removals();
        for &id in &pending {
            self.remove(id);
        }
        pending
    }

    pub fn get(&self, id: ItemId) -> Option<&DraggableItem> {
        self.items.get(&id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut DraggableItem> {
        self.items.get_mut(&id)
    }

    /// An item that can still be interacted with (not flagged for removal).
    pub fn get_live_mut(&mut self, id: ItemId) -> Option<&mut DraggableItem> {
        self.items.get_mut(&id).filter(|item| !item.is_pending_removal())
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Items in z-order (back to front).
    pub fn items_ordered(&self) -> impl Iterator<Item = &DraggableItem> {
        self.z_order.iter().filter_map(|id| self.items.get(id))
    }

    pub fn ids(&self) -> &[ItemId] {
        &self.z_order
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move an item to the top of the stack.
    pub fn bring_to_front(&mut self, id: ItemId) {
        if self.items.contains_key(&id) {
            self.z_order.retain(|&item_id| item_id != id);
            self.z_order.push(id);
        }
    }

    /// Topmost live item under `point`.
    pub fn item_at(&self, point: Point, tolerance: f64) -> Option<ItemId> {
        self.z_order
            .iter()
            .rev()
            .filter_map(|id| self.items.get(id))
            .find(|item| !item.is_pending_removal() && item.hit_test(point, tolerance))
            .map(|item| item.id())
    }

    /// Close every open popout. Returns how many were open.
    pub fn close_all_popouts(&mut self) -> usize {
        let mut closed = 0;
        for item in self.items.values_mut() {
            if item.popout_open() {
                item.close_popout();
                closed += 1;
            }
        }
        closed
    }

    pub fn any_popout_active(&self) -> bool {
        self.items.values().any(|item| item.popout_open())
    }

    /// Advance every item's transitions.
    pub fn animate(&mut self, dt: f64) {
        for item in self.items.values_mut() {
            item.animate(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn collection() -> DraggableCollection {
        DraggableCollection::new(DraggableDefaults::centered(Size::new(800.0, 600.0), Tint::None))
    }

    #[test]
    fn test_add_uses_anchor() {
        let mut items = collection();
        let id = items.add(ImageSource::new("stop"));
        let item = items.get(id).unwrap();
        assert_eq!(item.transform.position, Point::new(400.0, 300.0));
        assert_eq!(item.tint(), Tint::None);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_ids_never_reused() {
        let mut items = collection();
        let mut seen = HashSet::new();
        for _ in 0..50 {
            let id = items.add(ImageSource::new("stop"));
            assert!(seen.insert(id));
            items.remove(id);
        }
        assert!(items.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut items = collection();
        let id = items.add(ImageSource::new("zebra"));
        assert!(items.remove(id).is_some());
        assert!(items.remove(id).is_none());
        assert!(items.is_empty());
    }

    #[test]
    fn test_deferred_removal() {
        let mut items = collection();
        let a = items.add(ImageSource::new("stop"));
        let b = items.add(ImageSource::new("give_way"));
        items.get_mut(a).unwrap().on_long_press();

        assert!(items.mark_for_deferred_removal(a));
        assert!(!items.mark_for_deferred_removal(a));
        assert!(!items.get(a).unwrap().popout_open());
        assert_eq!(items.pending_removals(), vec![a]);
        assert!(items.get_live_mut(a).is_none());
        assert!(items.contains(a));

        assert_eq!(items.purge_marked(), vec![a]);
        assert!(!items.contains(a));
        assert!(items.contains(b));
        assert!(items.purge_marked().is_empty());
    }

    #[test]
    fn test_mark_absent() {
        let mut items = collection();
        assert!(!items.mark_for_deferred_removal(ItemId::new_v4()));
    }

    #[test]
    fn test_z_order_and_hit() {
        let mut items = collection();
        let a = items.add(ImageSource::new("stop"));
        let b = items.add(ImageSource::new("give_way"));
        let center = Point::new(400.0, 300.0);

        assert_eq!(items.item_at(center, 0.0), Some(b));
        items.bring_to_front(a);
        assert_eq!(items.ids(), &[b, a]);
        assert_eq!(items.item_at(center, 0.0), Some(a));

        items.mark_for_deferred_removal(a);
        assert_eq!(items.item_at(center, 0.0), Some(b));
        assert_eq!(items.item_at(Point::ZERO, 0.0), None);
    }

    #[test]
    fn test_close_all_popouts() {
        let mut items = collection();
        let a = items.add(ImageSource::new("stop"));
        let b = items.add(ImageSource::new("give_way"));
        items.get_mut(a).unwrap().on_long_press();
        items.get_mut(b).unwrap().on_long_press();
        assert!(items.any_popout_active());
        assert_eq!(items.close_all_popouts(), 2);
        assert!(!items.any_popout_active());
    }

    #[test]
    fn test_clear() {
        let mut items = collection();
        items.add(ImageSource::new("stop"));
        items.add(ImageSource::new("stop"));
        items.clear();
        assert!(items.is_empty());
        assert!(items.ids().is_empty());
    }

    #[test]
    fn test_set_viewport_recenters() {
        let mut items = collection();
        items.set_viewport(Size::new(200.0, 100.0));
        let id = items.add(ImageSource::new("stop"));
        assert_eq!(items.get(id).unwrap().transform.position, Point::new(100.0, 50.0));
    }
}
