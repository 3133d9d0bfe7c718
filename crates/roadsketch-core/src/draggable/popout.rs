//! Radial popout menu attached to a draggable item.

use crate::animation::Spring;
use crate::color::Tint;
use crate::geometry;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One selectable entry of a popout menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopoutOption {
    /// Retint the owning item (`Tint::None` resets it).
    Tint(Tint),
    /// Remove the owning item.
    Delete,
    /// Close the menu.
    Exit,
}

/// Radial menu of tints plus delete and exit.
///
/// `active` alone decides visibility and whether options can be chosen.
/// The scale spring follows it and is only read by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "PopoutMenuData")]
pub struct PopoutMenu {
    options: Vec<PopoutOption>,
    active: bool,
    #[serde(skip)]
    scale: Spring,
}

/// Persisted part of a menu; the spring is rebuilt from `active`.
#[derive(Deserialize)]
struct PopoutMenuData {
    options: Vec<PopoutOption>,
    active: bool,
}

impl From<PopoutMenuData> for PopoutMenu {
    fn from(data: PopoutMenuData) -> Self {
        let mut options = data.options;
        if options.is_empty() {
            options = vec![PopoutOption::Delete, PopoutOption::Exit];
        }
        Self {
            options,
            active: data.active,
            scale: Spring::at(if data.active { 1.0 } else { 0.0 }),
        }
    }
}

impl PopoutMenu {
    /// Build a closed menu offering `tints`, followed by delete and exit.
    ///
    /// The menu is never empty: delete and exit are always present.
    pub fn new(tints: impl IntoIterator<Item = Tint>) -> Self {
        let mut options: Vec<PopoutOption> = tints.into_iter().map(PopoutOption::Tint).collect();
        options.push(PopoutOption::Delete);
        options.push(PopoutOption::Exit);
        Self {
            options,
            active: false,
            scale: Spring::at(0.0),
        }
    }

    /// All options in display order.
    pub fn options(&self) -> &[PopoutOption] {
        &self.options
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false; kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Whether the menu is shown.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Visual scale, 0 hidden to 1 shown (springs may overshoot slightly).
    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    /// Show or hide the menu and retarget its transition.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        self.scale.set_target(if active { 1.0 } else { 0.0 });
    }

    /// Show the menu.
    pub fn open(&mut self) {
        self.set_active(true);
    }

    /// Hide the menu.
    pub fn close(&mut self) {
        self.set_active(false);
    }

    pub fn toggle(&mut self) {
        self.set_active(!self.active);
    }

    /// Choose the option at `index`.
    ///
    /// A hidden menu cannot be chosen from. Every choice closes the menu;
    /// the owning item applies tint and delete.
    pub fn select(&mut self, index: usize) -> Option<PopoutOption> {
        if !self.active {
            return None;
        }
        let option = *self.options.get(index)?;
        self.close();
        Some(option)
    }

    /// Option offsets within the `2r x 2r` box around the anchor.
    pub fn layout(&self, radius: f64) -> Vec<(PopoutOption, Point)> {
        self.options
            .iter()
            .copied()
            .zip(geometry::popout_layout(self.options.len(), radius))
            .collect()
    }

    /// Option positions on the canvas for a menu centred on `anchor`.
    pub fn layout_at(&self, anchor: Point, radius: f64) -> Vec<(PopoutOption, Point)> {
        self.layout(radius)
            .into_iter()
            .map(|(option, offset)| (option, geometry::to_canvas(anchor, radius, offset)))
            .collect()
    }

    /// Advance the show/hide transition.
    pub fn animate(&mut self, dt: f64) {
        self.scale.step(dt);
    }

    /// Finish the show/hide transition immediately.
    pub fn finish_animation(&mut self) {
        self.scale.settle();
    }
}

impl Default for PopoutMenu {
    fn default() -> Self {
        Self::new(crate::color::DEFAULT_POPOUT_TINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::DEFAULT_POPOUT_TINTS;

    #[test]
    fn test_options_end_with_delete_and_exit() {
        let menu = PopoutMenu::default();
        assert_eq!(menu.len(), 8);
        assert_eq!(menu.options()[0], PopoutOption::Tint(DEFAULT_POPOUT_TINTS[0]));
        assert_eq!(menu.options()[5], PopoutOption::Tint(Tint::None));
        assert_eq!(menu.options()[6], PopoutOption::Delete);
        assert_eq!(menu.options()[7], PopoutOption::Exit);
    }

    #[test]
    fn test_never_empty() {
        let menu = PopoutMenu::new(std::iter::empty());
        assert_eq!(menu.len(), 2);
        assert!(!menu.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut menu = PopoutMenu::default();
        assert!(!menu.is_active());
        menu.toggle();
        assert!(menu.is_active());
        menu.toggle();
        assert!(!menu.is_active());
    }

    #[test]
    fn test_exit_is_hard_close() {
        let mut menu = PopoutMenu::default();
        menu.open();
        menu.finish_animation();
        assert_eq!(menu.scale(), 1.0);

        assert_eq!(menu.select(7), Some(PopoutOption::Exit));
        assert!(!menu.is_active());
        menu.finish_animation();
        assert_eq!(menu.scale(), 0.0);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut menu = PopoutMenu::default();
        menu.open();
        assert_eq!(menu.select(99), None);
        assert!(menu.is_active());
    }

    #[test]
    fn test_hidden_menu_cannot_be_chosen_from() {
        let mut menu = PopoutMenu::default();
        assert_eq!(menu.select(6), None);
        assert_eq!(menu.select(0), None);
        assert!(!menu.is_active());
    }

    #[test]
    fn test_rapid_toggle_lands_on_active_flag() {
        let mut menu = PopoutMenu::default();
        for _ in 0..9 {
            menu.toggle();
            menu.animate(crate::animation::FRAME_DT);
        }
        assert!(menu.is_active());
        menu.finish_animation();
        assert_eq!(menu.scale(), 1.0);
    }

    #[test]
    fn test_deserialized_menu_follows_active() {
        let mut menu = PopoutMenu::default();
        menu.open();
        let json = serde_json::to_string(&menu).unwrap();

        let mut restored: PopoutMenu = serde_json::from_str(&json).unwrap();
        assert!(restored.is_active());
        restored.finish_animation();
        assert_eq!(restored.scale(), 1.0);
        assert_eq!(restored.options(), menu.options());

        restored.close();
        restored.finish_animation();
        assert_eq!(restored.scale(), 0.0);
    }

    #[test]
    fn test_layout_matches_geometry() {
        let menu = PopoutMenu::default();
        let layout = menu.layout(80.0);
        assert_eq!(layout.len(), 8);
        assert_eq!(layout[3].1, geometry::popout_offset(8, 3, 80.0).unwrap());
        assert_eq!(layout[7].0, PopoutOption::Exit);
    }

    #[test]
    fn test_layout_at_anchor() {
        let menu = PopoutMenu::default();
        let anchor = Point::new(300.0, 200.0);
        let absolute = menu.layout_at(anchor, 100.0);
        let offset = geometry::popout_offset(8, 0, 100.0).unwrap();
        assert_eq!(absolute[0].1, Point::new(200.0 + offset.x, 100.0 + offset.y));
    }
}
