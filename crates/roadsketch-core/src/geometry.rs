//! Radial placement of popout menu options around an anchor.
//!
//! Options sit on a partial arc inside a `2r x 2r` box whose centre is the
//! anchor. Offsets are measured from the top-left corner of that box.

use kurbo::{Point, Rect, Vec2};
use std::f64::consts::PI;

/// Angular span of the popout arc, in degrees.
pub const ARC_SPAN_DEGREES: f64 = 150.0;

/// Degrees in a half turn (used to convert the span to radians).
const HALF_TURN_DEGREES: f64 = 180.0;

/// Angle (radians) of option `index` out of `count`.
fn option_angle(count: usize, index: usize) -> f64 {
    (ARC_SPAN_DEGREES / count as f64) * (index as f64 + 1.0) * (PI / HALF_TURN_DEGREES)
}

/// Offset of option `index` out of `count` on an arc of `radius`.
///
/// Returns `None` when `count` is zero or `index` is out of range.
pub fn popout_offset(count: usize, index: usize, radius: f64) -> Option<Point> {
    if count == 0 || index >= count {
        return None;
    }
    let theta = option_angle(count, index);
    Some(Point::new(
        radius - radius * theta.sin(),
        radius - radius * theta.cos(),
    ))
}

/// Offsets for every option, in option order.
pub fn popout_layout(count: usize, radius: f64) -> Vec<Point> {
    (0..count)
        .filter_map(|index| popout_offset(count, index, radius))
        .collect()
}

/// The box a popout is laid out in, centred on `anchor`.
pub fn bounding_box(anchor: Point, radius: f64) -> Rect {
    Rect::from_center_size(anchor, (radius * 2.0, radius * 2.0))
}

/// Convert a box-relative offset into an absolute canvas point.
pub fn to_canvas(anchor: Point, radius: f64, offset: Point) -> Point {
    let origin = bounding_box(anchor, radius).origin();
    origin + Vec2::new(offset.x, offset.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_seven_options_first_and_last() {
        let first = popout_offset(7, 0, 100.0).unwrap();
        assert!(approx(first.x, 63.465_897_563_360_5));
        assert!(approx(first.y, 6.912_625_135_579_575));

        let last = popout_offset(7, 6, 100.0).unwrap();
        assert!(approx(last.x, 50.0));
        assert!(approx(last.y, 186.602_540_378_443_88));
    }

    #[test]
    fn test_arc_is_not_mirrored() {
        let first = popout_offset(7, 0, 100.0).unwrap();
        let last = popout_offset(7, 6, 100.0).unwrap();
        assert!(!approx(first.x, last.x));
        assert!(!approx(first.y, 200.0 - last.y));
    }

    #[test]
    fn test_deterministic() {
        for n in 1..10 {
            for i in 0..n {
                let a = popout_offset(n, i, 42.0);
                let b = popout_offset(n, i, 42.0);
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn test_single_option() {
        let only = popout_offset(1, 0, 50.0).unwrap();
        assert!(approx(only.x, 25.0));
        assert!(approx(only.y, 93.301_270_189_221_94));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(popout_offset(0, 0, 10.0), None);
        assert_eq!(popout_offset(3, 3, 10.0), None);
        assert!(popout_layout(0, 10.0).is_empty());
    }

    #[test]
    fn test_offsets_stay_in_box() {
        let radius = 60.0;
        for offset in popout_layout(7, radius) {
            assert!(offset.x >= 0.0 && offset.x <= 2.0 * radius);
            assert!(offset.y >= 0.0 && offset.y <= 2.0 * radius);
        }
    }

    #[test]
    fn test_to_canvas() {
        let anchor = Point::new(200.0, 300.0);
        let p = to_canvas(anchor, 50.0, Point::new(50.0, 0.0));
        assert!(approx(p.x, 200.0));
        assert!(approx(p.y, 250.0));
    }
}
