//! Pure layout arithmetic — no widget state, no ambient globals.
//!
//! Everything here takes the display scale factor and the measured sizes
//! as explicit arguments so the policies stay unit-testable without a
//! live display context.

use meter_core::Orientation;
use meter_theme::CornerRadii;

/// Units removed from the primary extent: 2 padding + 2 border.
pub const FRAME_INSET: f32 = 4.0;

/// Units reserved in the parent for a header row above vertical bars.
pub const HEADER_RESERVE: f32 = 6.0;

/// Corner radius constants (regular / mini variant).
pub const RADIUS: f32 = 0.2;
pub const RADIUS_MINI: f32 = 0.15;

/// Far-edge tolerance: a segment ending within this many scaled units of
/// the container's far edge still counts as touching it.
pub const ROUNDED_THRESHOLD: f32 = 4.0;
pub const ROUNDED_THRESHOLD_MINI: f32 = 3.0;

/// Per-bar thickness for `num_bars` sharing a fixed cross-axis extent.
///
/// Density heuristic: more bars get proportionally thinner so the padding
/// between them stays legible.
#[must_use]
pub fn bar_thickness(num_bars: usize, axis_size: f32) -> f32 {
    if num_bars > 8 {
        axis_size * 0.5
    } else if num_bars > 2 {
        axis_size * 0.75
    } else {
        axis_size
    }
}

/// Map a usage fraction onto device-independent units along the primary
/// axis of a bar whose usable extent is `size`.
///
/// Values that would render smaller than half a unit collapse to the
/// 1-unit minimum, so any nonzero usage stays visible at high display
/// scale factors. The minimum itself is deliberately not scale-aware;
/// only the ceil branch divides by the scale factor.
#[must_use]
pub fn fill_size(fraction: f32, size: f32, scale_factor: f32) -> f32 {
    let normalized = fraction * size;
    let mut fill = 1.0;
    if normalized >= 0.5 {
        fill = normalized.ceil() / scale_factor;
    }
    if !fill.is_finite() || fill < 1.0 {
        fill = 1.0;
    }
    fill
}

/// Position of a segment that starts `start` units into the stack and
/// fills `fill` units, inside a bar of usable extent `size`.
///
/// Vertical bars grow upward from the baseline, horizontal bars grow
/// rightward from the origin.
#[must_use]
pub fn layer_position(orientation: Orientation, start: f32, fill: f32, size: f32) -> (f32, f32) {
    match orientation {
        Orientation::Vertical => (0.0, size - start - fill),
        Orientation::Horizontal => (start, 0.0),
    }
}

/// Border-rounding policy for one segment of a stacked bar.
///
/// The two corners nearest offset 0 round when the segment starts the
/// stack; the two corners nearest the far edge round when the segment
/// ends within a scale-aware tolerance of it. Interior boundaries stay
/// square.
#[must_use]
pub fn corner_radii(
    start: f32,
    fill: f32,
    total: f32,
    orientation: Orientation,
    mini: bool,
    scale_factor: f32,
) -> CornerRadii {
    let radius = if mini { RADIUS_MINI } else { RADIUS };
    let threshold = if mini {
        ROUNDED_THRESHOLD_MINI
    } else {
        ROUNDED_THRESHOLD
    };

    let mut radii = CornerRadii::SQUARE;

    if start == 0.0 {
        match orientation {
            Orientation::Vertical => {
                radii.bottom_left = radius;
                radii.bottom_right = radius;
            }
            Orientation::Horizontal => {
                radii.top_left = radius;
                radii.bottom_left = radius;
            }
        }
    }

    if total - (start + fill) <= threshold * scale_factor {
        match orientation {
            Orientation::Vertical => {
                radii.top_left = radius;
                radii.top_right = radius;
            }
            Orientation::Horizontal => {
                radii.top_right = radius;
                radii.bottom_right = radius;
            }
        }
    }

    radii
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thickness_density_steps() {
        assert_eq!(bar_thickness(1, 100.0), 100.0);
        assert_eq!(bar_thickness(2, 100.0), 100.0);
        assert_eq!(bar_thickness(3, 100.0), 75.0);
        assert_eq!(bar_thickness(4, 100.0), 75.0);
        assert_eq!(bar_thickness(8, 100.0), 75.0);
        assert_eq!(bar_thickness(9, 100.0), 50.0);
        assert_eq!(bar_thickness(10, 100.0), 50.0);
    }

    #[test]
    fn fill_rounds_up_and_divides_by_scale() {
        assert_eq!(fill_size(0.5, 96.0, 1.0), 48.0);
        assert_eq!(fill_size(0.1, 40.0, 1.0), 4.0);
        // 0.031 * 96 = 2.976 → ceil 3, halved by the scale factor
        assert_eq!(fill_size(0.031, 96.0, 2.0), 1.5);
    }

    #[test]
    fn fill_minimum_is_one_unit() {
        // below the 0.5 rounding threshold
        assert_eq!(fill_size(0.004, 100.0, 1.0), 1.0);
        // nonzero but tiny
        assert_eq!(fill_size(1e-6, 40.0, 1.0), 1.0);
        // zero still produces the minimum (callers hide truly absent layers)
        assert_eq!(fill_size(0.0, 40.0, 1.0), 1.0);
    }

    #[test]
    fn fill_clamps_non_finite() {
        assert_eq!(fill_size(f32::NAN, 96.0, 1.0), 1.0);
        assert_eq!(fill_size(0.5, 96.0, 0.0), 1.0); // inf after division
        assert_eq!(fill_size(f32::INFINITY, 96.0, 1.0), 1.0);
    }

    #[test]
    fn fill_scale_shrinks_below_minimum() {
        // ceil(1.0) / 4.0 = 0.25 → clamped back to the minimum
        assert_eq!(fill_size(0.025, 40.0, 4.0), 1.0);
    }

    #[test]
    fn vertical_grows_upward() {
        assert_eq!(
            layer_position(Orientation::Vertical, 0.0, 48.0, 96.0),
            (0.0, 48.0)
        );
        assert_eq!(
            layer_position(Orientation::Vertical, 48.0, 10.0, 96.0),
            (0.0, 38.0)
        );
    }

    #[test]
    fn horizontal_grows_rightward() {
        assert_eq!(
            layer_position(Orientation::Horizontal, 4.0, 8.0, 40.0),
            (4.0, 0.0)
        );
    }

    #[test]
    fn near_edge_only() {
        let radii = corner_radii(0.0, 10.0, 96.0, Orientation::Vertical, false, 1.0);
        assert_eq!(radii.bottom_left, RADIUS);
        assert_eq!(radii.bottom_right, RADIUS);
        assert_eq!(radii.top_left, 0.0);
        assert_eq!(radii.top_right, 0.0);
    }

    #[test]
    fn far_edge_only() {
        let radii = corner_radii(50.0, 46.0, 96.0, Orientation::Vertical, false, 1.0);
        assert_eq!(radii.top_left, RADIUS);
        assert_eq!(radii.top_right, RADIUS);
        assert_eq!(radii.bottom_left, 0.0);
        assert_eq!(radii.bottom_right, 0.0);
    }

    #[test]
    fn both_edges_round_all_four() {
        let radii = corner_radii(0.0, 96.0, 96.0, Orientation::Vertical, false, 1.0);
        assert_eq!(
            radii,
            CornerRadii {
                top_left: RADIUS,
                top_right: RADIUS,
                bottom_right: RADIUS,
                bottom_left: RADIUS,
            }
        );
    }

    #[test]
    fn interior_segment_stays_square() {
        let radii = corner_radii(10.0, 10.0, 96.0, Orientation::Vertical, false, 1.0);
        assert_eq!(radii, CornerRadii::SQUARE);
    }

    #[test]
    fn far_edge_tolerance_scales() {
        // gap of 8 units: within threshold only once the scale factor
        // stretches the tolerance
        let total = 96.0;
        let snug = corner_radii(0.0, 88.0, total, Orientation::Vertical, false, 1.0);
        assert_eq!(snug.top_left, 0.0);
        let scaled = corner_radii(0.0, 88.0, total, Orientation::Vertical, false, 2.0);
        assert_eq!(scaled.top_left, RADIUS);
    }

    #[test]
    fn horizontal_corner_pairs() {
        let near = corner_radii(0.0, 10.0, 40.0, Orientation::Horizontal, false, 1.0);
        assert_eq!(near.top_left, RADIUS);
        assert_eq!(near.bottom_left, RADIUS);
        assert_eq!(near.top_right, 0.0);

        let far = corner_radii(30.0, 10.0, 40.0, Orientation::Horizontal, false, 1.0);
        assert_eq!(far.top_right, RADIUS);
        assert_eq!(far.bottom_right, RADIUS);
        assert_eq!(far.top_left, 0.0);
    }

    #[test]
    fn mini_uses_smaller_constants() {
        let radii = corner_radii(0.0, 10.0, 96.0, Orientation::Vertical, true, 1.0);
        assert_eq!(radii.bottom_left, RADIUS_MINI);
        // gap of 3.5: inside the regular threshold, outside the mini one
        let gap = corner_radii(0.0, 92.5, 96.0, Orientation::Vertical, true, 1.0);
        assert_eq!(gap.top_left, 0.0);
        let gap = corner_radii(0.0, 92.5, 96.0, Orientation::Vertical, false, 1.0);
        assert_eq!(gap.top_left, RADIUS);
    }
}
