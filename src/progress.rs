//! Scroll math and layout constants shared by the component and the
//! platform listeners.

/// Fraction of the element's area that must be inside the viewport before it
/// counts as visible.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) const VISIBILITY_THRESHOLD: f64 = 0.2;

/// Number of dashes rendered in each segment.
pub(crate) const DASH_COUNT: usize = 20;

/// Normalized progress of an element's travel through the viewport.
///
/// `top` is the element's top edge relative to the viewport top (as reported
/// by `getBoundingClientRect`), `viewport_height` the viewport's inner
/// height. An element entering from the bottom starts near `0.0` and reaches
/// `1.0` as its top edge scrolls past the viewport top. Always in `[0, 1]`.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn viewport_progress(top: f64, viewport_height: f64) -> f64 {
    if viewport_height <= 0.0 {
        return 0.0;
    }
    (1.0 - top / viewport_height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::viewport_progress;

    #[test]
    fn top_edge_at_viewport_midpoint() {
        assert_eq!(viewport_progress(400.0, 800.0), 0.5);
    }

    #[test]
    fn element_scrolled_past_the_top_clamps_to_one() {
        // raw value would be 1 - (-200 / 800) = 1.25
        assert_eq!(viewport_progress(-200.0, 800.0), 1.0);
    }

    #[test]
    fn element_below_the_fold_clamps_to_zero() {
        // raw value would be 1 - (1600 / 800) = -1.0
        assert_eq!(viewport_progress(1600.0, 800.0), 0.0);
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(viewport_progress(800.0, 800.0), 0.0);
        assert_eq!(viewport_progress(0.0, 800.0), 1.0);
    }

    #[test]
    fn degenerate_viewport_height_yields_zero() {
        assert_eq!(viewport_progress(100.0, 0.0), 0.0);
        assert_eq!(viewport_progress(100.0, -1.0), 0.0);
    }
}
