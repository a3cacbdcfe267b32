//! Display metrics resolution.

use crate::probe::DisplayProbe;
use crate::snapshot::SCALE_FALLBACK;

/// Resolved metrics of the primary display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub width_px: u32,
    pub height_px: u32,
    pub scale: f64,
}

/// Derive pixel dimensions from the primary display's point size and scale.
///
/// Pixel counts are `pointSize * scale` truncated toward zero, never rounded.
/// A host without a display service reports `0 x 0` at scale 1.0.
pub fn resolve_display(probe: &dyn DisplayProbe) -> DisplayMetrics {
    match probe.primary_display() {
        Some(bounds) => DisplayMetrics {
            width_px: (bounds.point_width * bounds.scale) as u32,
            height_px: (bounds.point_height * bounds.scale) as u32,
            scale: bounds.scale,
        },
        None => DisplayMetrics {
            width_px: 0,
            height_px: 0,
            scale: SCALE_FALLBACK,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::mocks::MockDisplayProbe;

    #[test]
    fn test_pixels_are_points_times_scale_truncated() {
        // 390 x 3.0 = 1170 exactly; 844 x 3.0 = 2532 exactly.
        let probe = MockDisplayProbe::with_bounds(390.0, 844.0, 3.0);
        let metrics = resolve_display(&probe);
        assert_eq!(metrics.width_px, 1170);
        assert_eq!(metrics.height_px, 2532);
        assert_eq!(metrics.scale, 3.0);
    }

    #[test]
    fn test_fractional_products_truncate_toward_zero() {
        // 414 x 2.609 = 1080.126 -> 1080, not 1081.
        let probe = MockDisplayProbe::with_bounds(414.0, 896.0, 2.609);
        let metrics = resolve_display(&probe);
        assert_eq!(metrics.width_px, 1080);
        assert_eq!(metrics.height_px, (896.0_f64 * 2.609) as u32);
    }

    #[test]
    fn test_headless_host_reports_sentinels() {
        let probe = MockDisplayProbe::headless();
        let metrics = resolve_display(&probe);
        assert_eq!(metrics.width_px, 0);
        assert_eq!(metrics.height_px, 0);
        assert_eq!(metrics.scale, SCALE_FALLBACK);
    }
}
