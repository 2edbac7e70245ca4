//! Scan region placement within the surface bounds

use tracing::warn;

use crate::config::LayoutConfig;
use crate::geometry::ScanRect;

/// Centered scan region for the given surface bounds
///
/// Portrait bounds use `width_ratio` of the width; landscape bounds use
/// `landscape_height_ratio` of the height. The other side follows from
/// `aspect_ratio` (height / width), and the result is scaled down if it would
/// not fit.
pub fn calculate_scan_rect(bounds: ScanRect, layout: &LayoutConfig) -> ScanRect {
    let bounds = bounds.normalized();
    if bounds.is_empty() {
        return ScanRect::new(bounds.x, bounds.y, 0.0, 0.0);
    }

    let width_ratio = unit_ratio("width_ratio", layout.width_ratio, 0.8);
    let landscape_ratio = unit_ratio("landscape_height_ratio", layout.landscape_height_ratio, 0.75);
    let aspect = if layout.aspect_ratio.is_finite() && layout.aspect_ratio > 0.0 {
        layout.aspect_ratio
    } else {
        warn!(aspect_ratio = layout.aspect_ratio, "Invalid layout.aspect_ratio, using 0.75");
        0.75
    };

    let (mut width, mut height) = if bounds.is_landscape() {
        let height = bounds.height * landscape_ratio;
        (height / aspect, height)
    } else {
        let width = bounds.width * width_ratio;
        (width, width * aspect)
    };

    let scale = (bounds.width / width).min(bounds.height / height).min(1.0);
    width *= scale;
    height *= scale;

    ScanRect::new(
        bounds.x + (bounds.width - width) / 2.0,
        bounds.y + (bounds.height - height) / 2.0,
        width,
        height,
    )
}

/// Line track inside a scan area
pub fn line_track_for(area: ScanRect, inset: f64) -> ScanRect {
    area.inset(inset)
}

fn unit_ratio(name: &str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() && value > 0.0 && value <= 1.0 {
        value
    } else {
        warn!(value, "Invalid layout.{}, using {}", name, fallback);
        fallback
    }
}
