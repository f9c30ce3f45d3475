mod extreme_points;
mod skyline;

pub use extreme_points::ExtremePointGenerator;
pub use skyline::SkylineGenerator;

use itertools::Itertools;
use marker_rs::entities::Layout;
use marker_rs::geometry::primitives::Rect;

/// Proposes placement origins for an oriented piece in a layout.
///
/// An origin `(x, y)` is the translation applied to the rotated outline, so the piece's
/// bounding box ends up at `bbox.translate((x, y))`. Origins are whole millimeters (see [`snap_to_mm`]),
/// unique, and yielded lazily in generation order, which is significant for tie-breaking.
pub trait CandidateGenerator {
    /// * `bbox` - bounding box of the rotated, untranslated outline
    fn generate<'a>(&'a self, bbox: Rect, layout: &'a Layout) -> impl Iterator<Item = (f64, f64)> + 'a;
}

/// Snaps origins to whole millimeters and drops repeats, keeping the first occurrence.
///
/// Origins are rounded to the nearest millimeter, except when that would move the bounding box
/// past the bottom or left edge of the bin (rounded up instead) or past the top or right edge
/// (rounded down instead). Fractional outlines never leave the bin through rounding.
pub fn snap_to_mm(
    origins: impl Iterator<Item = (f64, f64)>,
    bbox: Rect,
    layout: &Layout,
) -> impl Iterator<Item = (f64, f64)> {
    let (bin_width, bin_height) = (layout.bin_width, layout.bin_height);
    origins
        .map(move |(x, y)| {
            (
                snap_axis(x, bbox.x_min, bbox.x_max, bin_width),
                snap_axis(y, bbox.y_min, bbox.y_max, bin_height),
            )
        })
        .unique_by(|&(x, y)| (x.to_bits(), y.to_bits()))
}

/// Rounds origin `v` of an interval `[lo, hi]` (relative to the origin) within `[0, limit]`
fn snap_axis(v: f64, lo: f64, hi: f64, limit: f64) -> f64 {
    let rounded = v.round();
    let snapped = if rounded + lo < 0.0 {
        v.ceil()
    } else if rounded + hi > limit && v.floor() + lo >= 0.0 {
        v.floor()
    } else {
        rounded
    };
    // no negative zeros
    snapped + 0.0
}
