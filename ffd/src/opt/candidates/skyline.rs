use marker_rs::entities::Layout;
use marker_rs::geometry::primitives::Rect;

use crate::opt::candidates::{CandidateGenerator, snap_to_mm};

/// Bottom-left candidates on top of the layout's [`Skyline`](marker_rs::collision_detection::Skyline):
/// the piece is left-aligned with the start, or right-aligned with the end, of every skyline segment,
/// and dropped down until it rests on the skyline.
///
/// Cost grows with the number of skyline segments instead of the number of placed pieces.
/// Space underneath overhanging pieces is never reused.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkylineGenerator;

impl CandidateGenerator for SkylineGenerator {
    fn generate<'a>(&'a self, bbox: Rect, layout: &'a Layout) -> impl Iterator<Item = (f64, f64)> + 'a {
        let (w, h) = (bbox.width(), bbox.height());
        let skyline = layout.skyline();

        let origins = skyline
            .candidate_xs(w)
            .into_iter()
            .map(move |x| (x, skyline.height_over(x, x + w)))
            .filter(move |&(_, y)| y + h <= layout.bin_height)
            .map(move |(x, y)| (x - bbox.x_min, y - bbox.y_min));

        snap_to_mm(origins, bbox, layout)
    }
}
