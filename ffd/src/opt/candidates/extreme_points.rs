use marker_rs::entities::Layout;
use marker_rs::geometry::primitives::Rect;

use crate::opt::candidates::{CandidateGenerator, snap_to_mm};

/// Extreme point style candidate generation:
/// 1. a baseline row at `y = 0`, scanned left to right every `scan_step`,
/// 2. on top of every placed piece, left-aligned with it,
/// 3. to the right of every placed piece, bottom-aligned with it.
///
/// Scans all placed pieces, so cost grows linearly with the number of placed pieces.
#[derive(Clone, Copy, Debug)]
pub struct ExtremePointGenerator {
    pub scan_step: f64,
    pub padding: f64,
}

impl ExtremePointGenerator {
    pub fn new(scan_step: f64, padding: f64) -> Self {
        Self { scan_step, padding }
    }

    /// Left edges along the baseline row.
    ///
    /// The row ends at the first position clear of every placed piece (`clear_from`):
    /// all positions further right are free as well and equally low, so they can never be selected.
    fn baseline_xs(&self, free_width: f64, clear_from: f64) -> impl Iterator<Item = f64> {
        let step = self.scan_step;
        let n_steps = match (free_width.is_finite() && free_width >= 0.0, step > 0.0 && step.is_finite()) {
            (false, _) => None,
            (true, false) => Some(0),
            (true, true) => {
                let n_fit = (free_width / step).floor();
                let n_clear = (clear_from / step).ceil();
                // saturating cast, the range is consumed lazily
                Some(f64::min(n_fit, n_clear) as u64)
            }
        };
        n_steps
            .into_iter()
            .flat_map(move |n| (0..=n).map(move |i| i as f64 * step))
    }
}

impl CandidateGenerator for ExtremePointGenerator {
    fn generate<'a>(&'a self, bbox: Rect, layout: &'a Layout) -> impl Iterator<Item = (f64, f64)> + 'a {
        let (w, h) = (bbox.width(), bbox.height());
        let placed = layout.placed_pieces();

        let clear_from = placed
            .iter()
            .map(|pp| pp.bbox.x_max + self.padding)
            .fold(0.0, f64::max);
        let baseline = self
            .baseline_xs(layout.bin_width - w, clear_from)
            .map(|x| (x, 0.0));

        let around_placed = placed.iter().flat_map(move |pp| {
            let above = {
                let (x, y) = (pp.bbox.x_min, pp.bbox.y_max + self.padding);
                let fits = x >= 0.0 && x + w <= layout.bin_width && y + h <= layout.bin_height;
                fits.then_some((x, y))
            };
            let beside = {
                let (x, y) = (pp.bbox.x_max + self.padding, pp.bbox.y_min);
                let fits = x + w <= layout.bin_width;
                fits.then_some((x, y))
            };
            [above, beside].into_iter().flatten()
        });

        let origins = baseline
            .chain(around_placed)
            .map(move |(x, y)| (x - bbox.x_min, y - bbox.y_min));
        snap_to_mm(origins, bbox, layout)
    }
}
