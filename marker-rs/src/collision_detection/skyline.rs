use itertools::Itertools;

use crate::geometry::primitives::Rect;
use crate::util::FPA;

/// Horizontal interval `[x_start, x_end)` of the bin, free of pieces above `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkylineSegment {
    pub x_start: f64,
    pub x_end: f64,
    pub y: f64,
}

impl SkylineSegment {
    /// Strict overlap with the interval `[x_from, x_to]`
    fn overlaps(&self, x_from: f64, x_to: f64) -> bool {
        self.x_start < x_to && self.x_end > x_from
    }
}

/// Spatial index of the placed pieces, keyed by x-interval.
///
/// Every segment stores the lowest y at which a piece spanning that interval is guaranteed
/// to be clear of all registered (padded) bounding boxes. Overhangs are not tracked: the space
/// underneath a piece is considered occupied. Segments are sorted, contiguous and cover `[0, width]`.
#[derive(Clone, Debug)]
pub struct Skyline {
    pub width: f64,
    segments: Vec<SkylineSegment>,
}

impl Skyline {
    /// Flat skyline at `y = 0`. Empty if `width` is not positive.
    pub fn new(width: f64) -> Self {
        let segments = match width > 0.0 {
            true => vec![SkylineSegment {
                x_start: 0.0,
                x_end: width,
                y: 0.0,
            }],
            false => vec![],
        };
        Skyline { width, segments }
    }

    pub fn segments(&self) -> &[SkylineSegment] {
        &self.segments
    }

    /// Raises the skyline above `bbox`, inflated horizontally and on top by `padding`.
    pub fn register(&mut self, bbox: Rect, padding: f64) {
        let x_from = f64::max(bbox.x_min - padding, 0.0);
        let x_to = f64::min(bbox.x_max + padding, self.width);
        let top = bbox.y_max + padding;
        if !(x_from < x_to) {
            return;
        }
        self.split_at(x_from);
        self.split_at(x_to);

        self.segments
            .iter_mut()
            .filter(|s| s.x_start >= x_from && s.x_end <= x_to)
            .for_each(|s| s.y = f64::max(s.y, top));

        self.merge();
    }

    /// Lowest y at which the horizontal interval `[x_from, x_to]` is free
    pub fn height_over(&self, x_from: f64, x_to: f64) -> f64 {
        self.segments
            .iter()
            .filter(|s| s.overlaps(x_from, x_to))
            .map(|s| s.y)
            .fold(0.0, f64::max)
    }

    /// Candidate x-positions for a piece of width `w`: left-aligned with every segment,
    /// and right-aligned with every segment's end. Only positions where the piece fits within the width are returned.
    pub fn candidate_xs(&self, w: f64) -> Vec<f64> {
        self.segments
            .iter()
            .flat_map(|s| [s.x_start, s.x_end - w])
            .filter(|&x| x >= 0.0 && x + w <= self.width)
            .collect_vec()
    }

    fn split_at(&mut self, x: f64) {
        if let Some(i) = self
            .segments
            .iter()
            .position(|s| s.x_start < x && x < s.x_end)
        {
            let right = SkylineSegment {
                x_start: x,
                ..self.segments[i]
            };
            self.segments[i].x_end = x;
            self.segments.insert(i + 1, right);
        }
    }

    /// Coalesces neighbouring segments of (almost) equal height
    fn merge(&mut self) {
        self.segments = std::mem::take(&mut self.segments)
            .into_iter()
            .coalesce(|a, b| match FPA(a.y) == FPA(b.y) {
                true => Ok(SkylineSegment {
                    x_end: b.x_end,
                    ..a
                }),
                false => Err((a, b)),
            })
            .collect_vec();
    }
}
