use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Point;
use anyhow::{Result, ensure};

/// Axis-aligned rectangle, used as the bounding box of pieces.
/// Degenerate rectangles (zero width and/or height) are valid.
#[derive(Clone, Debug, PartialEq, Copy, Default)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn try_new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_min <= x_max && y_min <= y_max,
            "invalid rectangle, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Zero-sized rectangle located at the origin
    pub const fn empty() -> Self {
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max: 0.0,
            y_max: 0.0,
        }
    }

    /// Smallest rectangle containing all `points`, `None` if there are none.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let Point(x, y) = points.next()?;
        let init = Rect {
            x_min: x,
            y_min: y,
            x_max: x,
            y_max: y,
        };
        Some(points.fold(init, |r, Point(x, y)| Rect {
            x_min: f64::min(r.x_min, x),
            y_min: f64::min(r.y_min, y),
            x_max: f64::max(r.x_max, x),
            y_max: f64::max(r.y_max, y),
        }))
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn centroid(&self) -> Point {
        Point(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Returns a copy of `self` shifted by `(dx, dy)`.
    pub fn translate(&self, (dx, dy): (f64, f64)) -> Rect {
        Rect {
            x_min: self.x_min + dx,
            y_min: self.y_min + dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }

    /// Returns a copy of `self` expanded by `d` on every side.
    /// Negative values shrink the rectangle, which is clamped to its centroid rather than inverted.
    pub fn inflate(&self, d: f64) -> Rect {
        let c = self.centroid();
        Rect {
            x_min: f64::min(self.x_min - d, c.x()),
            y_min: f64::min(self.y_min - d, c.y()),
            x_max: f64::max(self.x_max + d, c.x()),
            y_max: f64::max(self.y_max + d, c.y()),
        }
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        Rect {
            x_min: f64::min(a.x_min, b.x_min),
            y_min: f64::min(a.y_min, b.y_min),
            x_max: f64::max(a.x_max, b.x_max),
            y_max: f64::max(a.y_max, b.y_max),
        }
    }

    /// Strict overlap test where both rectangles are first padded by `padding`
    /// on their far sides. Boxes separated by exactly `padding` do not overlap.
    #[inline(always)]
    pub fn overlaps_padded(&self, other: &Rect, padding: f64) -> bool {
        self.x_min < other.x_max + padding
            && other.x_min < self.x_max + padding
            && self.y_min < other.y_max + padding
            && other.y_min < self.y_max + padding
    }

    /// Returns the four corners of `self`, counter-clockwise starting at the minimum corner.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_min, self.y_min),
            Point(self.x_max, self.y_min),
            Point(self.x_max, self.y_max),
            Point(self.x_min, self.y_max),
        ]
    }
}

impl Shape for Rect {
    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn bbox(&self) -> Rect {
        *self
    }
}
