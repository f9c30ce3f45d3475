use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Point, Rect};
use crate::geometry::{Rotation, Transformation};

/// Ordered sequence of points describing the boundary of a piece.
/// The first and last point are implicitly connected. Winding direction is irrelevant.
///
/// No validity checks are performed: an outline may be empty, degenerate or self-intersecting.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Outline {
    pub points: Vec<Point>,
}

impl Outline {
    pub fn new(points: Vec<Point>) -> Self {
        Outline { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    /// Rotates every point about the coordinate origin `(0, 0)` by `angle` degrees (counter-clockwise).
    ///
    /// Outlines which do not start at the origin are therefore translated as well as rotated.
    /// Orthogonal angles are handled exactly, other angles through a rotation matrix.
    pub fn rotate(&self, angle: f64) -> Outline {
        match Rotation::from_degrees(angle) {
            Some(r) => self.rotate_orthogonal(r),
            None => self.transform_clone(&Transformation::from_rotation(angle.to_radians())),
        }
    }

    /// Rotates every point about the origin by an orthogonal rotation.
    pub fn rotate_orthogonal(&self, rotation: Rotation) -> Outline {
        match rotation {
            Rotation::R0 => self.clone(),
            r => Outline::new(self.points().map(|p| r.rotate_point(p)).collect()),
        }
    }
}

impl Shape for Outline {
    /// Area enclosed by the outline (shoelace formula), always non-negative
    fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice_signed = (0..n)
            .map(|i| {
                let Point(x_i, y_i) = self.points[i];
                let Point(x_j, y_j) = self.points[(i + 1) % n];
                x_i * y_j - x_j * y_i
            })
            .sum::<f64>();
        twice_signed.abs() / 2.0
    }

    /// Bounding box of all points. Empty outlines yield a zero-sized box at the origin.
    fn bbox(&self) -> Rect {
        Rect::from_points(self.points()).unwrap_or(Rect::empty())
    }
}

impl Transformable for Outline {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        self.points.iter_mut().for_each(|p| *p = t.apply(*p));
        self
    }
}

impl From<Rect> for Outline {
    fn from(r: Rect) -> Self {
        Outline::new(r.corners().to_vec())
    }
}

impl FromIterator<Point> for Outline {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Outline::new(iter.into_iter().collect())
    }
}
