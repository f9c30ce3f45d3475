use crate::geometry::DTransformation;
use crate::geometry::primitives::Point;

//See https://pages.mtu.edu/~shene/COURSES/cs3621/NOTES/geometry/geo-tran.html

#[derive(Clone, Debug, PartialEq)]
///Proper rigid transformation in matrix form
pub struct Transformation {
    matrix: [[f64; 3]; 3],
}

impl Transformation {
    /// Rotation about the origin, `angle` in radians
    pub fn from_rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: rot_transl_m((sin, cos), (0.0, 0.0)),
        }
    }

    /// Orthogonal rotation about the origin followed by the translation.
    /// Quarter turns use exact sines and cosines.
    pub fn from_dt(dt: &DTransformation) -> Self {
        Self {
            matrix: rot_transl_m(dt.rotation.sin_cos(), dt.translation),
        }
    }

    #[inline(always)]
    pub fn apply(&self, Point(x, y): Point) -> Point {
        let m = &self.matrix;
        Point(
            m[0][0] * x + m[0][1] * y + m[0][2],
            m[1][0] * x + m[1][1] * y + m[1][2],
        )
    }
}

//rotation followed by translation
fn rot_transl_m((sin, cos): (f64, f64), (tx, ty): (f64, f64)) -> [[f64; 3]; 3] {
    [[cos, -sin, tx], [sin, cos, ty], [0.0, 0.0, 1.0]]
}
