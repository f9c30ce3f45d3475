use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geometry::primitives::Point;

/// Orthogonal rotation about the coordinate origin.
/// These are the only orientations the layout engine considers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// All orthogonal rotations, in the order in which they are evaluated
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    pub fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// Maps an angle in degrees to an orthogonal rotation, if it is one (modulo 360).
    pub fn from_degrees(angle: f64) -> Option<Rotation> {
        let normalized = angle.rem_euclid(360.0);
        match normalized {
            a if a == 0.0 => Some(Rotation::R0),
            a if a == 90.0 => Some(Rotation::R90),
            a if a == 180.0 => Some(Rotation::R180),
            a if a == 270.0 => Some(Rotation::R270),
            _ => None,
        }
    }

    /// Exact `(sin, cos)` of the rotation angle
    pub fn sin_cos(self) -> (f64, f64) {
        match self {
            Rotation::R0 => (0.0, 1.0),
            Rotation::R90 => (1.0, 0.0),
            Rotation::R180 => (0.0, -1.0),
            Rotation::R270 => (-1.0, 0.0),
        }
    }

    /// Rotates `p` counter-clockwise about the origin, without going through trigonometry.
    #[inline(always)]
    pub fn rotate_point(self, p: Point) -> Point {
        let Point(x, y) = p;
        match self {
            Rotation::R0 => Point(x, y),
            Rotation::R90 => Point(-y, x),
            Rotation::R180 => Point(-x, -y),
            Rotation::R270 => Point(y, -x),
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = String;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        Rotation::from_degrees(degrees as f64)
            .ok_or_else(|| format!("{degrees} is not an orthogonal rotation"))
    }
}

impl From<Rotation> for u16 {
    fn from(r: Rotation) -> Self {
        r.degrees()
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}
