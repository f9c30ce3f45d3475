use std::fmt::Display;

use crate::geometry::{Rotation, Transformation};

#[derive(Clone, Debug, PartialEq, Copy, Default)]
/// [Proper rigid transformation](https://en.wikipedia.org/wiki/Rigid_transformation),
/// decomposed into an orthogonal rotation about the origin followed by a translation.
pub struct DTransformation {
    pub rotation: Rotation,
    /// The translation in the x and y-axis
    pub translation: (f64, f64),
}

impl DTransformation {
    pub fn new(rotation: Rotation, translation: (f64, f64)) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn translation(&self) -> (f64, f64) {
        self.translation
    }

    pub fn compose(&self) -> Transformation {
        Transformation::from_dt(self)
    }
}

impl Display for DTransformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "r: {}, t: ({:.3}, {:.3})",
            self.rotation, self.translation.0, self.translation.1
        )
    }
}
