use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Outline, Rect};

/// A single pattern component to be cut from the roll.
/// Owned by the caller, the layout engine only ever derives transformed copies of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Piece {
    pub id: String,
    pub outline: Outline,
}

impl Piece {
    pub fn new(id: impl Into<String>, outline: Outline) -> Self {
        Piece {
            id: id.into(),
            outline,
        }
    }

    pub fn bbox(&self) -> Rect {
        self.outline.bbox()
    }

    /// Area of the bounding box of the untransformed outline
    pub fn bbox_area(&self) -> f64 {
        self.bbox().area()
    }
}
