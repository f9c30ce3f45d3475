use crate::entities::Piece;
use crate::geometry::DTransformation;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Outline, Rect};

/// A [`Piece`] which has been rotated and translated into bin coordinates.
/// Only lives for the duration of a single layout computation.
#[derive(Clone, Debug)]
pub struct PlacedPiece {
    pub piece_id: String,
    /// Index of the piece in the request
    pub piece_index: usize,
    /// Rotation about the origin followed by the translation to the placement origin
    pub d_transf: DTransformation,
    /// The outline of the piece after the transformation has been applied
    pub shape: Outline,
    /// Bounding box of `shape`
    pub bbox: Rect,
    /// Always false, mirroring is not supported
    pub flipped: bool,
}

impl PlacedPiece {
    pub fn new(piece: &Piece, piece_index: usize, d_transf: DTransformation) -> Self {
        let shape = piece.outline.transform_clone(&d_transf.compose());
        // an empty outline is placed as a point at its origin
        let bbox = match shape.is_empty() {
            true => Rect::empty().translate(d_transf.translation()),
            false => shape.bbox(),
        };
        PlacedPiece {
            piece_id: piece.id.clone(),
            piece_index,
            d_transf,
            shape,
            bbox,
            flipped: false,
        }
    }

    pub fn origin(&self) -> (f64, f64) {
        self.d_transf.translation
    }
}
