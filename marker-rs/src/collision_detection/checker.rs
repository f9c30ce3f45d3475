use crate::entities::PlacedPiece;
use crate::geometry::primitives::Rect;

/// Decides whether a candidate placement is in conflict with the pieces already placed.
///
/// Implementations may report false positives (rejecting a placement which would not truly overlap),
/// but must never report false negatives.
pub trait CollisionChecker {
    /// `candidate` is the bounding box of the transformed piece in bin coordinates.
    fn collides(&self, candidate: &Rect, placed: &[PlacedPiece]) -> bool;
}

/// Padded axis-aligned bounding box overlap test.
///
/// Two boxes conflict if they are less than `padding` apart on both axes.
/// Exact for rectangular pieces, conservative for everything else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBoxCollisionChecker {
    pub padding: f64,
}

impl BBoxCollisionChecker {
    pub fn new(padding: f64) -> Self {
        Self { padding }
    }
}

impl CollisionChecker for BBoxCollisionChecker {
    fn collides(&self, candidate: &Rect, placed: &[PlacedPiece]) -> bool {
        placed
            .iter()
            .any(|pp| candidate.overlaps_padded(&pp.bbox, self.padding))
    }
}
