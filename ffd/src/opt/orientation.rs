use itertools::Itertools;
use marker_rs::entities::Piece;
use marker_rs::geometry::Rotation;
use marker_rs::geometry::geo_traits::Shape;
use marker_rs::geometry::primitives::{Outline, Rect};

/// A piece's outline rotated about the origin, ready to be positioned.
#[derive(Clone, Debug)]
pub struct Orientation {
    pub rotation: Rotation,
    pub outline: Outline,
    pub bbox: Rect,
}

impl Orientation {
    pub fn new(piece: &Piece, rotation: Rotation) -> Self {
        let outline = piece.outline.rotate_orthogonal(rotation);
        let bbox = outline.bbox();
        Orientation {
            rotation,
            outline,
            bbox,
        }
    }
}

/// All orientations of `piece` to evaluate, in the order of `rotations`.
pub fn orientations(piece: &Piece, rotations: &[Rotation]) -> Vec<Orientation> {
    rotations
        .iter()
        .map(|&r| Orientation::new(piece, r))
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use marker_rs::geometry::primitives::Point;

    #[test]
    fn four_orientations_in_fixed_order() {
        let piece = Piece::new(
            "yoke",
            Outline::new(vec![Point(0.0, 0.0), Point(300.0, 0.0), Point(300.0, 80.0)]),
        );
        let o = orientations(&piece, &Rotation::ALL);
        assert_eq!(
            o.iter().map(|o| o.rotation.degrees()).collect_vec(),
            vec![0, 90, 180, 270]
        );
        assert_eq!((o[0].bbox.width(), o[0].bbox.height()), (300.0, 80.0));
        assert_eq!((o[1].bbox.width(), o[1].bbox.height()), (80.0, 300.0));
        assert_eq!(o[2].bbox, Rect::try_new(-300.0, -80.0, 0.0, 0.0).unwrap());
        assert_eq!(o[3].bbox, Rect::try_new(0.0, -300.0, 80.0, 0.0).unwrap());
        assert_eq!(o[0].outline, piece.outline);
    }
}
