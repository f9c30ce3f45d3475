use itertools::Itertools;

use crate::entities::{LayoutRequest, Piece};
use crate::geometry::{DTransformation, Rotation, Transformation};

/// Where and how a single piece ended up in the bin.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    pub piece_id: String,
    /// Translation applied after the rotation (mm)
    pub x: f64,
    pub y: f64,
    /// Rotation about the origin, applied before the translation
    pub rotation: Rotation,
    pub flipped: bool,
}

impl Placement {
    pub fn d_transformation(&self) -> DTransformation {
        DTransformation::new(self.rotation, (self.x, self.y))
    }

    /// Transformation mapping the piece's original outline into bin coordinates
    pub fn transformation(&self) -> Transformation {
        self.d_transformation().compose()
    }
}

/// Outcome of a single layout computation.
///
/// Pieces which could not be placed are absent from `placements`, see [`LayoutResult::unplaced`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LayoutResult {
    /// Placements in the order the pieces were processed
    pub placements: Vec<Placement>,
    /// Sum of the bounding box areas of all placed pieces (mm²)
    pub utilized_area: f64,
    /// Area of the rectangle from the bin origin enclosing all placed pieces (mm²)
    pub bin_area: f64,
    /// `utilized_area / max(bin_area, 1)`, absent for an empty request
    pub efficiency: Option<f64>,
    /// Length of roll consumed (mm)
    pub used_length: f64,
}

impl LayoutResult {
    /// The result for a request without pieces
    pub fn empty() -> Self {
        LayoutResult::default()
    }

    pub fn n_placed(&self) -> usize {
        self.placements.len()
    }

    pub fn placement(&self, piece_id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.piece_id == piece_id)
    }

    /// Every placement paired with the piece it places, in placement order.
    ///
    /// Piece ids may repeat within a request: each placement takes the first piece with its id
    /// that no earlier placement took, so copies of a piece are matched one-to-one.
    /// Placements without a matching piece are left out.
    pub fn matched_pieces<'a>(&'a self, pieces: &'a [Piece]) -> Vec<(&'a Placement, &'a Piece)> {
        self.placements
            .iter()
            .zip(self.piece_indices(pieces))
            .filter_map(|(placement, idx)| Some((placement, &pieces[idx?])))
            .collect_vec()
    }

    /// Ids of the pieces in `request` that have no placement, in input order
    pub fn unplaced<'a>(&self, request: &'a LayoutRequest) -> Vec<&'a str> {
        let placed = self.piece_indices(&request.pieces);
        request
            .pieces
            .iter()
            .enumerate()
            .filter(|(i, _)| !placed.contains(&Some(*i)))
            .map(|(_, piece)| piece.id.as_str())
            .collect_vec()
    }

    /// Index in `pieces` of the piece placed by each placement
    fn piece_indices(&self, pieces: &[Piece]) -> Vec<Option<usize>> {
        let mut taken = vec![false; pieces.len()];
        self.placements
            .iter()
            .map(|placement| {
                let idx = (0..pieces.len()).find(|&i| !taken[i] && pieces[i].id == placement.piece_id)?;
                taken[idx] = true;
                Some(idx)
            })
            .collect_vec()
    }

    /// True if every piece of `request` was placed
    pub fn is_complete(&self, request: &LayoutRequest) -> bool {
        self.placements.len() == request.pieces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::geo_traits::Shape;
    use crate::geometry::primitives::{Outline, Rect};

    fn piece(id: &str, w: f64) -> Piece {
        Piece::new(id, Outline::from(Rect::try_new(0.0, 0.0, w, 100.0).unwrap()))
    }

    fn placed(ids: &[&str]) -> LayoutResult {
        let placements = ids
            .iter()
            .enumerate()
            .map(|(i, id)| Placement {
                piece_id: id.to_string(),
                x: 500.0 * i as f64,
                y: 0.0,
                rotation: Rotation::R0,
                flipped: false,
            })
            .collect_vec();
        LayoutResult {
            placements,
            ..LayoutResult::default()
        }
    }

    #[test]
    fn repeated_ids_match_one_to_one() {
        let pieces = vec![piece("cuff", 100.0), piece("yoke", 200.0), piece("cuff", 300.0)];
        let result = placed(&["cuff", "cuff", "pocket"]);

        let widths = result
            .matched_pieces(&pieces)
            .iter()
            .map(|(p, piece)| (p.x, piece.outline.bbox().width()))
            .collect_vec();
        assert_eq!(widths, vec![(0.0, 100.0), (500.0, 300.0)]);

        let request = LayoutRequest::new(pieces, 1000.0);
        assert_eq!(result.unplaced(&request), vec!["yoke"]);
    }

    #[test]
    fn only_placed_copies_are_consumed() {
        let request = LayoutRequest::new(vec![piece("cuff", 100.0), piece("cuff", 100.0)], 1000.0);
        assert_eq!(placed(&["cuff"]).unplaced(&request), vec!["cuff"]);
        assert!(placed(&["cuff", "cuff"]).is_complete(&request));
    }
}
