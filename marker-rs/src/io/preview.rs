use crate::entities::{LayoutResult, Piece};
use crate::geometry::primitives::Rect;
use crate::io::export::place_outline;

/// Bounding box enclosing all placed pieces' transformed outlines,
/// used to frame an on-screen or print preview.
///
/// Placements are paired with `pieces` by [`LayoutResult::matched_pieces`].
/// Unmatched placements and empty outlines are ignored. `None` if nothing remains.
pub fn view_bbox(pieces: &[Piece], result: &LayoutResult) -> Option<Rect> {
    result
        .matched_pieces(pieces)
        .into_iter()
        .filter_map(|(placement, piece)| Rect::from_points(place_outline(&piece.outline, placement).points()))
        .reduce(Rect::bounding_rect)
}
