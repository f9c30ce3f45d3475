use itertools::Itertools;
use marker_rs::entities::Piece;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Order in which the pieces are processed: descending bounding box area (first-fit-decreasing).
/// Ties keep their input order.
pub fn piece_placement_order(pieces: &[Piece]) -> Vec<usize> {
    //sorted_by_cached_key is a stable sort, every area is computed once
    (0..pieces.len())
        .sorted_by_cached_key(|&i| Reverse(OrderedFloat(pieces[i].bbox_area())))
        .collect_vec()
}
