use itertools::Itertools;
use marker_rs::entities::{Layout, LayoutResult, Placement};

/// Summarizes the placements of a finished layout.
///
/// Only placed pieces contribute: `utilized_area` sums their bounding box areas and `bin_area`
/// spans from the bin origin to the furthest placed corner.
pub fn aggregate(layout: &Layout) -> LayoutResult {
    let placements = layout
        .placed_pieces()
        .iter()
        .map(|pp| {
            let (x, y) = pp.origin();
            Placement {
                piece_id: pp.piece_id.clone(),
                x,
                y,
                rotation: pp.d_transf.rotation(),
                flipped: pp.flipped,
            }
        })
        .collect_vec();

    LayoutResult {
        placements,
        utilized_area: layout.utilized_area(),
        bin_area: layout.bin_area(),
        efficiency: Some(layout.efficiency()),
        used_length: layout.used_length(),
    }
}
