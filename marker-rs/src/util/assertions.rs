use itertools::Itertools;
use log::error;

use crate::collision_detection::{BBoxCollisionChecker, CollisionChecker};
use crate::entities::{Layout, LayoutResult};
use crate::geometry::Rotation;
use crate::util::FPA;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// The skyline of the layout should lie on or above every placed piece
pub fn skyline_covers_placed_pieces(layout: &Layout) -> bool {
    let skyline = layout.skyline();
    for pp in layout.placed_pieces() {
        let x_from = f64::max(pp.bbox.x_min, 0.0);
        let x_to = f64::min(pp.bbox.x_max, skyline.width);
        if x_from < x_to && FPA(skyline.height_over(x_from, x_to)) < FPA(pp.bbox.y_max) {
            error!(
                "skyline at [{x_from}, {x_to}] is below placed piece {} (y_max: {})",
                pp.piece_id, pp.bbox.y_max
            );
            return false;
        }
    }
    true
}

/// No two placed pieces should violate the padding between them
pub fn placed_pieces_are_disjoint(layout: &Layout) -> bool {
    let checker = BBoxCollisionChecker::new(layout.padding);
    let placed = layout.placed_pieces();
    for (i, j) in (0..placed.len()).tuple_combinations() {
        if checker.collides(&placed[j].bbox, std::slice::from_ref(&placed[i])) {
            error!(
                "placed pieces {} and {} overlap: {:?} {:?}",
                placed[i].piece_id, placed[j].piece_id, placed[i].bbox, placed[j].bbox
            );
            return false;
        }
    }
    true
}

/// The result should be an exact summary of the layout it was derived from
pub fn result_matches_layout(result: &LayoutResult, layout: &Layout) -> bool {
    let placed = layout.placed_pieces();
    if result.placements.len() != placed.len() {
        return false;
    }
    let placements_match = result.placements.iter().zip(placed).all(|(p, pp)| {
        p.piece_id == pp.piece_id
            && (p.x, p.y) == pp.origin()
            && p.rotation == pp.d_transf.rotation
            && Rotation::ALL.contains(&p.rotation)
            && !p.flipped
    });

    placements_match
        && FPA(result.utilized_area) == FPA(layout.utilized_area())
        && FPA(result.bin_area) == FPA(layout.bin_area())
}
