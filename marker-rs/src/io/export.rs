use itertools::Itertools;

use crate::entities::{LayoutRequest, LayoutResult, Placement};
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::Outline;
use crate::io::ext_repr::{ExtLayoutRequest, ExtLayoutResult, ExtOutline, ExtPiece, ExtPlacement};

/// Exports a [`LayoutResult`] by composing an [`ExtLayoutResult`] from it.
pub fn export_result(result: &LayoutResult) -> ExtLayoutResult {
    ExtLayoutResult {
        placements: result.placements.iter().map(export_placement).collect_vec(),
        utilized_area: result.utilized_area,
        bin_area: result.bin_area,
        efficiency: result.efficiency,
        used_length: result.used_length,
    }
}

pub fn export_placement(placement: &Placement) -> ExtPlacement {
    ExtPlacement {
        piece_id: placement.piece_id.clone(),
        x: placement.x,
        y: placement.y,
        rotation_degrees: placement.rotation.degrees(),
        flipped: placement.flipped,
    }
}

pub fn export_request(request: &LayoutRequest) -> ExtLayoutRequest {
    ExtLayoutRequest {
        pieces: request
            .pieces
            .iter()
            .map(|p| ExtPiece {
                id: p.id.clone(),
                outline: export_outline(&p.outline),
            })
            .collect_vec(),
        bin_width: request.bin_width,
        bin_height: request.bin_height,
        allow_rotation: request.allow_rotation,
        allow_mirroring: request.allow_mirroring,
    }
}

pub fn export_outline(outline: &Outline) -> ExtOutline {
    ExtOutline(outline.points().map(|p| p.into()).collect_vec())
}

/// Maps any outline belonging to a piece (cut line, grainline, notches...) into bin coordinates
/// according to its placement: rotation about the origin followed by the translation.
pub fn place_outline(outline: &Outline, placement: &Placement) -> Outline {
    outline.transform_clone(&placement.transformation())
}
