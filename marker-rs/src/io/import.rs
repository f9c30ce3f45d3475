use anyhow::{Result, anyhow, bail};
use itertools::Itertools;
use log::warn;

use crate::entities::{LayoutRequest, LayoutResult, Piece, Placement};
use crate::geometry::Rotation;
use crate::geometry::primitives::{Outline, Point};
use crate::io::ext_repr::{ExtLayoutRequest, ExtLayoutResult, ExtOutline, ExtPiece, ExtPlacement};

/// Converts an external layout request into an internal one.
/// No validation is performed on the outlines: degenerate or self-intersecting outlines are passed through.
pub fn import_request(ext_request: &ExtLayoutRequest) -> LayoutRequest {
    let pieces = ext_request.pieces.iter().map(import_piece).collect_vec();

    if !ext_request.bin_width.is_finite() {
        warn!(
            "bin width is not finite ({}), pieces will not be placed",
            ext_request.bin_width
        );
    }

    LayoutRequest {
        pieces,
        bin_width: ext_request.bin_width,
        bin_height: ext_request.bin_height,
        allow_rotation: ext_request.allow_rotation,
        allow_mirroring: ext_request.allow_mirroring,
    }
}

pub fn import_piece(ext_piece: &ExtPiece) -> Piece {
    Piece::new(ext_piece.id.clone(), import_outline(&ext_piece.outline))
}

pub fn import_outline(ext_outline: &ExtOutline) -> Outline {
    ext_outline.0.iter().map(|&p| Point::from(p)).collect()
}

/// Converts an external layout result (e.g. read back from disk) into an internal one.
pub fn import_result(ext_result: &ExtLayoutResult) -> Result<LayoutResult> {
    let placements = ext_result
        .placements
        .iter()
        .map(import_placement)
        .collect::<Result<Vec<_>>>()?;

    Ok(LayoutResult {
        placements,
        utilized_area: ext_result.utilized_area,
        bin_area: ext_result.bin_area,
        efficiency: ext_result.efficiency,
        used_length: ext_result.used_length,
    })
}

pub fn import_placement(ext_placement: &ExtPlacement) -> Result<Placement> {
    let rotation = Rotation::try_from(ext_placement.rotation_degrees).map_err(|e| {
        anyhow!("invalid placement of piece {}: {e}", ext_placement.piece_id)
    })?;
    if ext_placement.flipped {
        bail!(
            "invalid placement of piece {}: mirrored placements are not supported",
            ext_placement.piece_id
        );
    }
    Ok(Placement {
        piece_id: ext_placement.piece_id.clone(),
        x: ext_placement.x,
        y: ext_placement.y,
        rotation,
        flipped: false,
    })
}
