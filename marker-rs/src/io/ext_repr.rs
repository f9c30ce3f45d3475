use serde::{Deserialize, Serialize};

/// External representation of a [`LayoutRequest`](crate::entities::LayoutRequest).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtLayoutRequest {
    pub pieces: Vec<ExtPiece>,
    /// Width of the roll in mm
    pub bin_width: f64,
    /// Usable length of the roll in mm.
    /// Engine default if not specified
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_height: Option<f64>,
    #[serde(default = "default_allow_rotation")]
    pub allow_rotation: bool,
    #[serde(default)]
    pub allow_mirroring: bool,
}

fn default_allow_rotation() -> bool {
    true
}

/// External representation of a [`Piece`](crate::entities::Piece).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPiece {
    /// Identifier of the piece, as assigned by the pattern generator
    pub id: String,
    pub outline: ExtOutline,
}

/// External representation of an [`Outline`](crate::geometry::primitives::Outline).
/// A list of `[x, y]` pairs in mm.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtOutline(pub Vec<(f64, f64)>);

/// External representation of a [`LayoutResult`](crate::entities::LayoutResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtLayoutResult {
    pub placements: Vec<ExtPlacement>,
    pub utilized_area: f64,
    pub bin_area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
    #[serde(default)]
    pub used_length: f64,
}

/// External representation of a [`Placement`](crate::entities::Placement).
/// The piece's outline is first rotated about the origin, then translated by `(x, y)`.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ExtPlacement {
    pub piece_id: String,
    pub x: f64,
    pub y: f64,
    /// One of 0, 90, 180 or 270
    pub rotation_degrees: u16,
    pub flipped: bool,
}
