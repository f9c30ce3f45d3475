use crate::entities::Piece;

/// Length of the roll assumed when a request does not specify one (mm)
pub const DEFAULT_BIN_HEIGHT: f64 = 5000.0;

/// Everything needed for a single layout computation. Immutable for the duration of the call.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRequest {
    /// Pieces to be laid out, in input order
    pub pieces: Vec<Piece>,
    /// Fixed width of the roll (mm)
    pub bin_width: f64,
    /// Usable length of the roll (mm), if limited
    pub bin_height: Option<f64>,
    /// Whether pieces may be rotated
    pub allow_rotation: bool,
    /// Whether pieces may be mirrored. Reserved, mirrored placements are never produced.
    pub allow_mirroring: bool,
}

impl LayoutRequest {
    pub fn new(pieces: Vec<Piece>, bin_width: f64) -> Self {
        LayoutRequest {
            pieces,
            bin_width,
            bin_height: None,
            allow_rotation: true,
            allow_mirroring: false,
        }
    }

    pub fn with_bin_height(mut self, bin_height: f64) -> Self {
        self.bin_height = Some(bin_height);
        self
    }

    /// The bin height of the request, or `default` if it has none
    pub fn bin_height_or(&self, default: f64) -> f64 {
        self.bin_height.unwrap_or(default)
    }
}
