use crate::collision_detection::Skyline;
use crate::entities::{Piece, PlacedPiece};
use crate::geometry::DTransformation;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::Rect;
use crate::util::assertions;

/// A [`Layout`] is the in-progress arrangement of pieces on the bin during a single layout computation.
/// Pieces can only be added, never removed: placement decisions are final.
/// Each layout maintains a [`Skyline`] of the placed bounding boxes, which can be used to generate candidates.
#[derive(Clone, Debug)]
pub struct Layout {
    pub bin_width: f64,
    pub bin_height: f64,
    /// Minimum gap enforced between any two placed bounding boxes
    pub padding: f64,
    /// All placed pieces, in order of placement
    placed_pieces: Vec<PlacedPiece>,
    skyline: Skyline,
}

impl Layout {
    pub fn new(bin_width: f64, bin_height: f64, padding: f64) -> Self {
        Layout {
            bin_width,
            bin_height,
            padding,
            placed_pieces: vec![],
            skyline: Skyline::new(bin_width),
        }
    }

    /// Places a piece in the layout by applying the transformation.
    /// No collision checking is performed, this is the responsibility of the caller.
    pub fn place_piece(
        &mut self,
        piece: &Piece,
        piece_index: usize,
        d_transf: DTransformation,
    ) -> &PlacedPiece {
        let pp = PlacedPiece::new(piece, piece_index, d_transf);
        self.skyline.register(pp.bbox, self.padding);
        self.placed_pieces.push(pp);

        debug_assert!(assertions::skyline_covers_placed_pieces(self));

        &self.placed_pieces[self.placed_pieces.len() - 1]
    }

    pub fn placed_pieces(&self) -> &[PlacedPiece] {
        &self.placed_pieces
    }

    pub fn skyline(&self) -> &Skyline {
        &self.skyline
    }

    /// Sum of the bounding box areas of all placed pieces
    pub fn utilized_area(&self) -> f64 {
        self.placed_pieces.iter().map(|pp| pp.bbox.area()).sum()
    }

    /// Rectangle spanning from the bin origin to the furthest extent of any placed piece.
    /// Zero-sized if nothing is placed.
    pub fn occupied_rect(&self) -> Rect {
        let (x_max, y_max) = self
            .placed_pieces
            .iter()
            .fold((0.0f64, 0.0f64), |(x, y), pp| {
                (x.max(pp.bbox.x_max), y.max(pp.bbox.y_max))
            });
        Rect {
            x_min: 0.0,
            y_min: 0.0,
            x_max,
            y_max,
        }
    }

    /// Area of [`Layout::occupied_rect`]
    pub fn bin_area(&self) -> f64 {
        self.occupied_rect().area()
    }

    /// Length of roll consumed by the placed pieces
    pub fn used_length(&self) -> f64 {
        self.occupied_rect().y_max
    }

    pub fn efficiency(&self) -> f64 {
        self.utilized_area() / self.bin_area().max(1.0)
    }
}
