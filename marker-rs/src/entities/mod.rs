mod layout;
mod piece;
mod placed_piece;
mod request;
mod result;

#[doc(inline)]
pub use layout::Layout;
#[doc(inline)]
pub use piece::Piece;
#[doc(inline)]
pub use placed_piece::PlacedPiece;
#[doc(inline)]
pub use request::DEFAULT_BIN_HEIGHT;
#[doc(inline)]
pub use request::LayoutRequest;
#[doc(inline)]
pub use result::LayoutResult;
#[doc(inline)]
pub use result::Placement;
