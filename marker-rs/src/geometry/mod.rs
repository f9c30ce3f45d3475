mod d_transformation;
pub mod geo_traits;
pub mod primitives;
mod rotation;
mod transformation;

#[doc(inline)]
pub use d_transformation::DTransformation;
#[doc(inline)]
pub use rotation::Rotation;
#[doc(inline)]
pub use transformation::Transformation;
