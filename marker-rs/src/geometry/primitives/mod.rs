mod outline;
mod point;
mod rect;

#[doc(inline)]
pub use outline::Outline;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
