mod checker;
mod skyline;

#[doc(inline)]
pub use checker::BBoxCollisionChecker;
#[doc(inline)]
pub use checker::CollisionChecker;
#[doc(inline)]
pub use skyline::Skyline;
#[doc(inline)]
pub use skyline::SkylineSegment;
