pub mod aggregator;
pub mod candidates;
mod ffd_optimizer;
pub mod orientation;
pub mod ranker;
pub mod selector;

#[doc(inline)]
pub use ffd_optimizer::FFDOptimizer;
