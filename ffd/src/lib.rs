use std::sync::LazyLock;
use std::time::Instant;

use marker_rs::entities::{LayoutRequest, LayoutResult};

use crate::config::FFDConfig;
use crate::opt::FFDOptimizer;

pub mod config;
pub mod io;
pub mod opt;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Lays out all pieces of `request` on the bin, largest first.
///
/// Never fails: pieces which cannot be placed are left out of the result.
/// Pure and deterministic, identical inputs always produce identical results.
pub fn layout(request: &LayoutRequest, config: &FFDConfig) -> LayoutResult {
    FFDOptimizer::new(*config).solve(request)
}
