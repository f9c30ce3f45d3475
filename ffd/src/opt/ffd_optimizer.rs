use std::time::Instant;

use log::{debug, info, warn};
use marker_rs::collision_detection::BBoxCollisionChecker;
use marker_rs::entities::{Layout, LayoutRequest, LayoutResult};
use marker_rs::geometry::{DTransformation, Rotation};
use marker_rs::util::assertions;
use thousands::Separable;

use crate::config::{CandidateStrategy, FFDConfig};
use crate::opt::aggregator::aggregate;
use crate::opt::candidates::{ExtremePointGenerator, SkylineGenerator};
use crate::opt::orientation::{Orientation, orientations};
use crate::opt::ranker::piece_placement_order;
use crate::opt::selector::{EvalBudget, search};

/// First-Fit-Decreasing (FFD) layout engine.
/// Places pieces one by one, largest bounding box first, each at the lowest collision-free position found.
/// Decisions are never revisited: pieces that do not fit anywhere are dropped.
pub struct FFDOptimizer {
    pub config: FFDConfig,
}

impl FFDOptimizer {
    pub fn new(config: FFDConfig) -> Self {
        Self { config }
    }

    pub fn solve(&self, request: &LayoutRequest) -> LayoutResult {
        if request.pieces.is_empty() {
            info!("[FFD] empty request, nothing to lay out");
            return LayoutResult::empty();
        }
        let start = Instant::now();

        let rotations = self.rotations(request);
        if request.allow_mirroring {
            warn!("[FFD] mirroring is not supported, pieces are never flipped");
        }

        let mut layout = Layout::new(
            request.bin_width,
            request.bin_height_or(self.config.default_bin_height),
            self.config.padding,
        );
        let checker = BBoxCollisionChecker::new(self.config.padding);
        let mut budget = EvalBudget::new(self.config.max_evaluations);

        let order = piece_placement_order(&request.pieces);
        for (rank, &piece_index) in order.iter().enumerate() {
            if budget.is_exhausted() {
                warn!(
                    "[FFD] evaluation budget of {} exhausted, dropping the {} remaining pieces",
                    budget.used.separate_with_commas(),
                    order.len() - rank
                );
                break;
            }
            let piece = &request.pieces[piece_index];
            let orientations = orientations(piece, &rotations);

            match self.search(&layout, &orientations, &checker, &mut budget) {
                Some(d_transf) => {
                    layout.place_piece(piece, piece_index, d_transf);
                    info!(
                        "[FFD] placing piece {}/{} with id {} at [{}]",
                        layout.placed_pieces().len(),
                        request.pieces.len(),
                        piece.id,
                        d_transf
                    );
                }
                None => {
                    warn!(
                        "[FFD] no position found for piece {} (bbox {:.1} x {:.1}), dropped",
                        piece.id,
                        piece.bbox().width(),
                        piece.bbox().height()
                    );
                }
            }
        }
        debug_assert!(assertions::placed_pieces_are_disjoint(&layout));

        let result = aggregate(&layout);
        debug_assert!(assertions::result_matches_layout(&result, &layout));

        info!(
            "[FFD] layout finished in {:.3}ms ({} evaluations)",
            start.elapsed().as_secs_f64() * 1000.0,
            budget.used.separate_with_commas()
        );
        info!(
            "[FFD] placed {}/{} pieces, used length {:.1}mm with an efficiency of {:.3}%",
            result.n_placed(),
            request.pieces.len(),
            result.used_length,
            layout.efficiency() * 100.0
        );
        result
    }

    /// Rotations to evaluate for every piece, in evaluation order
    fn rotations(&self, request: &LayoutRequest) -> Vec<Rotation> {
        match (request.allow_rotation, self.config.honor_rotation_flag) {
            (false, true) => vec![Rotation::R0],
            (false, false) => {
                warn!("[FFD] allowRotation is disabled but ignored, all orthogonal rotations are evaluated");
                Rotation::ALL.to_vec()
            }
            (true, _) => Rotation::ALL.to_vec(),
        }
    }

    fn search(
        &self,
        layout: &Layout,
        orientations: &[Orientation],
        checker: &BBoxCollisionChecker,
        budget: &mut EvalBudget,
    ) -> Option<DTransformation> {
        let used_before = budget.used;
        let best = match self.config.candidate_strategy {
            CandidateStrategy::ExtremePoints => {
                let generator = ExtremePointGenerator::new(self.config.scan_step, self.config.padding);
                search(layout, orientations, &generator, checker, budget)
            }
            CandidateStrategy::Skyline => {
                search(layout, orientations, &SkylineGenerator, checker, budget)
            }
        };
        debug!(
            "[FFD] evaluated {} candidates",
            (budget.used - used_before).separate_with_commas()
        );
        best
    }
}
