use log::trace;
use marker_rs::collision_detection::CollisionChecker;
use marker_rs::entities::Layout;
use marker_rs::geometry::DTransformation;

use crate::opt::candidates::CandidateGenerator;
use crate::opt::orientation::Orientation;

/// Caps the number of collision evaluations across an entire layout computation.
#[derive(Clone, Copy, Debug)]
pub struct EvalBudget {
    pub limit: Option<usize>,
    pub used: usize,
}

impl EvalBudget {
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit, used: 0 }
    }

    pub fn unlimited() -> Self {
        Self::new(None)
    }

    pub fn is_exhausted(&self) -> bool {
        self.limit.is_some_and(|limit| self.used >= limit)
    }

    fn consume(&mut self) {
        self.used += 1;
    }
}

/// Searches all orientations and their candidate origins for the collision-free placement
/// with the lowest origin y.
///
/// Ties are resolved in favor of the first one encountered: orientations in the given order,
/// candidates in generation order.
/// Candidates which cannot improve on the current best are not evaluated.
/// Stops early once the `budget` runs out, returning the best placement found so far.
pub fn search(
    layout: &Layout,
    orientations: &[Orientation],
    generator: &impl CandidateGenerator,
    checker: &impl CollisionChecker,
    budget: &mut EvalBudget,
) -> Option<DTransformation> {
    let mut best: Option<DTransformation> = None;

    'outer: for o in orientations {
        for (x, y) in generator.generate(o.bbox, layout) {
            if budget.is_exhausted() {
                break 'outer;
            }
            let worth_testing = best.is_none_or(|b| y < b.translation().1);
            if !worth_testing {
                continue;
            }
            budget.consume();

            let candidate_bbox = o.bbox.translate((x, y));
            if !checker.collides(&candidate_bbox, layout.placed_pieces()) {
                trace!("[SEL] new best: {} at ({x}, {y})", o.rotation);
                best = Some(DTransformation::new(o.rotation, (x, y)));
            }
        }
    }
    best
}
