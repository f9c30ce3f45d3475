use clap::ValueEnum;
use marker_rs::entities::DEFAULT_BIN_HEIGHT;
use marker_rs::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration for the FFD layout engine
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct FFDConfig {
    /// Horizontal distance (mm) between consecutive candidates on the baseline row
    pub scan_step: f64,
    /// Minimum gap (mm) enforced between the bounding boxes of any two placed pieces
    pub padding: f64,
    /// Usable roll length (mm) assumed when a request does not define one
    pub default_bin_height: f64,
    /// Which candidate position generator to use
    #[serde(default)]
    pub candidate_strategy: CandidateStrategy,
    /// If enabled, requests with `allowRotation = false` are only evaluated at 0°.
    /// Otherwise all four orthogonal rotations are always evaluated.
    #[serde(default)]
    pub honor_rotation_flag: bool,
    /// Maximum number of candidate placements to test for collisions per layout.
    /// Unlimited if undefined
    #[serde(default)]
    pub max_evaluations: Option<usize>,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl Default for FFDConfig {
    fn default() -> Self {
        Self {
            scan_step: 50.0,
            padding: 10.0,
            default_bin_height: DEFAULT_BIN_HEIGHT,
            candidate_strategy: CandidateStrategy::default(),
            honor_rotation_flag: false,
            max_evaluations: None,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CandidateStrategy {
    /// Baseline row scan plus positions stacked above and beside every placed piece
    #[default]
    ExtremePoints,
    /// Positions derived from the skyline of the placed pieces
    Skyline,
}
