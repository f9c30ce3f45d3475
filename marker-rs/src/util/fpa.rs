use std::cmp::Ordering;
use std::fmt::Display;

/// Absolute tolerance (mm) below which two coordinates are considered identical.
/// Far below the millimeter resolution at which placements are made.
pub const MM_TOLERANCE: f64 = 1e-6;

/// Float wrapper comparing with [`float_cmp::approx_eq!()`]: equal when within
/// [`MM_TOLERANCE`] or a few ulps of each other, ordered as plain `f64` otherwise.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = MM_TOLERANCE, ulps = 4)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self == other {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}
