//! Geometry, collision detection and data model for marker making:
//! laying out cuttable garment pieces on a fixed-width material roll.
//!
//! The placement heuristic itself lives in the `ffd` crate.

/// Entities to model layout requests, placed pieces and layout results
pub mod entities;

/// Geometric primitives and transformations
pub mod geometry;

/// Collision checking between placed pieces and candidate placements
pub mod collision_detection;

/// Importing and exporting requests/results, preview rendering
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
