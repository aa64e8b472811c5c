//! Constraint-driven terrain board generation for grid-based tactics levels
//!
//! The system fills a rectangular board cell by cell in row-major order,
//! deciding at each cell which terrain categories are legal under local
//! density and water-adjacency constraints, then drawing uniformly among the
//! legal options. Finished boards persist as a coordinate-to-category
//! snapshot and can be restored without re-running generation.

#![forbid(unsafe_code)]

/// Placement rules, legal-category selection, and the board fill driver
pub mod algorithm;
/// Input/output operations, snapshot persistence, and error handling
pub mod io;
/// Board storage and tile data structures
pub mod spatial;

pub use io::error::{BoardError, Result};
