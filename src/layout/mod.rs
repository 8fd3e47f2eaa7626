//! Pure layout helpers: grouped-label runs and annotation corner choice.

pub mod corner;
pub mod runs;
pub mod tokens;

pub use corner::{best_corner, quadrant_counts, Corner, QuadrantCounts};
pub use runs::{contiguous_runs, Run};
pub use tokens::{AnnotationPosition, CoordSpace};
