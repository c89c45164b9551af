//! Curated surface for front ends and experiments (UNSTABLE).
//!
//! Prefer these re-exports for clarity and consistency across callers.

// Algorithms
pub use crate::fast::fast_hull;
pub use crate::slow::{hull_edges, slow_hull, start_vertex, walk_edges, EdgeSet};
pub use crate::{compute, orientation, turn, Turn};
// Caller-side state
pub use crate::session::Session;
pub use crate::types::{Algorithm, Hull, HullCfg, HullKind, Point};
// Checks
pub use crate::validate::{encloses_all, is_convex_ccw, same_cycle, same_vertex_set};
// Random inputs
pub use crate::rand::{
    draw_points_disk, draw_points_uniform, DiskCfg, ReplayToken as PointsReplay, UniformCfg,
};
