//! Convex hulls of planar point sets, two ways.
//!
//! - `fast`: Andrew's monotone chain, O(n log n).
//! - `slow`: brute-force directed-edge enumeration, O(n³), stitched into a polygon.
//!
//! Both return a [`Hull`]: the ordered boundary plus an iteration counter that
//! makes the cost of the two algorithms comparable on the same input.
//!
//! API Policy
//! - The algorithms are pure functions over `&[Point]`; anything stateful
//!   (which hull is currently shown, the point set being edited) lives in
//!   [`session::Session`] on the caller side.

pub mod api;
pub mod fast;
pub mod geometry;
pub mod rand;
pub mod session;
pub mod slow;
pub mod types;
pub mod validate;

#[cfg(test)]
mod tests_props;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use fast::fast_hull;
pub use geometry::{orientation, parallelogram_area, turn, Turn};
pub use session::Session;
pub use slow::slow_hull;
pub use types::{Algorithm, Hull, HullCfg, HullKind, Point};

/// Run either algorithm by tag.
#[inline]
pub fn compute(algo: Algorithm, points: &[Point]) -> Hull {
    match algo {
        Algorithm::Fast => fast_hull(points),
        Algorithm::Slow => slow_hull(points),
    }
}

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_points_disk, draw_points_uniform, DiskCfg, ReplayToken, UniformCfg};
    pub use crate::validate::{encloses_all, is_convex_ccw, same_cycle, same_vertex_set};
    pub use crate::{
        compute, fast_hull, orientation, slow_hull, Algorithm, Hull, HullCfg, HullKind, Point,
        Session, Turn,
    };
    pub use nalgebra::Vector2 as Vec2;
}
