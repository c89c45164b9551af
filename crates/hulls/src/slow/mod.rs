//! Brute-force convex hull by directed-edge enumeration.
//!
//! Purpose
//! - Serve as the O(n³) baseline against `fast::fast_hull`: every ordered pair
//!   (i, j) is a candidate edge, kept iff no other point lies strictly right of
//!   the directed line i→j. The surviving edges are then walked into a polygon.
//!
//! Iteration count: +1 for every third point examined while testing a pair.
//! A pair stops at its first violating point.
//!
//! Degenerate inputs
//! - With collinear or duplicate points the edge set can contain 2-cycles and
//!   vertices with several outgoing edges. The walk takes the first usable edge
//!   in index order and never revisits a vertex, so it always terminates, but the
//!   boundary it returns may be partial or include collinear points.
//!
//! Split: `edges.rs` (enumeration) and `walk.rs` (reconstruction).

mod edges;
mod walk;

pub use edges::{hull_edges, EdgeSet};
pub use walk::{start_vertex, walk_edges};

use crate::types::{Hull, Point};

/// Brute-force hull, counter-clockwise (y-up), starting at the rightmost-lowest point.
///
/// Returns the empty hull (0 iterations) for fewer than 3 points.
pub fn slow_hull(points: &[Point]) -> Hull {
    let n = points.len();
    if n < 3 {
        return Hull::empty();
    }
    let (edges, iterations) = hull_edges(points);
    let boundary = walk_edges(points, &edges);
    tracing::debug!(
        n,
        edges = edges.len(),
        hull_len = boundary.len(),
        iterations,
        "slow_hull"
    );
    Hull {
        boundary,
        iterations,
    }
}

#[cfg(test)]
mod tests;
