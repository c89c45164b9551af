//! Andrew's monotone chain convex hull.
//!
//! Sort lexicographically by (x, y), then build one chain left→right and one
//! right→left, popping the middle of every trailing triple that fails to turn
//! left. Collinear points on an edge are dropped (`orientation <= 0` pops).
//!
//! Iteration count: +1 per appended point, +1 per removal. Seeding a chain with
//! its first two points is free.

use std::cmp::Ordering;

use crate::geometry::orientation;
use crate::types::{Hull, Point};

/// Monotone chain hull, counter-clockwise (y-up), starting at the lowest-x point.
///
/// Returns the empty hull (0 iterations) for fewer than 3 points.
pub fn fast_hull(points: &[Point]) -> Hull {
    let n = points.len();
    if n < 3 {
        return Hull::empty();
    }
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(lex_cmp);

    let mut iterations = 0usize;
    let upper = build_chain(pts.iter().copied(), n, &mut iterations);
    let mut lower = build_chain(pts.iter().rev().copied(), n, &mut iterations);

    // Both endpoints of the second chain are already in the first one.
    lower.pop();
    let mut boundary = upper;
    boundary.extend(lower.into_iter().skip(1));

    tracing::debug!(n, hull_len = boundary.len(), iterations, "fast_hull");
    Hull {
        boundary,
        iterations,
    }
}

/// Ascending by x, ties ascending by y. Incomparable (NaN) coordinates compare equal.
#[inline]
pub(crate) fn lex_cmp(a: &Point, b: &Point) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// One half of the hull from points in scan order (at least two).
fn build_chain(
    mut scan: impl Iterator<Item = Point>,
    n: usize,
    iterations: &mut usize,
) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::with_capacity(n);
    chain.extend(scan.by_ref().take(2));
    for p in scan {
        chain.push(p);
        *iterations += 1;
        while chain.len() > 2 {
            let k = chain.len();
            if orientation(chain[k - 3], chain[k - 2], chain[k - 1]) > 0.0 {
                break;
            }
            // drop the middle of the trailing triple; the last point moves into its slot
            chain.swap_remove(k - 2);
            *iterations += 1;
        }
    }
    chain
}
