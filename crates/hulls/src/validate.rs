//! Checks on hull boundaries, shared by tests and the CLI `--verify` flag.
//!
//! All predicates use exact comparisons, matching the algorithms.

use crate::fast::lex_cmp;
use crate::geometry::orientation;
use crate::types::Point;

/// Strictly convex, counter-clockwise, winding once.
///
/// Needs at least 3 vertices. Every consecutive triple must turn left, and the
/// exterior angles must sum to one full turn (rules out star polygons).
pub fn is_convex_ccw(boundary: &[Point]) -> bool {
    let m = boundary.len();
    if m < 3 {
        return false;
    }
    let mut winding = 0.0;
    for i in 0..m {
        let a = boundary[i];
        let b = boundary[(i + 1) % m];
        let c = boundary[(i + 2) % m];
        if orientation(a, b, c) <= 0.0 {
            return false;
        }
        let u = b - a;
        let v = c - b;
        winding += (u.x * v.y - u.y * v.x).atan2(u.dot(&v));
    }
    (winding - std::f64::consts::TAU).abs() < 1e-6
}

/// No point lies strictly to the right of any boundary edge.
///
/// For a counter-clockwise boundary this means every point is inside or on it.
pub fn encloses_all(boundary: &[Point], points: &[Point]) -> bool {
    match boundary.len() {
        0 => points.is_empty(),
        1 => points.iter().all(|p| *p == boundary[0]),
        m => (0..m).all(|i| {
            let a = boundary[i];
            let b = boundary[(i + 1) % m];
            points.iter().all(|&p| orientation(a, b, p) >= 0.0)
        }),
    }
}

/// Same distinct vertices, ignoring order.
pub fn same_vertex_set(a: &[Point], b: &[Point]) -> bool {
    sorted_unique(a) == sorted_unique(b)
}

/// `b` is a cyclic rotation of `a` (same direction, any starting vertex).
pub fn same_cycle(a: &[Point], b: &[Point]) -> bool {
    let m = a.len();
    if m != b.len() {
        return false;
    }
    if m == 0 {
        return true;
    }
    (0..m)
        .filter(|&r| b[r] == a[0])
        .any(|r| (0..m).all(|i| a[i] == b[(r + i) % m]))
}

fn sorted_unique(pts: &[Point]) -> Vec<Point> {
    let mut v = pts.to_vec();
    v.sort_by(lex_cmp);
    v.dedup();
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn unit_square() -> Vec<Point> {
        vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ]
    }

    #[test]
    fn square_is_convex_only_counter_clockwise() {
        let sq = unit_square();
        assert!(is_convex_ccw(&sq));
        let rev: Vec<_> = sq.iter().rev().copied().collect();
        assert!(!is_convex_ccw(&rev));
        assert!(!is_convex_ccw(&sq[..2]));
    }

    #[test]
    fn pentagram_is_rejected() {
        let star: Vec<Point> = (0..5)
            .map(|k| {
                let t = std::f64::consts::TAU * (2 * k) as f64 / 5.0;
                vector![t.cos(), t.sin()]
            })
            .collect();
        assert!(!is_convex_ccw(&star));
    }

    #[test]
    fn enclosure_detects_outside_point() {
        let sq = unit_square();
        assert!(encloses_all(&sq, &[vector![0.5, 0.5], vector![1.0, 0.5]]));
        assert!(!encloses_all(&sq, &[vector![1.5, 0.5]]));
        assert!(encloses_all(&[], &[]));
        assert!(!encloses_all(&[], &[vector![0.0, 0.0]]));
    }

    #[test]
    fn cycles_and_sets() {
        let sq = unit_square();
        let rotated = vec![sq[2], sq[3], sq[0], sq[1]];
        assert!(same_cycle(&sq, &rotated));
        assert!(same_vertex_set(&sq, &rotated));
        let reversed: Vec<_> = sq.iter().rev().copied().collect();
        assert!(!same_cycle(&sq, &reversed));
        assert!(same_vertex_set(&sq, &reversed));
        assert!(!same_vertex_set(&sq, &sq[..3]));
        assert!(same_cycle(&[], &[]));
    }
}
