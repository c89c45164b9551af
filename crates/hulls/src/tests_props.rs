//! Property tests across both hull algorithms.

use nalgebra::Vector2;
use proptest::prelude::*;

use crate::validate::{encloses_all, is_convex_ccw, same_cycle, same_vertex_set};
use crate::{fast_hull, slow_hull, Point};

fn point_set(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 0..max)
        .prop_map(|v| v.into_iter().map(|(x, y)| Vector2::new(x, y)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn fast_hull_is_convex_and_encloses(pts in point_set(60)) {
        prop_assume!(pts.len() >= 3);
        let hull = fast_hull(&pts);
        prop_assert!(is_convex_ccw(&hull.boundary));
        prop_assert!(encloses_all(&hull.boundary, &pts));
        prop_assert!(hull.boundary.iter().all(|v| pts.contains(v)));
    }

    #[test]
    fn both_algorithms_agree(pts in point_set(24)) {
        prop_assume!(pts.len() >= 3);
        let fast = fast_hull(&pts);
        let slow = slow_hull(&pts);
        prop_assert!(same_vertex_set(&fast.boundary, &slow.boundary));
        prop_assert!(same_cycle(&fast.boundary, &slow.boundary));
    }

    #[test]
    fn slow_always_costs_more(pts in point_set(24)) {
        prop_assume!(pts.len() >= 3);
        let n = pts.len();
        let fast = fast_hull(&pts);
        let slow = slow_hull(&pts);
        prop_assert!(slow.iterations >= n * (n - 1));
        prop_assert!(fast.iterations <= 4 * (n - 2));
        prop_assert!(slow.iterations > fast.iterations);
    }

    #[test]
    fn repeated_calls_agree(pts in point_set(24)) {
        prop_assert_eq!(fast_hull(&pts), fast_hull(&pts));
        prop_assert_eq!(slow_hull(&pts), slow_hull(&pts));
    }

    #[test]
    fn undersized_sets_are_empty(pts in point_set(3)) {
        prop_assert!(fast_hull(&pts).is_empty());
        prop_assert!(slow_hull(&pts).is_empty());
        prop_assert_eq!(fast_hull(&pts).iterations, 0);
        prop_assert_eq!(slow_hull(&pts).iterations, 0);
    }
}
