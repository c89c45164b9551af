use super::*;
use crate::fast::fast_hull;
use crate::types::Point;
use crate::rand::{draw_points_uniform, ReplayToken, UniformCfg};
use crate::validate::{encloses_all, is_convex_ccw, same_cycle, same_vertex_set};
use nalgebra::vector;

fn square_with_center() -> Vec<Point> {
    vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
        vector![2.0, 2.0],
    ]
}

#[test]
fn square_edges_form_one_cycle() {
    let pts = square_with_center();
    let (edges, _) = hull_edges(&pts);
    let mut got: Vec<_> = edges.iter().collect();
    got.sort();
    assert_eq!(got, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert!(edges.contains(1, 2));
    assert!(!edges.contains(2, 1));
    assert!(!edges.contains(4, 0));
}

#[test]
fn square_walk_starts_rightmost_lowest() {
    let hull = slow_hull(&square_with_center());
    assert_eq!(
        hull.boundary,
        vec![
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
            vector![0.0, 0.0],
        ]
    );
    assert!(!hull.boundary.contains(&vector![2.0, 2.0]));
    assert!(same_vertex_set(
        &hull.boundary,
        &fast_hull(&square_with_center()).boundary
    ));
}

#[test]
fn triangle_counts_one_test_per_pair() {
    let pts = vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![2.0, 4.0]];
    let hull = slow_hull(&pts);
    assert_eq!(
        hull.boundary,
        vec![vector![4.0, 0.0], vector![2.0, 4.0], vector![0.0, 0.0]]
    );
    assert_eq!(hull.iterations, 6);
}

#[test]
fn start_vertex_breaks_ties_by_lowest_y() {
    let pts = vec![
        vector![1.0, 0.0],
        vector![3.0, 2.0],
        vector![3.0, -1.0],
        vector![3.0, -1.0],
    ];
    assert_eq!(start_vertex(&pts), Some(2));
    assert_eq!(start_vertex(&[]), None);
}

#[test]
fn undersized_inputs_yield_empty_hull() {
    assert!(slow_hull(&[]).is_empty());
    assert!(slow_hull(&[vector![0.0, 0.0]]).is_empty());
    let two = slow_hull(&[vector![0.0, 0.0], vector![1.0, 1.0]]);
    assert!(two.is_empty());
    assert_eq!(two.iterations, 0);
}

#[test]
fn collinear_edge_point_still_encloses() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ];
    let hull = slow_hull(&pts);
    // best effort: the collinear midpoint is kept as a vertex here
    assert_eq!(hull.boundary[0], vector![4.0, 0.0]);
    assert_eq!(hull.len(), 5);
    assert!(encloses_all(&hull.boundary, &pts));
}

#[test]
fn all_collinear_walk_terminates() {
    let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]];
    let (edges, _) = hull_edges(&pts);
    assert_eq!(edges.len(), 6);
    let hull = slow_hull(&pts);
    assert_eq!(
        hull.boundary,
        vec![vector![2.0, 0.0], vector![0.0, 0.0], vector![1.0, 0.0]]
    );
}

#[test]
fn duplicate_points_walk_terminates() {
    let pts = vec![
        vector![0.0, 0.0],
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
        vector![1.0, 0.0],
    ];
    let hull = slow_hull(&pts);
    assert!(!hull.is_empty());
    assert!(hull.len() <= pts.len());
}

#[test]
fn matches_fast_on_random_sets() {
    let cfg = UniformCfg {
        count: 12,
        lo: -10.0,
        hi: 10.0,
    };
    for index in 0..64 {
        let pts = draw_points_uniform(cfg, ReplayToken { seed: 7, index });
        let fast = fast_hull(&pts);
        let slow = slow_hull(&pts);
        assert!(same_vertex_set(&fast.boundary, &slow.boundary), "index {index}");
        // both are counter-clockwise, so they differ only by the starting vertex
        assert!(same_cycle(&fast.boundary, &slow.boundary), "index {index}");
        assert!(is_convex_ccw(&slow.boundary));
    }
}

#[test]
fn slow_costs_an_order_of_magnitude_more() {
    let cfg = UniformCfg {
        count: 40,
        lo: 0.0,
        hi: 100.0,
    };
    for index in 0..8 {
        let pts = draw_points_uniform(cfg, ReplayToken { seed: 2024, index });
        let fast = fast_hull(&pts);
        let slow = slow_hull(&pts);
        assert!(slow.iterations >= 10 * fast.iterations, "index {index}");
    }
}
