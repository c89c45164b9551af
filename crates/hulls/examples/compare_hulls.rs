//! Print the iteration counts of both hull algorithms on a few random sets.
//!
//! Usage:
//!   cargo run -p hulls --example compare_hulls -- 10
//!
//! The optional argument is the number of points per set (default 10).

use hulls::rand::{draw_points_uniform, ReplayToken, UniformCfg};
use hulls::validate::same_vertex_set;
use hulls::{fast_hull, slow_hull};

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(10);
    let cfg = UniformCfg {
        count: n,
        lo: 0.0,
        hi: 400.0,
    };
    for index in 0..5 {
        let pts = draw_points_uniform(cfg, ReplayToken { seed: 2025, index });
        let fast = fast_hull(&pts);
        let slow = slow_hull(&pts);
        println!(
            "set {index}: n={n}, hull={}, fast={} it, slow={} it, agree={}",
            fast.len(),
            fast.iterations,
            slow.iterations,
            same_vertex_set(&fast.boundary, &slow.boundary)
        );
    }
}
