//! Random planar point sets (replay tokens).
//!
//! Purpose
//! - Reproducible inputs for tests, benches, and the CLI `random` command.
//!   The same `(seed, index)` always yields the same points, so a bad case can
//!   be replayed by quoting its token.
//!
//! Samplers
//! - `draw_points_uniform`: uniform in an axis-aligned square.
//! - `draw_points_disk`: uniform in a disk (most points end up interior).

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Uniform sampler over the square `[lo, hi)²`.
#[derive(Clone, Copy, Debug)]
pub struct UniformCfg {
    pub count: usize,
    pub lo: f64,
    pub hi: f64,
}
impl Default for UniformCfg {
    fn default() -> Self {
        Self {
            count: 10,
            lo: 0.0,
            hi: 1.0,
        }
    }
}

/// Uniform sampler over a disk.
#[derive(Clone, Copy, Debug)]
pub struct DiskCfg {
    pub count: usize,
    pub center: Point,
    pub radius: f64,
}
impl Default for DiskCfg {
    fn default() -> Self {
        Self {
            count: 10,
            center: Vector2::zeros(),
            radius: 1.0,
        }
    }
}

/// Draw `cfg.count` points uniformly in `[lo, hi)²`. A degenerate range yields copies of `lo`.
pub fn draw_points_uniform(cfg: UniformCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = (cfg.lo.min(cfg.hi), cfg.lo.max(cfg.hi));
    let span = hi - lo;
    (0..cfg.count)
        .map(|_| {
            let x = lo + rng.gen::<f64>() * span;
            let y = lo + rng.gen::<f64>() * span;
            Vector2::new(x, y)
        })
        .collect()
}

/// Draw `cfg.count` points uniformly (by area) in the disk.
pub fn draw_points_disk(cfg: DiskCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let r0 = cfg.radius.abs();
    (0..cfg.count)
        .map(|_| {
            let theta = rng.gen::<f64>() * std::f64::consts::TAU;
            // sqrt keeps the density uniform in area
            let r = r0 * rng.gen::<f64>().sqrt();
            cfg.center + Vector2::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}
