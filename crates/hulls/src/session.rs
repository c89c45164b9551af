//! Caller-owned hull state for interactive front ends.
//!
//! Holds the point set being edited, the last computed hull and which
//! algorithm produced it. Editing the point set invalidates the hull. Nothing
//! here draws; a front end reads `points()`, `segments()` and `iterations()`.

use crate::types::{Algorithm, Hull, HullCfg, HullKind, Point};

#[derive(Clone, Debug, Default)]
pub struct Session {
    cfg: HullCfg,
    points: Vec<Point>,
    hull: Hull,
    kind: HullKind,
}

impl Session {
    pub fn new(cfg: HullCfg) -> Self {
        Self {
            cfg,
            ..Self::default()
        }
    }

    pub fn with_points(cfg: HullCfg, points: Vec<Point>) -> Self {
        Self {
            cfg,
            points,
            ..Self::default()
        }
    }

    /// Append a point and drop any hull computed for the previous set.
    pub fn add_point(&mut self, p: Point) {
        self.points.push(p);
        self.reset_hull();
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.reset_hull();
    }

    /// Monotone chain hull. No-op (returns false) below `cfg.min_points`.
    pub fn run_fast(&mut self) -> bool {
        if !self.has_enough_points() {
            return false;
        }
        self.hull = crate::fast::fast_hull(&self.points);
        self.kind = HullKind::Fast;
        true
    }

    /// Brute-force hull. No-op (returns false) below `cfg.min_points` or above
    /// `cfg.max_slow_points`.
    pub fn run_slow(&mut self) -> bool {
        if !self.has_enough_points() {
            return false;
        }
        if self.points.len() > self.cfg.max_slow_points {
            tracing::warn!(
                n = self.points.len(),
                max = self.cfg.max_slow_points,
                "slow hull refused: too many points"
            );
            return false;
        }
        self.hull = crate::slow::slow_hull(&self.points);
        self.kind = HullKind::Slow;
        true
    }

    pub fn run(&mut self, algo: Algorithm) -> bool {
        match algo {
            Algorithm::Fast => self.run_fast(),
            Algorithm::Slow => self.run_slow(),
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn boundary(&self) -> &[Point] {
        &self.hull.boundary
    }
    #[inline]
    pub fn kind(&self) -> HullKind {
        self.kind
    }
    #[inline]
    pub fn cfg(&self) -> HullCfg {
        self.cfg
    }
    /// Work counter of the current hull; `None` until a hull has been run.
    #[inline]
    pub fn iterations(&self) -> Option<usize> {
        match self.kind {
            HullKind::None => None,
            HullKind::Slow | HullKind::Fast => Some(self.hull.iterations),
        }
    }
    /// Closed-polygon edges of the current hull.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.hull.segments()
    }

    fn has_enough_points(&self) -> bool {
        self.points.len() >= self.cfg.min_points.max(3)
    }

    fn reset_hull(&mut self) {
        self.hull = Hull::empty();
        self.kind = HullKind::None;
    }
}
