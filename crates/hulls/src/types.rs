//! Shared value types: points, hull results, algorithm tags, configuration.

use nalgebra::Vector2;

/// A point in the plane. Equality is exact coordinate equality.
pub type Point = Vector2<f64>;

/// Hull boundary plus the work counter of the run that produced it.
///
/// The boundary is closed implicitly: the last point connects back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hull {
    pub boundary: Vec<Point>,
    pub iterations: usize,
}

impl Hull {
    /// The undefined hull (fewer than 3 input points).
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.boundary.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boundary.is_empty()
    }
    /// Closed-polygon edges `(b[i], b[i+1 mod len])`; none for a boundary of 0 or 1 points.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let m = self.boundary.len();
        let count = if m > 1 { m } else { 0 };
        (0..count).map(move |i| (self.boundary[i], self.boundary[(i + 1) % m]))
    }
}

/// Which algorithm to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Fast,
    Slow,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fast => "fast",
            Algorithm::Slow => "slow",
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fast" | "monotone" => Ok(Algorithm::Fast),
            "slow" | "brute" => Ok(Algorithm::Slow),
            other => Err(format!("unknown algorithm `{other}` (expected fast|slow)")),
        }
    }
}

/// Which algorithm produced the hull a caller currently holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HullKind {
    #[default]
    None,
    Slow,
    Fast,
}

impl From<Algorithm> for HullKind {
    fn from(a: Algorithm) -> Self {
        match a {
            Algorithm::Fast => HullKind::Fast,
            Algorithm::Slow => HullKind::Slow,
        }
    }
}

/// Caller-side limits.
///
/// The algorithms themselves never refuse work; `Session` and the CLI consult
/// this before running the cubic one.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Hull is undefined below this many points.
    pub min_points: usize,
    /// Largest point set the brute-force hull is run on.
    pub max_slow_points: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            min_points: 3,
            max_slow_points: 1_000,
        }
    }
}
