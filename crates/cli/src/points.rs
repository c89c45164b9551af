//! JSON point files and hull reports.
//!
//! Point file: a JSON array of `[x, y]` pairs, e.g. `[[0, 0], [4, 0], [2, 4]]`.

use anyhow::{bail, Context, Result};
use hulls::{Algorithm, Hull, Point};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(transparent)]
struct PointFile(Vec<[f64; 2]>);

/// Parse a point file body. Rejects non-finite coordinates.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let PointFile(raw) = serde_json::from_str(text).context("parsing point list")?;
    let mut out = Vec::with_capacity(raw.len());
    for (i, [x, y]) in raw.into_iter().enumerate() {
        if !(x.is_finite() && y.is_finite()) {
            bail!("point {i} has a non-finite coordinate ({x}, {y})");
        }
        out.push(Point::new(x, y));
    }
    Ok(out)
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("in {}", path.display()))
}

pub fn points_to_json(points: &[Point]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

/// One algorithm's result as written by `cli hull`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HullReport {
    pub algorithm: String,
    pub n: usize,
    pub boundary: Vec<[f64; 2]>,
    pub iterations: usize,
}

impl HullReport {
    pub fn new(algo: Algorithm, n: usize, hull: &Hull) -> Self {
        Self {
            algorithm: algo.name().to_string(),
            n,
            boundary: points_to_json(&hull.boundary),
            iterations: hull.iterations,
        }
    }
}
