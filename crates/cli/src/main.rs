use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hulls::rand::{draw_points_uniform, ReplayToken, UniformCfg};
use hulls::validate::{encloses_all, is_convex_ccw, same_vertex_set};
use hulls::{compute, Algorithm, Hull, HullCfg, Point};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod provenance;

use points::{points_to_json, read_points, HullReport};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls: monotone chain (fast) vs brute-force edges (slow)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AlgoArg {
    Fast,
    Slow,
    Both,
}

impl AlgoArg {
    fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgoArg::Fast => &[Algorithm::Fast],
            AlgoArg::Slow => &[Algorithm::Slow],
            AlgoArg::Both => &[Algorithm::Fast, Algorithm::Slow],
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a JSON point file and print or write the result
    Hull {
        #[arg(long, value_enum, default_value_t = AlgoArg::Both)]
        algo: AlgoArg,
        #[arg(long)]
        input: PathBuf,
        /// Write JSON here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Fail unless every hull encloses the input (and the fast hull is strictly convex)
        #[arg(long)]
        verify: bool,
        /// Refuse the brute-force hull above this many points
        #[arg(long, default_value_t = HullCfg::default().max_slow_points)]
        max_slow_points: usize,
    },
    /// Write a reproducible random point set
    Random {
        #[arg(long, default_value_t = 10)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 0.0)]
        lo: f64,
        #[arg(long, default_value_t = 1.0)]
        hi: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            algo,
            input,
            out,
            verify,
            max_slow_points,
        } => {
            let cfg = HullCfg {
                max_slow_points,
                ..HullCfg::default()
            };
            hull(algo, &input, out.as_deref(), verify, cfg)
        }
        Action::Random {
            count,
            seed,
            index,
            lo,
            hi,
            out,
        } => random(UniformCfg { count, lo, hi }, ReplayToken { seed, index }, &out),
        Action::Report => report(),
    }
}

fn hull(algo: AlgoArg, input: &Path, out: Option<&Path>, verify: bool, cfg: HullCfg) -> Result<()> {
    let pts = read_points(input)?;
    tracing::info!(input = %input.display(), n = pts.len(), algo = ?algo, "hull");
    let hulls = run_algorithms(algo, &pts, cfg)?;
    if verify {
        check(&pts, &hulls)?;
    }

    let reports: Vec<HullReport> = hulls
        .iter()
        .map(|(a, h)| HullReport::new(*a, pts.len(), h))
        .collect();
    let body = match reports.as_slice() {
        [single] => serde_json::to_vec_pretty(single)?,
        many => serde_json::to_vec_pretty(many)?,
    };
    match out {
        Some(path) => {
            write_file(path, &body)?;
            let params = serde_json::json!({
                "algo": format!("{algo:?}").to_lowercase(),
                "input": input.to_string_lossy(),
                "n": pts.len(),
                "verify": verify,
                "max_slow_points": cfg.max_slow_points,
            });
            provenance::write_sidecar(path, Payload::new("hull", params))?;
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }
    Ok(())
}

fn run_algorithms(algo: AlgoArg, pts: &[Point], cfg: HullCfg) -> Result<Vec<(Algorithm, Hull)>> {
    if pts.len() < cfg.min_points {
        tracing::warn!(n = pts.len(), "fewer than {} points: hull undefined", cfg.min_points);
    }
    let mut out = Vec::new();
    for &a in algo.algorithms() {
        if a == Algorithm::Slow && pts.len() > cfg.max_slow_points {
            bail!(
                "slow hull refused: {} points exceeds --max-slow-points {}",
                pts.len(),
                cfg.max_slow_points
            );
        }
        let h = compute(a, pts);
        tracing::info!(algo = a.name(), hull_len = h.len(), iterations = h.iterations, "done");
        out.push((a, h));
    }
    Ok(out)
}

fn check(pts: &[Point], hulls: &[(Algorithm, Hull)]) -> Result<()> {
    if pts.len() < 3 {
        return Ok(());
    }
    for (a, h) in hulls {
        if !encloses_all(&h.boundary, pts) {
            bail!("{} hull does not enclose every input point", a.name());
        }
        if *a == Algorithm::Fast && h.len() >= 3 && !is_convex_ccw(&h.boundary) {
            bail!("fast hull is not strictly convex");
        }
    }
    if let [(_, f), (_, s)] = hulls {
        if !same_vertex_set(&f.boundary, &s.boundary) {
            // collinear or duplicate inputs: the brute-force walk is best-effort
            tracing::warn!("fast and slow hulls have different vertex sets");
        }
    }
    Ok(())
}

fn random(cfg: UniformCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    tracing::info!(count = cfg.count, seed = tok.seed, index = tok.index, "random");
    let pts = draw_points_uniform(cfg, tok);
    write_file(out, &serde_json::to_vec(&points_to_json(&pts))?)?;
    let params = serde_json::json!({
        "count": cfg.count,
        "seed": tok.seed,
        "index": tok.index,
        "lo": cfg.lo,
        "hi": cfg.hi,
    });
    provenance::write_sidecar(out, Payload::new("random", params))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block("report", serde_json::json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_file(path: &Path, body: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))
}
