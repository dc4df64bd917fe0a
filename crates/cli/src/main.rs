use anyhow::{bail, ensure, Context, Result};
use clap::{Args, Parser, Subcommand};
use quickhull::gen::{sample_annulus, AnnulusCfg};
use quickhull::hash::hull_hash;
use quickhull::io::{read_points, write_points};
use quickhull::validate::{contains_eps, is_convex, is_subset_of};
use quickhull::{convex_hull_timed, HullCfg, Vec2};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;
mod report;

use report::{HullReport, LogMode};

#[derive(Parser)]
#[command(name = "quickhull")]
#[command(about = "Convex hulls of 2D point sets (QuickHull, sequential or fork/join parallel)")]
struct Cmd {
    /// Log level: all (prints every hull vertex, debug logs)
    #[arg(long, global = true, conflicts_with = "log_quiet")]
    log_verbose: bool,
    /// Log level: minimum (counts, hash and timings only)
    #[arg(long, global = true)]
    log_quiet: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull of a point file
    Hull(HullArgs),
    /// Sample points inside an annulus and write them to a point file
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct HullArgs {
    /// Point file: count on the first line, then `x y` per line
    #[arg(long)]
    file: PathBuf,
    /// Use the sequential algorithm instead of the parallel one
    #[arg(long, conflicts_with = "threads")]
    sequential: bool,
    /// Worker threads for the parallel algorithm (default: all cores)
    #[arg(long)]
    threads: Option<usize>,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Check convexity, containment and extremality of the result
    #[arg(long)]
    verify: bool,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Output point file
    #[arg(long)]
    file: PathBuf,
    /// Number of points
    #[arg(long)]
    count: usize,
    /// Outer radius
    #[arg(long)]
    outer: f64,
    /// Inner radius
    #[arg(long, default_value_t = 0.0)]
    inner: f64,
    /// Center offset
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    center: Option<Vec<f64>>,
    /// RNG seed (default: derived from the clock, recorded in the provenance sidecar)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let mode = LogMode::from_flags(cmd.log_verbose, cmd.log_quiet);
    init_tracing(mode);
    let start = Instant::now();
    let json = match &cmd.action {
        Action::Hull(args) => {
            print!("{}", hull(args, mode)?);
            args.json
        }
        Action::Generate(args) => {
            generate(args)?;
            false
        }
    };
    if let Some(line) = total_time_line(mode, json, start.elapsed()) {
        println!("{line}");
    }
    Ok(())
}

/// Trailing wall-clock line; omitted in plain mode and when stdout carries JSON.
fn total_time_line(mode: LogMode, json: bool, elapsed: Duration) -> Option<String> {
    if json || mode == LogMode::Plain {
        return None;
    }
    Some(format!(
        "Total time: {:.3} milliseconds.",
        elapsed.as_secs_f64() * 1e3
    ))
}

fn init_tracing(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(mode.default_filter()));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the `hull` command and returns the text to print.
fn hull(args: &HullArgs, mode: LogMode) -> Result<String> {
    let points = read_points(&args.file)
        .with_context(|| format!("reading points from {}", args.file.display()))?;
    ensure!(!points.is_empty(), "{} contains no points", args.file.display());

    let cfg = if args.sequential {
        HullCfg::sequential()
    } else {
        HullCfg::parallel(args.threads)
    };
    tracing::info!(method = %cfg, points = points.len(), "computing convex hull");
    let run = convex_hull_timed(&points, &cfg)?;
    tracing::info!(vertices = run.hull.len(), elapsed = ?run.elapsed, "hull done");

    if args.verify {
        verify(&points, &run.hull)?;
        tracing::info!("verified: convex, extremal, contains input");
    }

    let report = HullReport::new(
        cfg.to_string(),
        points.len(),
        &run.hull,
        hull_hash(&run.hull),
        run.elapsed.as_secs_f64() * 1e3,
    );
    if args.json {
        Ok(serde_json::to_string_pretty(&report)? + "\n")
    } else {
        Ok(report.render(mode))
    }
}

fn verify(points: &[Vec2], hull: &[Vec2]) -> Result<()> {
    if !is_convex(hull) {
        bail!("hull is not convex");
    }
    if !is_subset_of(hull, points) {
        bail!("hull has a vertex that is not an input point");
    }
    let scale = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(1.0, f64::max);
    let eps = 1e-9 * scale * scale;
    if let Some(p) = points.iter().find(|&&p| !contains_eps(hull, p, eps)) {
        bail!("input point ({}, {}) lies outside the hull", p.x, p.y);
    }
    Ok(())
}

fn generate(args: &GenerateArgs) -> Result<PathBuf> {
    let center = match args.center.as_deref() {
        Some([x, y]) => Vec2::new(*x, *y),
        Some(other) => bail!("--center takes 2 values, got {}", other.len()),
        None => Vec2::zeros(),
    };
    let cfg = AnnulusCfg {
        count: args.count,
        center,
        inner_radius: args.inner,
        outer_radius: args.outer,
    };
    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::info!(
        count = cfg.count,
        inner = cfg.inner_radius,
        outer = cfg.outer_radius,
        seed,
        "generating points"
    );
    let points = sample_annulus(&cfg, seed)?;
    tracing::debug!(first = ?points.first(), "sampled");

    create_parent(&args.file)?;
    write_points(&args.file, &points)
        .with_context(|| format!("writing points to {}", args.file.display()))?;
    let prov = provenance::write_sidecar(
        &args.file,
        "generate",
        serde_json::json!({
            "count": cfg.count,
            "center": [center.x, center.y],
            "inner_radius": cfg.inner_radius,
            "outer_radius": cfg.outer_radius,
            "seed": seed,
        }),
    )?;
    tracing::info!(out = %args.file.display(), provenance = %prov.display(), "wrote points");
    Ok(prov)
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::tempdir;

    #[test]
    fn cli_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn parses_hull_flags() {
        let cmd = Cmd::try_parse_from([
            "quickhull",
            "--log-quiet",
            "hull",
            "--file",
            "pts.txt",
            "--threads",
            "4",
        ])
        .unwrap();
        assert!(cmd.log_quiet);
        match cmd.action {
            Action::Hull(args) => {
                assert_eq!(args.threads, Some(4));
                assert!(!args.sequential);
            }
            Action::Generate(_) => panic!("expected hull"),
        }
        assert!(Cmd::try_parse_from([
            "quickhull", "hull", "--file", "p", "--sequential", "--threads", "2"
        ])
        .is_err());
    }

    #[test]
    fn parses_negative_center() {
        let cmd = Cmd::try_parse_from([
            "quickhull", "generate", "--file", "p", "--count", "5", "--outer", "2", "--center",
            "-1.5", "3",
        ])
        .unwrap();
        match cmd.action {
            Action::Generate(args) => assert_eq!(args.center, Some(vec![-1.5, 3.0])),
            Action::Hull(_) => panic!("expected generate"),
        }
    }

    #[test]
    fn generate_then_hull() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("data").join("ring.txt");
        let prov = generate(&GenerateArgs {
            file: file.clone(),
            count: 500,
            outer: 2.0,
            inner: 1.0,
            center: Some(vec![5.0, -5.0]),
            seed: Some(9),
        })
        .unwrap();
        assert!(prov.ends_with("ring.provenance.json"));

        let mut args = HullArgs {
            file,
            sequential: true,
            threads: None,
            json: false,
            verify: true,
        };
        let seq = hull(&args, LogMode::Plain).unwrap();
        args.sequential = false;
        args.threads = Some(2);
        let par = hull(&args, LogMode::Plain).unwrap();
        assert_eq!(seq, par);
        let n: usize = seq.lines().next().unwrap().parse().unwrap();
        assert_eq!(seq.lines().count(), n + 1);

        args.json = true;
        let doc: serde_json::Value = serde_json::from_str(&hull(&args, LogMode::Plain).unwrap()).unwrap();
        assert_eq!(doc["points"], 500);
        assert_eq!(doc["hull"].as_array().unwrap().len(), n);
    }

    #[test]
    fn total_time_stays_off_json_stdout() {
        let t = Duration::from_micros(1500);
        assert_eq!(total_time_line(LogMode::Plain, false, t), None);
        assert_eq!(
            total_time_line(LogMode::Quiet, false, t).as_deref(),
            Some("Total time: 1.500 milliseconds.")
        );
        assert_eq!(total_time_line(LogMode::Quiet, true, t), None);
        assert_eq!(total_time_line(LogMode::Verbose, true, t), None);
    }

    #[test]
    fn quiet_json_output_is_one_document() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("pts.txt");
        std::fs::write(&file, "4\n0 0\n1 0\n1 1\n0 1\n").unwrap();
        let args = HullArgs {
            file,
            sequential: true,
            threads: None,
            json: true,
            verify: false,
        };
        let mut out = hull(&args, LogMode::Quiet).unwrap();
        if let Some(line) = total_time_line(LogMode::Quiet, args.json, Duration::ZERO) {
            out.push_str(&line);
        }
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["hull"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn empty_point_file_is_an_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("empty.txt");
        std::fs::write(&file, "0\n").unwrap();
        let args = HullArgs {
            file,
            sequential: true,
            threads: None,
            json: false,
            verify: false,
        };
        let err = hull(&args, LogMode::Plain).unwrap_err();
        assert!(err.to_string().contains("contains no points"));
    }
}
