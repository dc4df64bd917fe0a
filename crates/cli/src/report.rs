use std::fmt::Write as _;

use quickhull::Vec2;
use serde::Serialize;

/// How much the `hull` command prints to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogMode {
    /// Hull size, then one `x y` line per vertex.
    #[default]
    Plain,
    /// Method, counts, hash and timings; no coordinates.
    Quiet,
    /// Everything in `Quiet` plus every hull vertex.
    Verbose,
}

impl LogMode {
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Plain
        }
    }

    /// Default `tracing` filter for this mode (overridable via `RUST_LOG`).
    pub fn default_filter(self) -> &'static str {
        match self {
            Self::Plain => "info",
            Self::Quiet => "warn",
            Self::Verbose => "debug",
        }
    }
}

/// Result of one `hull` run, as printed or serialized.
#[derive(Debug, Serialize)]
pub struct HullReport {
    pub method: String,
    pub points: usize,
    pub hull: Vec<[f64; 2]>,
    pub hash: u64,
    pub elapsed_ms: f64,
}

impl HullReport {
    pub fn new(method: String, points: usize, hull: &[Vec2], hash: u64, elapsed_ms: f64) -> Self {
        Self {
            method,
            points,
            hull: hull.iter().map(|p| [p.x, p.y]).collect(),
            hash,
            elapsed_ms,
        }
    }

    pub fn render(&self, mode: LogMode) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        match mode {
            LogMode::Plain => {
                let _ = writeln!(out, "{}", self.hull.len());
                for [x, y] in &self.hull {
                    let _ = writeln!(out, "{x} {y}");
                }
            }
            LogMode::Quiet | LogMode::Verbose => {
                let _ = writeln!(out, "Method: {}.", self.method);
                let _ = writeln!(out, "Points: {}.", self.points);
                let _ = writeln!(out, "Convex Hull: {}.", self.hull.len());
                if mode == LogMode::Verbose {
                    for [x, y] in &self.hull {
                        let _ = writeln!(out, "\t{{ x: {x}, y: {y} }}");
                    }
                }
                let _ = writeln!(out, "Result hash: {}.", self.hash);
                let _ = writeln!(out, "Algorithm time: {:.3} milliseconds.", self.elapsed_ms);
            }
        }
        out
    }
}
