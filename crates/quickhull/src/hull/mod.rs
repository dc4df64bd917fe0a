//! QuickHull: hull growth and top-level assembly.
//!
//! Purpose
//! - `grow_*(A, B, S)` returns the hull vertices strictly outward of the
//!   directed baseline `A→B`, ordered from `A` towards `B`, endpoints excluded.
//! - `convex_hull` finds the two x-extremes and splices
//!   `[left] ++ grow(left, right) ++ [right] ++ grow(right, left)`.
//!
//! Execution strategies
//! - `Sequential`: plain recursion.
//! - `Parallel`: every non-terminal call forks its two sub-baselines with
//!   `rayon::join` and merges after both return. Branches only read their
//!   parent's outward set, so the join is the only synchronization.
//! - Both strategies pick the same pivots, so for inputs without exact
//!   farthest-point ties they return identical sequences.
//!
//! Degenerate inputs
//! - Collinear input yields just the two extremes.
//! - All-coincident input yields the point twice (`left == right`).
//! - Empty input is rejected with `HullError::EmptyInput`.

mod parallel;
mod sequential;

pub use parallel::grow_parallel;
pub use sequential::grow_sequential;

use std::fmt;
use std::time::{Duration, Instant};

use crate::partition::{Baseline, Partition};
use crate::Vec2;

/// Outward-point count below which a parallel branch stops forking.
pub const DEFAULT_SEQUENTIAL_CUTOFF: usize = 256;
/// Candidate count from which a partition step runs data-parallel.
pub const DEFAULT_PAR_PARTITION_MIN: usize = 1 << 15;

#[derive(Debug, thiserror::Error)]
pub enum HullError {
    #[error("input point set is empty")]
    EmptyInput,
    #[error("thread count must be positive")]
    InvalidThreadCount,
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    #[default]
    Parallel,
}

/// Hull configuration.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    pub strategy: Strategy,
    /// Worker count for `Parallel`. `None` uses rayon's global pool.
    pub threads: Option<usize>,
    /// Branches with fewer outward points recurse sequentially.
    pub sequential_cutoff: usize,
    /// Partition steps over at least this many points use `partition_par`.
    pub par_partition_min: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            strategy: Strategy::Parallel,
            threads: None,
            sequential_cutoff: DEFAULT_SEQUENTIAL_CUTOFF,
            par_partition_min: DEFAULT_PAR_PARTITION_MIN,
        }
    }
}

impl HullCfg {
    pub fn sequential() -> Self {
        Self {
            strategy: Strategy::Sequential,
            ..Self::default()
        }
    }

    pub fn parallel(threads: Option<usize>) -> Self {
        Self {
            strategy: Strategy::Parallel,
            threads,
            ..Self::default()
        }
    }
}

impl fmt::Display for HullCfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strategy {
            Strategy::Sequential => write!(f, "Sequential"),
            Strategy::Parallel => {
                let n = self.threads.unwrap_or_else(rayon::current_num_threads);
                write!(f, "Parallel {{ threads: {n} }}")
            }
        }
    }
}

/// Hull plus the time spent inside the algorithm.
#[derive(Clone, Debug)]
pub struct HullRun {
    pub hull: Vec<Vec2>,
    pub elapsed: Duration,
}

/// Leftmost (min x, then min y) and rightmost (max x, then max y) points.
pub fn extremes(points: &[Vec2]) -> Option<(Vec2, Vec2)> {
    let first = *points.first()?;
    Some(points.iter().skip(1).fold((first, first), |(l, r), &p| {
        let l = if p.x < l.x || (p.x == l.x && p.y < l.y) {
            p
        } else {
            l
        };
        let r = if p.x > r.x || (p.x == r.x && p.y > r.y) {
            p
        } else {
            r
        };
        (l, r)
    }))
}

/// Convex hull of `points` as one closed boundary (last point connects to first).
pub fn convex_hull(points: &[Vec2], cfg: &HullCfg) -> Result<Vec<Vec2>, HullError> {
    let (left, right) = extremes(points).ok_or(HullError::EmptyInput)?;
    tracing::debug!(points = points.len(), strategy = ?cfg.strategy, "convex_hull");
    match cfg.strategy {
        Strategy::Sequential => {
            let upper = grow_sequential(left, right, points);
            let lower = grow_sequential(right, left, points);
            Ok(assemble(left, upper, right, lower))
        }
        Strategy::Parallel => {
            let run = || {
                let (upper, lower) = rayon::join(
                    || grow_parallel(left, right, points, cfg),
                    || grow_parallel(right, left, points, cfg),
                );
                assemble(left, upper, right, lower)
            };
            match cfg.threads {
                Some(0) => Err(HullError::InvalidThreadCount),
                Some(n) => {
                    let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                    Ok(pool.install(run))
                }
                None => Ok(run()),
            }
        }
    }
}

/// [`convex_hull`] with wall-clock timing of the computation.
pub fn convex_hull_timed(points: &[Vec2], cfg: &HullCfg) -> Result<HullRun, HullError> {
    let start = Instant::now();
    let hull = convex_hull(points, cfg)?;
    Ok(HullRun {
        hull,
        elapsed: start.elapsed(),
    })
}

fn assemble(left: Vec2, upper: Vec<Vec2>, right: Vec2, lower: Vec<Vec2>) -> Vec<Vec2> {
    let mut hull = Vec::with_capacity(upper.len() + lower.len() + 2);
    hull.push(left);
    hull.extend(upper);
    hull.push(right);
    hull.extend(lower);
    hull
}

/// Pivot to recurse on, or `None` when this baseline is a final hull edge.
///
/// A pivot equal to an endpoint can only come from rounding in the
/// projection; recursing on it would repeat the same baseline forever.
#[inline]
fn split_point(part: &Partition, base: Baseline) -> Option<Vec2> {
    part.pivot.filter(|&c| c != base.a && c != base.b)
}

/// `left ++ [pivot] ++ right`, reusing `left`'s allocation.
#[inline]
fn splice(mut left: Vec<Vec2>, pivot: Vec2, right: Vec<Vec2>) -> Vec<Vec2> {
    left.reserve(right.len() + 1);
    left.push(pivot);
    left.extend(right);
    left
}
