use super::{grow_sequential, splice, split_point, HullCfg};
use crate::partition::{partition, partition_par, Baseline};
use crate::Vec2;

/// Fork/join variant of [`grow_sequential`].
///
/// The two sub-baselines `a → c` and `c → b` run as a `rayon::join` pair; the
/// caller blocks (while helping the pool) until both return, then splices
/// `left ++ [c] ++ right`. Runs on whichever rayon pool is current.
pub fn grow_parallel(a: Vec2, b: Vec2, points: &[Vec2], cfg: &HullCfg) -> Vec<Vec2> {
    let base = Baseline::new(a, b);
    let part = if points.len() >= cfg.par_partition_min {
        partition_par(base, points)
    } else {
        partition(base, points)
    };
    let Some(c) = split_point(&part, base) else {
        return Vec::new();
    };
    let outward = part.outward;
    let (left, right) = if outward.len() < cfg.sequential_cutoff {
        (
            grow_sequential(a, c, &outward),
            grow_sequential(c, b, &outward),
        )
    } else {
        tracing::trace!(outward = outward.len(), "fork");
        rayon::join(
            || grow_parallel(a, c, &outward, cfg),
            || grow_parallel(c, b, &outward, cfg),
        )
    };
    splice(left, c, right)
}
