//! Baseline partition step.
//!
//! For a directed baseline `A→B` and a candidate set `S`, keep the points that
//! lie strictly on the counter-clockwise side of `B − A` and pick the one
//! farthest from the line.
//!
//! Per point `E`: `D = project(E − A, AB) + A`, `DE = E − D`,
//! `relativity = DE · ccw_normal(AB)`. `E` is outward iff `relativity > 0`.
//! The pivot is the outward point with the largest `|DE|²`; on exact ties the
//! first one in input order wins.

use rayon::prelude::*;

use crate::vector::{add, ccw_normal, dot, project, sqr_magnitude, sub};
use crate::Vec2;

/// Directed segment `a → b`. The outward half-plane is left of the direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Baseline {
    pub a: Vec2,
    pub b: Vec2,
}

impl Baseline {
    #[inline]
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    /// Same endpoints, opposite direction (and opposite outward side).
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.b - self.a
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}

/// Line frame computed once per partition call.
#[derive(Clone, Copy, Debug)]
struct Frame {
    a: Vec2,
    ab: Vec2,
    normal: Vec2,
}

impl Frame {
    #[inline]
    fn of(base: Baseline) -> Self {
        let ab = base.direction();
        Self {
            a: base.a,
            ab,
            normal: ccw_normal(ab),
        }
    }

    /// Returns `|DE|²` if `e` is strictly outward.
    #[inline]
    fn score(&self, e: Vec2) -> Option<f64> {
        let d = add(project(sub(e, self.a), self.ab), self.a);
        let de = sub(e, d);
        if dot(de, self.normal) > 0.0 {
            Some(sqr_magnitude(de))
        } else {
            None
        }
    }
}

/// Outcome of one partition step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    /// Points strictly outward of the baseline, in input order.
    pub outward: Vec<Vec2>,
    /// Farthest outward point, if any has a positive squared distance.
    pub pivot: Option<Vec2>,
}

impl Partition {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.pivot.is_none()
    }
}

/// Sequential partition: one pass over `points`.
pub fn partition(base: Baseline, points: &[Vec2]) -> Partition {
    let frame = Frame::of(base);
    let mut outward = Vec::new();
    let mut pivot = None;
    let mut best = 0.0;
    for &e in points {
        if let Some(d2) = frame.score(e) {
            if d2 > best {
                pivot = Some(e);
                best = d2;
            }
            outward.push(e);
        }
    }
    Partition { outward, pivot }
}

/// Data-parallel partition: rayon map + order-preserving reduce.
///
/// Produces exactly what [`partition`] produces, including the first-max
/// tie-break, because the reduction only replaces the left candidate on a
/// strictly larger right one.
pub fn partition_par(base: Baseline, points: &[Vec2]) -> Partition {
    let frame = Frame::of(base);
    let scored: Vec<(Vec2, f64)> = points
        .par_iter()
        .filter_map(|&e| frame.score(e).map(|d2| (e, d2)))
        .collect();
    let pivot = scored
        .par_iter()
        .copied()
        .reduce_with(|l, r| if r.1 > l.1 { r } else { l })
        .filter(|&(_, d2)| d2 > 0.0)
        .map(|(e, _)| e);
    let outward = scored.into_iter().map(|(e, _)| e).collect();
    Partition { outward, pivot }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn keeps_only_left_side() {
        let base = Baseline::new(v(0.0, 0.0), v(4.0, 0.0));
        let pts = [v(1.0, 1.0), v(2.0, -1.0), v(3.0, 0.0), v(2.0, 3.0)];
        let p = partition(base, &pts);
        assert_eq!(p.outward, vec![v(1.0, 1.0), v(2.0, 3.0)]);
        assert_eq!(p.pivot, Some(v(2.0, 3.0)));
    }

    #[test]
    fn reversed_baseline_flips_side() {
        let base = Baseline::new(v(0.0, 0.0), v(4.0, 0.0)).reversed();
        let pts = [v(1.0, 1.0), v(2.0, -1.0), v(3.0, 0.0)];
        let p = partition(base, &pts);
        assert_eq!(p.outward, vec![v(2.0, -1.0)]);
        assert_eq!(p.pivot, Some(v(2.0, -1.0)));
    }

    #[test]
    fn on_line_points_are_not_outward() {
        let base = Baseline::new(v(0.0, 0.0), v(3.0, 0.0));
        let pts = [v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 0.0)];
        let p = partition(base, &pts);
        assert!(p.outward.is_empty());
        assert!(p.is_terminal());
    }

    #[test]
    fn first_max_wins_ties() {
        let base = Baseline::new(v(0.0, 0.0), v(4.0, 0.0));
        let pts = [v(1.0, 2.0), v(3.0, 2.0)];
        assert_eq!(partition(base, &pts).pivot, Some(v(1.0, 2.0)));
        let swapped = [v(3.0, 2.0), v(1.0, 2.0)];
        assert_eq!(partition(base, &swapped).pivot, Some(v(3.0, 2.0)));
    }

    #[test]
    fn degenerate_baseline_finds_nothing() {
        let base = Baseline::new(v(1.0, 1.0), v(1.0, 1.0));
        assert!(base.is_degenerate());
        let p = partition(base, &[v(1.0, 1.0), v(5.0, -2.0)]);
        assert!(p.outward.is_empty());
        assert!(p.pivot.is_none());
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(7);
        let pts: Vec<Vec2> = (0..5000)
            .map(|_| v(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
            .collect();
        let base = Baseline::new(v(-3.0, -8.0), v(6.0, 2.0));
        assert_eq!(partition(base, &pts), partition_par(base, &pts));
        assert_eq!(
            partition(base.reversed(), &pts),
            partition_par(base.reversed(), &pts)
        );
    }

    #[test]
    fn parallel_keeps_first_max_on_ties() {
        let base = Baseline::new(v(0.0, 0.0), v(100.0, 0.0));
        let mut pts: Vec<Vec2> = (0..2000).map(|i| v(i as f64 * 0.05, 1.0)).collect();
        pts[1500] = v(75.0, 9.0);
        pts[400] = v(20.0, 9.0);
        assert_eq!(partition_par(base, &pts).pivot, Some(v(20.0, 9.0)));
    }
}
