//! Geometric checks on hull output: convexity, containment, extremality.
//!
//! These are used by the test suites and by the CLI's `--verify` flag; the
//! hull algorithm itself never calls them.

use crate::Vec2;

/// `(b − o) × (c − o)`; positive for a counter-clockwise turn.
#[inline]
pub fn cross(o: Vec2, a: Vec2, b: Vec2) -> f64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}

/// Shoelace signed area; negative for clockwise boundaries.
pub fn signed_area(poly: &[Vec2]) -> f64 {
    let n = poly.len();
    if n < 3 {
        return 0.0;
    }
    let mut acc = 0.0;
    for i in 0..n {
        let p = poly[i];
        let q = poly[(i + 1) % n];
        acc += p.x * q.y - q.x * p.y;
    }
    0.5 * acc
}

/// All non-zero turns of the closed boundary share one sign.
///
/// Zero turns (repeated or collinear vertices) are ignored.
pub fn is_convex(poly: &[Vec2]) -> bool {
    let n = poly.len();
    if n < 3 {
        return true;
    }
    let mut sign = 0.0_f64;
    for i in 0..n {
        let prev = poly[(i + n - 1) % n];
        let cur = poly[i];
        let next = poly[(i + 1) % n];
        let turn = cross(prev, cur, next);
        if turn == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = turn.signum();
        } else if turn.signum() != sign {
            return false;
        }
    }
    true
}

/// `p` lies on or inside the convex boundary `poly`, up to `eps` in cross
/// product units.
///
/// Works for either winding. Boundaries with zero area are treated as the
/// segment between their extreme vertices.
pub fn contains_eps(poly: &[Vec2], p: Vec2, eps: f64) -> bool {
    let n = poly.len();
    match n {
        0 => false,
        1 => (poly[0] - p).norm() <= eps,
        _ => {
            let area = signed_area(poly);
            if area == 0.0 {
                return on_segment_hull(poly, p, eps);
            }
            let s = area.signum();
            (0..n).all(|i| {
                let a = poly[i];
                let b = poly[(i + 1) % n];
                a == b || s * cross(a, b, p) >= -eps
            })
        }
    }
}

fn on_segment_hull(poly: &[Vec2], p: Vec2, eps: f64) -> bool {
    let (mut lo, mut hi) = (poly[0], poly[0]);
    for &q in poly {
        if (q.x, q.y) < (lo.x, lo.y) {
            lo = q;
        }
        if (q.x, q.y) > (hi.x, hi.y) {
            hi = q;
        }
    }
    if lo == hi {
        return (lo - p).norm() <= eps;
    }
    let d = hi - lo;
    let t = (p - lo).dot(&d) / d.norm_squared();
    cross(lo, hi, p).abs() <= eps && (-eps..=1.0 + eps).contains(&t)
}

/// Every vertex of `poly` is one of `points` (exact coordinates).
pub fn is_subset_of(poly: &[Vec2], points: &[Vec2]) -> bool {
    poly.iter().all(|v| points.contains(v))
}
