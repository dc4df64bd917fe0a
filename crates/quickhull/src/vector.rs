//! 2D vector primitive used by the partition step.
//!
//! Points and vectors share one type, `Vec2 = nalgebra::Vector2<f64>`.
//! Equality is nalgebra's exact component-wise `PartialEq` (no epsilon), so two
//! points are the same point iff their coordinates are bit-for-bit equal floats.
//!
//! All helpers are pure and total. IEEE-754 rules apply unchanged: `NaN` and
//! `Inf` propagate instead of being trapped.

use crate::Vec2;

#[inline]
pub fn sub(a: Vec2, b: Vec2) -> Vec2 {
    a - b
}

#[inline]
pub fn add(a: Vec2, b: Vec2) -> Vec2 {
    a + b
}

#[inline]
pub fn scale(v: Vec2, k: f64) -> Vec2 {
    v * k
}

#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// `dot(v, v)`.
#[inline]
pub fn sqr_magnitude(v: Vec2) -> f64 {
    dot(v, v)
}

/// Counter-clockwise normal `(-v.y, v.x)` (90° rotation, same length).
#[inline]
pub fn ccw_normal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Orthogonal projection of `v` onto the line spanned by `onto`.
///
/// Returns the zero vector when `onto` has zero length, so degenerate
/// baselines never divide by zero.
#[inline]
pub fn project(v: Vec2, onto: Vec2) -> Vec2 {
    let onto_sqr = sqr_magnitude(onto);
    if onto_sqr == 0.0 {
        return Vec2::zeros();
    }
    scale(onto, dot(v, onto) / onto_sqr)
}
