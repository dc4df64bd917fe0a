use super::{splice, split_point};
use crate::partition::{partition, Baseline};
use crate::Vec2;

/// Hull vertices strictly outward of `a → b`, ordered from `a` to `b`.
///
/// Both children reuse the parent's outward set: a point inward of `AB` can
/// never be outward of `AC` or `CB`.
pub fn grow_sequential(a: Vec2, b: Vec2, points: &[Vec2]) -> Vec<Vec2> {
    let base = Baseline::new(a, b);
    let part = partition(base, points);
    let Some(c) = split_point(&part, base) else {
        return Vec::new();
    };
    tracing::trace!(candidates = points.len(), outward = part.outward.len(), "grow");
    let left = grow_sequential(a, c, &part.outward);
    let right = grow_sequential(c, b, &part.outward);
    splice(left, c, right)
}
