//! Order-sensitive fingerprint of a point sequence, for comparing runs.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::Vec2;

#[inline]
fn point_hash(p: Vec2) -> u64 {
    let mut h = DefaultHasher::new();
    p.x.to_bits().hash(&mut h);
    p.y.to_bits().hash(&mut h);
    h.finish()
}

/// Fingerprint of `points` that changes with coordinates and with order.
pub fn hull_hash(points: &[Vec2]) -> u64 {
    points
        .iter()
        .fold(0u64, |acc, &p| acc.rotate_left(1) ^ point_hash(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_and_order_sensitive() {
        let a = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 2.0), Vec2::new(3.0, -1.0)];
        let b = [a[1], a[0], a[2]];
        assert_eq!(hull_hash(&a), hull_hash(&a.to_vec()));
        assert_ne!(hull_hash(&a), hull_hash(&b));
        assert_eq!(hull_hash(&[]), 0);
    }

    #[test]
    fn distinguishes_signed_zero() {
        assert_ne!(
            hull_hash(&[Vec2::new(0.0, 1.0)]),
            hull_hash(&[Vec2::new(-0.0, 1.0)])
        );
    }
}
