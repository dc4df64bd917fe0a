//! QuickHull convex hulls of 2D point sets, sequential and fork/join parallel.
//!
//! Layout
//! - `vector`: point/vector helpers on `Vec2` (dot, ccw normal, projection).
//! - `partition`: one baseline step (outward subset + farthest pivot).
//! - `hull`: recursive growth (sequential and rayon-parallel) and assembly.
//! - `gen`, `io`, `hash`, `validate`: point sources, point files, run
//!   fingerprints and geometric checks used around the core.
//!
//! The core is a pure function of its input: no global state, no mutation of
//! the caller's points. Logging goes through `tracing` at debug/trace level.

pub mod gen;
pub mod hash;
pub mod hull;
pub mod io;
pub mod partition;
pub mod validate;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2;

/// Point and vector type.
pub type Vec2 = Vector2<f64>;

pub use hull::{convex_hull, convex_hull_timed, HullCfg, HullError, HullRun, Strategy};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gen::{sample_annulus, AnnulusCfg, GenerateError};
    pub use crate::hash::hull_hash;
    pub use crate::hull::{
        convex_hull, convex_hull_timed, extremes, grow_parallel, grow_sequential, HullCfg,
        HullError, HullRun, Strategy,
    };
    pub use crate::io::{read_points, write_points, PointsIoError};
    pub use crate::partition::{partition, partition_par, Baseline, Partition};
    pub use crate::Vec2;
}
