//! Hull sizes and timings for annulus samples of growing size.
//!
//! Usage:
//!   cargo run --release -p quickhull --example annulus_hull -- 0.9
//!
//! The optional argument is the inner radius (outer radius is 1). Thin rings
//! put many points on the hull and make the recursion deep and wide.

use quickhull::gen::{sample_annulus, AnnulusCfg};
use quickhull::{convex_hull_timed, HullCfg, Vec2};

fn main() {
    let inner = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.0);
    for exp in 3..=6 {
        let cfg = AnnulusCfg {
            count: 10usize.pow(exp),
            center: Vec2::zeros(),
            inner_radius: inner,
            outer_radius: 1.0,
        };
        let pts = match sample_annulus(&cfg, 2025) {
            Ok(pts) => pts,
            Err(e) => {
                eprintln!("annulus_hull: {e}");
                return;
            }
        };
        for hull_cfg in [HullCfg::sequential(), HullCfg::parallel(None)] {
            let run = convex_hull_timed(&pts, &hull_cfg).expect("non-empty input");
            println!(
                "n=1e{exp} {hull_cfg}: H={}, {:.3} ms",
                run.hull.len(),
                run.elapsed.as_secs_f64() * 1e3
            );
        }
    }
}
