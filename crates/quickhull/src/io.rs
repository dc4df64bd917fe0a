//! Point files: `n` on the first line, then `n` lines of `x y`.
//!
//! Parsing is whitespace-token based, so pairs may also share lines. Tokens
//! after the `n`-th pair are ignored. Writing uses Rust's shortest round-trip
//! float formatting, so a written file reads back to identical points.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::Vec2;

#[derive(Debug, thiserror::Error)]
pub enum PointsIoError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("point count is missing")]
    MissingCount,
    #[error("invalid point count {0:?}")]
    BadCount(String),
    #[error("invalid coordinate {token:?} in point {index}")]
    BadCoordinate { index: usize, token: String },
    #[error("expected {expected} points, found {found}")]
    Truncated { expected: usize, found: usize },
}

/// Parse the point-file text format.
pub fn parse_points(text: &str) -> Result<Vec<Vec2>, PointsIoError> {
    let mut tokens = text.split_whitespace();
    let count_tok = tokens.next().ok_or(PointsIoError::MissingCount)?;
    let count: usize = count_tok
        .parse()
        .map_err(|_| PointsIoError::BadCount(count_tok.to_string()))?;
    // Each pair needs at least four bytes ("x y\n"); the header count is untrusted.
    let mut points = Vec::with_capacity(count.min(text.len() / 4));
    for index in 0..count {
        let (Some(xs), Some(ys)) = (tokens.next(), tokens.next()) else {
            return Err(PointsIoError::Truncated {
                expected: count,
                found: index,
            });
        };
        let coord = |tok: &str| {
            tok.parse::<f64>()
                .map_err(|_| PointsIoError::BadCoordinate {
                    index,
                    token: tok.to_string(),
                })
        };
        points.push(Vec2::new(coord(xs)?, coord(ys)?));
    }
    Ok(points)
}

/// Render points in the point-file text format.
pub fn format_points(points: &[Vec2]) -> String {
    let mut out = String::with_capacity(16 + points.len() * 32);
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", points.len());
    for p in points {
        let _ = writeln!(out, "{} {}", p.x, p.y);
    }
    out
}

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Vec2>, PointsIoError> {
    let text = fs::read_to_string(path)?;
    parse_points(&text)
}

pub fn write_points<P: AsRef<Path>>(path: P, points: &[Vec2]) -> Result<(), PointsIoError> {
    fs::write(path, format_points(points))?;
    Ok(())
}
