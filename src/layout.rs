//! Circular node layout — a pure map from node count to 2-D positions.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Edge length of the square layout container.
pub const CONTAINER_SIZE: f64 = 600.0;

const MAX_RADIUS: f64 = 200.0;
const RADIUS_PER_NODE: f64 = 25.0;

/// A 2-D point in layout space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Place `n` nodes evenly on a circle around the container center, starting
/// at twelve o'clock. The radius grows with the node count up to a cap so
/// small graphs stay compact and large graphs stay inside the container.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn circular_positions(n: usize) -> Vec<Point> {
    if n == 0 {
        return Vec::new();
    }
    let center = CONTAINER_SIZE / 2.0;
    let radius = MAX_RADIUS.min(RADIUS_PER_NODE * n as f64);
    (0..n)
        .map(|i| {
            let angle = (i as f64) * TAU / (n as f64) - FRAC_PI_2;
            Point { x: center + radius * angle.cos(), y: center + radius * angle.sin() }
        })
        .collect()
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod tests;
