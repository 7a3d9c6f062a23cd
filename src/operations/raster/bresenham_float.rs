use std::cmp::Ordering;

use super::Deltas;
use crate::math::{round_to_grid, GridPoint};

/// Bresenham-style stepping with a floating-point slope accumulator.
///
/// The dominant coordinate moves one unit per step until it equals the
/// endpoint exactly; the secondary coordinate accumulates `slope * step` and is
/// rounded only when emitted.
pub(super) fn rasterize(start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
    let deltas = Deltas::between(start, end);
    if deltas.is_zero() {
        return vec![start];
    }

    let sx = unit_step(deltas.dx);
    let sy = unit_step(deltas.dy);
    let mut points = Vec::new();

    if deltas.x_dominant() {
        let m = deltas.slope();
        let mut x = start.x;
        let mut y = f64::from(start.y);
        loop {
            points.push(GridPoint::new(x, round_to_grid(y)));
            if x == end.x {
                break;
            }
            x += sx;
            y += m * f64::from(sx);
        }
    } else {
        let m_inv = deltas.inverse_slope();
        let mut x = f64::from(start.x);
        let mut y = start.y;
        loop {
            points.push(GridPoint::new(round_to_grid(x), y));
            if y == end.y {
                break;
            }
            y += sy;
            x += m_inv * f64::from(sy);
        }
    }
    points
}

fn unit_step(delta: i64) -> i32 {
    match delta.cmp(&0) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
