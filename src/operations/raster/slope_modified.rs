use super::{walk, Deltas};
use crate::math::{round_to_grid, GridPoint};

/// Slope-intercept rasterization walked from `start` toward `end`.
///
/// The secondary coordinate is measured relative to the start point. No
/// deduplication is performed.
pub(super) fn rasterize(start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
    let deltas = Deltas::between(start, end);
    let (x0, y0) = (f64::from(start.x), f64::from(start.y));

    if deltas.x_dominant() {
        let m = deltas.slope();
        walk(start.x, end.x)
            .map(|x| GridPoint::new(x, round_to_grid(y0 + m * (f64::from(x) - x0))))
            .collect()
    } else {
        let m_inv = deltas.inverse_slope();
        walk(start.y, end.y)
            .map(|y| GridPoint::new(round_to_grid(x0 + m_inv * (f64::from(y) - y0)), y))
            .collect()
    }
}
