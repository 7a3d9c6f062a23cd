use super::Deltas;
use crate::math::{round_to_grid, GridPoint};

/// Digital differential analyzer.
///
/// Takes `max(|dx|, |dy|)` unit steps, accumulating fractional increments in
/// floating point and rounding only when a point is emitted.
#[allow(clippy::cast_precision_loss)]
pub(super) fn rasterize(start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
    let deltas = Deltas::between(start, end);
    let steps = deltas.dx.unsigned_abs().max(deltas.dy.unsigned_abs());
    if steps == 0 {
        return vec![start];
    }

    let x_inc = deltas.dx as f64 / steps as f64;
    let y_inc = deltas.dy as f64 / steps as f64;
    let mut x = f64::from(start.x);
    let mut y = f64::from(start.y);

    let mut points = Vec::with_capacity(usize::try_from(steps + 1).unwrap_or_default());
    for _ in 0..=steps {
        points.push(GridPoint::new(round_to_grid(x), round_to_grid(y)));
        x += x_inc;
        y += y_inc;
    }
    points
}
