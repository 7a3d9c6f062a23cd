use std::collections::HashSet;

use super::Deltas;
use crate::math::{round_to_grid, GridPoint};

/// Slope-intercept rasterization over the dominant axis.
///
/// Iterates from the lower to the higher endpoint coordinate, so the output
/// order does not depend on which endpoint is `start`. Repeated points are
/// removed, keeping the first occurrence.
pub(super) fn rasterize(start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
    let deltas = Deltas::between(start, end);
    if deltas.is_zero() {
        return vec![start];
    }

    let points: Vec<GridPoint> = if deltas.x_dominant() {
        // y = m·x + b
        let m = deltas.slope();
        let b = f64::from(start.y) - m * f64::from(start.x);
        let (lo, hi) = (start.x.min(end.x), start.x.max(end.x));
        (lo..=hi)
            .map(|x| GridPoint::new(x, round_to_grid(m * f64::from(x) + b)))
            .collect()
    } else {
        let m_inv = deltas.inverse_slope();
        let (lo, hi) = (start.y.min(end.y), start.y.max(end.y));
        (lo..=hi)
            .map(|y| {
                let x = f64::from(start.x) + m_inv * (f64::from(y) - f64::from(start.y));
                GridPoint::new(round_to_grid(x), y)
            })
            .collect()
    };

    let mut seen = HashSet::with_capacity(points.len());
    points.into_iter().filter(|p| seen.insert(*p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    #[test]
    fn shallow_line_rounds_secondary_axis() {
        // m = 0.5: y = 0, 0.5, 1, 1.5, 2 -> 0, 1, 1, 2, 2
        let line = rasterize(p(0, 0), p(4, 2));
        assert_eq!(line, vec![p(0, 0), p(1, 1), p(2, 1), p(3, 2), p(4, 2)]);
    }

    #[test]
    fn iterates_from_lower_endpoint() {
        let forward = rasterize(p(0, 0), p(4, 2));
        let backward = rasterize(p(4, 2), p(0, 0));
        assert_eq!(forward, backward);
        assert_eq!(backward[0], p(0, 0));
    }

    #[test]
    fn steep_line_iterates_over_y() {
        let line = rasterize(p(0, 0), p(1, 4));
        // x = 0, 0.25, 0.5, 0.75, 1 -> 0, 0, 1, 1, 1
        assert_eq!(line, vec![p(0, 0), p(0, 1), p(1, 2), p(1, 3), p(1, 4)]);
    }

    #[test]
    fn vertical_line() {
        let line = rasterize(p(2, 3), p(2, -1));
        assert_eq!(line, vec![p(2, -1), p(2, 0), p(2, 1), p(2, 2), p(2, 3)]);
    }

    #[test]
    fn negative_coordinates_round_away_from_zero() {
        // m = -0.5 through the origin: y(1) = -0.5 -> -1
        let line = rasterize(p(0, 0), p(2, -1));
        assert_eq!(line, vec![p(0, 0), p(1, -1), p(2, -1)]);
    }

    #[test]
    fn output_has_no_duplicates() {
        let line = rasterize(p(-7, 3), p(9, -12));
        let unique: HashSet<_> = line.iter().collect();
        assert_eq!(unique.len(), line.len());
    }
}
