use crate::math::GridPoint;

/// Integer-only Bresenham.
///
/// The error term is kept in `i64` so doubling it cannot overflow for any
/// pair of `i32` endpoints.
pub(super) fn rasterize(start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
    let dx = (i64::from(end.x) - i64::from(start.x)).abs();
    let dy = (i64::from(end.y) - i64::from(start.y)).abs();
    let sx = if start.x < end.x { 1 } else { -1 };
    let sy = if start.y < end.y { 1 } else { -1 };
    let mut err = dx - dy;
    let (mut x, mut y) = (start.x, start.y);

    let mut points = Vec::new();
    loop {
        points.push(GridPoint::new(x, y));
        if x == end.x && y == end.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    points
}
