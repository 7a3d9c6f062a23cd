//! Coordinate mapping between the engine's world space and a display surface.
//!
//! Nothing here draws; these are the conversions a renderer needs to place
//! engine output on a square canvas or a bounded cell grid.

use crate::math::{GridPoint, Point2};

/// Maps a world point to canvas coordinates.
///
/// The world origin sits at the canvas center and the y axis points up, so
/// canvas `y` is inverted.
#[must_use]
pub fn to_canvas_coords(point: &Point2, canvas_size: f64) -> Point2 {
    let center = canvas_size / 2.0;
    Point2::new(center + point.x, center - point.y)
}

/// Canvas-space endpoints of the line `y = slope·x + intercept`, spanning
/// the full canvas width.
#[must_use]
pub fn reflection_guide(slope: f64, intercept: f64, canvas_size: f64) -> (Point2, Point2) {
    let half = canvas_size / 2.0;
    let left = Point2::new(-half, slope * -half + intercept);
    let right = Point2::new(half, slope * half + intercept);
    (
        to_canvas_coords(&left, canvas_size),
        to_canvas_coords(&right, canvas_size),
    )
}

/// A square block of grid cells `min..=max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridExtent {
    /// Lowest coordinate on both axes.
    pub min: i32,
    /// Highest coordinate on both axes, inclusive.
    pub max: i32,
}

impl Default for GridExtent {
    fn default() -> Self {
        Self { min: -20, max: 20 }
    }
}

impl GridExtent {
    /// Creates an extent, swapping the bounds if given in reverse.
    #[must_use]
    pub fn new(a: i32, b: i32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Number of cells along one side.
    #[must_use]
    pub fn side(&self) -> u64 {
        u64::from(self.max.abs_diff(self.min)) + 1
    }

    /// Returns `true` if `point` lies inside the extent.
    #[must_use]
    pub fn contains(&self, point: &GridPoint) -> bool {
        (self.min..=self.max).contains(&point.x) && (self.min..=self.max).contains(&point.y)
    }

    /// Cells in display order: rows from the top (`y = max`) down, each row
    /// left to right.
    pub fn cells(&self) -> impl Iterator<Item = GridPoint> + '_ {
        (self.min..=self.max)
            .rev()
            .flat_map(move |y| (self.min..=self.max).map(move |x| GridPoint::new(x, y)))
    }

    /// Keeps the points of `line` that fall inside the extent, preserving order.
    #[must_use]
    pub fn clip(&self, line: &[GridPoint]) -> Vec<GridPoint> {
        line.iter().copied().filter(|p| self.contains(p)).collect()
    }
}
