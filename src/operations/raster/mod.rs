//! Line rasterization between two integer grid points.
//!
//! Five classical strategies live side by side, each with its own artifacts
//! (rounding bias, walk direction, repeated points). [`LineStats`] measures
//! them on a common input.

mod bresenham_float;
mod bresenham_int;
mod dda;
mod slope_basic;
mod slope_modified;
mod stats;

use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::error::{GfxError, Result};
use crate::math::GridPoint;

pub use stats::LineStats;

/// Selects a line rasterization strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineAlgorithm {
    /// Slope-intercept form over the dominant axis, repeated points removed.
    #[cfg_attr(feature = "serde", serde(rename = "slope-basic"))]
    SlopeBasic,
    /// Slope-intercept form walked from the start point, no deduplication.
    #[cfg_attr(feature = "serde", serde(rename = "slope-mod"))]
    SlopeModified,
    /// Digital differential analyzer.
    #[cfg_attr(feature = "serde", serde(rename = "dda"))]
    Dda,
    /// Bresenham-style stepping with a floating-point slope accumulator.
    #[cfg_attr(feature = "serde", serde(rename = "bresenham-float"))]
    BresenhamFloat,
    /// Integer-only Bresenham.
    #[cfg_attr(feature = "serde", serde(rename = "bresenham-int"))]
    BresenhamInt,
}

impl LineAlgorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Self; 5] = [
        Self::SlopeBasic,
        Self::SlopeModified,
        Self::Dda,
        Self::BresenhamFloat,
        Self::BresenhamInt,
    ];

    /// Stable selector tag used by configuration layers.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::SlopeBasic => "slope-basic",
            Self::SlopeModified => "slope-mod",
            Self::Dda => "dda",
            Self::BresenhamFloat => "bresenham-float",
            Self::BresenhamInt => "bresenham-int",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SlopeBasic => "Slope-intercept (basic)",
            Self::SlopeModified => "Slope-intercept (modified)",
            Self::Dda => "DDA",
            Self::BresenhamFloat => "Bresenham (floating-point)",
            Self::BresenhamInt => "Bresenham (integer)",
        }
    }

    /// Returns `true` if the algorithm uses integer arithmetic only.
    #[must_use]
    pub const fn is_integer_only(self) -> bool {
        matches!(self, Self::BresenhamInt)
    }

    /// Rasterizes the segment from `start` to `end` with this algorithm.
    #[must_use]
    pub fn rasterize(self, start: GridPoint, end: GridPoint) -> Vec<GridPoint> {
        match self {
            Self::SlopeBasic => slope_basic::rasterize(start, end),
            Self::SlopeModified => slope_modified::rasterize(start, end),
            Self::Dda => dda::rasterize(start, end),
            Self::BresenhamFloat => bresenham_float::rasterize(start, end),
            Self::BresenhamInt => bresenham_int::rasterize(start, end),
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for LineAlgorithm {
    type Err = GfxError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.tag() == s)
            .ok_or_else(|| GfxError::UnknownAlgorithm(s.to_owned()))
    }
}

/// Rasterizes the segment from `start` to `end`.
///
/// The result always begins at `start` for every algorithm except
/// [`LineAlgorithm::SlopeBasic`], which walks from the lower endpoint.
/// A degenerate segment yields exactly `[start]`.
#[must_use]
pub fn compute_line(start: GridPoint, end: GridPoint, algorithm: LineAlgorithm) -> Vec<GridPoint> {
    algorithm.rasterize(start, end)
}

/// Rasterizes a segment selected by a string tag.
///
/// Unknown tags are not an error here: they produce an empty sequence so a
/// rendering layer can draw nothing.
#[must_use]
pub fn compute_line_by_tag(x0: i32, y0: i32, x1: i32, y1: i32, tag: &str) -> Vec<GridPoint> {
    match tag.parse::<LineAlgorithm>() {
        Ok(algorithm) => compute_line(GridPoint::new(x0, y0), GridPoint::new(x1, y1), algorithm),
        Err(err) => {
            debug!(%err, "unsupported selector, returning empty line");
            Vec::new()
        }
    }
}

/// Rasterizes the same segment with every algorithm, in [`LineAlgorithm::ALL`] order.
#[must_use]
pub fn rasterize_all(start: GridPoint, end: GridPoint) -> Vec<(LineAlgorithm, Vec<GridPoint>)> {
    LineAlgorithm::ALL
        .into_iter()
        .map(|algo| (algo, algo.rasterize(start, end)))
        .collect()
}

/// Rasterizes a line segment with a chosen algorithm.
pub struct RasterizeLine {
    start: GridPoint,
    end: GridPoint,
    algorithm: LineAlgorithm,
}

impl RasterizeLine {
    /// Creates a new `RasterizeLine` operation.
    #[must_use]
    pub fn new(start: GridPoint, end: GridPoint, algorithm: LineAlgorithm) -> Self {
        Self {
            start,
            end,
            algorithm,
        }
    }

    /// Executes the rasterization, returning the grid points in emission order.
    #[must_use]
    #[instrument(
        level = "debug",
        skip_all,
        fields(algorithm = %self.algorithm, start = %self.start, end = %self.end)
    )]
    pub fn execute(&self) -> Vec<GridPoint> {
        let points = compute_line(self.start, self.end, self.algorithm);
        debug!(count = points.len(), "rasterized");
        points
    }
}

/// Signed integer deltas between two endpoints.
#[derive(Debug, Clone, Copy)]
struct Deltas {
    dx: i64,
    dy: i64,
}

impl Deltas {
    fn between(start: GridPoint, end: GridPoint) -> Self {
        Self {
            dx: i64::from(end.x) - i64::from(start.x),
            dy: i64::from(end.y) - i64::from(start.y),
        }
    }

    fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }

    /// `x` is the dominant axis; ties go to `x`.
    fn x_dominant(self) -> bool {
        self.dx.unsigned_abs() >= self.dy.unsigned_abs()
    }

    /// `dy / dx`, or 0 for a vertical segment.
    #[allow(clippy::cast_precision_loss)]
    fn slope(self) -> f64 {
        if self.dx == 0 {
            0.0
        } else {
            self.dy as f64 / self.dx as f64
        }
    }

    /// `dx / dy`, or 0 for a horizontal segment.
    #[allow(clippy::cast_precision_loss)]
    fn inverse_slope(self) -> f64 {
        if self.dy == 0 {
            0.0
        } else {
            self.dx as f64 / self.dy as f64
        }
    }
}

/// Walks from `from` to `to` inclusive in unit steps, in either direction.
fn walk(from: i32, to: i32) -> impl Iterator<Item = i32> {
    let step = if to >= from { 1 } else { -1 };
    std::iter::successors(Some(from), move |&v| (v != to).then(|| v + step))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<GridPoint> {
        raw.iter().copied().map(GridPoint::from).collect()
    }

    #[test]
    fn tags_round_trip_through_from_str() {
        for algo in LineAlgorithm::ALL {
            assert_eq!(algo.tag().parse::<LineAlgorithm>().unwrap(), algo);
            assert_eq!(algo.to_string(), algo.tag());
        }
    }

    #[test]
    fn unknown_tag_is_an_error() {
        let err = "slope-intercept".parse::<LineAlgorithm>().unwrap_err();
        assert_eq!(err, GfxError::UnknownAlgorithm("slope-intercept".to_owned()));
    }

    #[test]
    fn unknown_tag_yields_empty_line() {
        assert!(compute_line_by_tag(0, 0, 5, 5, "wu").is_empty());
        assert!(compute_line_by_tag(0, 0, 5, 5, "").is_empty());
        assert!(compute_line_by_tag(0, 0, 5, 5, "DDA").is_empty());
    }

    #[test]
    fn tag_dispatch_matches_enum_dispatch() {
        for algo in LineAlgorithm::ALL {
            assert_eq!(
                compute_line_by_tag(-3, 2, 7, -4, algo.tag()),
                compute_line(GridPoint::new(-3, 2), GridPoint::new(7, -4), algo),
            );
        }
    }

    #[test]
    fn degenerate_segment_is_single_point_for_every_algorithm() {
        let p = GridPoint::new(4, -9);
        for algo in LineAlgorithm::ALL {
            assert_eq!(compute_line(p, p, algo), vec![p], "{algo}");
        }
    }

    #[test]
    fn bresenham_int_diagonal() {
        let line = compute_line_by_tag(0, 0, 3, 3, "bresenham-int");
        assert_eq!(line, pts(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
    }

    #[test]
    fn dda_horizontal() {
        let line = compute_line_by_tag(0, 0, 5, 0, "dda");
        assert_eq!(
            line,
            pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)])
        );
    }

    #[test]
    fn rasterize_all_covers_every_algorithm_in_order() {
        let all = rasterize_all(GridPoint::new(0, 0), GridPoint::new(4, 2));
        let order: Vec<_> = all.iter().map(|(algo, _)| *algo).collect();
        assert_eq!(order, LineAlgorithm::ALL.to_vec());
        assert!(all.iter().all(|(_, line)| !line.is_empty()));
    }

    #[test]
    fn operation_matches_free_function() {
        let a = GridPoint::new(-2, 1);
        let b = GridPoint::new(6, 4);
        for algo in LineAlgorithm::ALL {
            assert_eq!(RasterizeLine::new(a, b, algo).execute(), compute_line(a, b, algo));
        }
    }

    #[test]
    fn only_integer_bresenham_is_integer_only() {
        let integer: Vec<_> = LineAlgorithm::ALL
            .into_iter()
            .filter(|algo| algo.is_integer_only())
            .collect();
        assert_eq!(integer, vec![LineAlgorithm::BresenhamInt]);
    }

    #[test]
    fn walk_in_both_directions() {
        assert_eq!(walk(2, 5).collect::<Vec<_>>(), vec![2, 3, 4, 5]);
        assert_eq!(walk(5, 2).collect::<Vec<_>>(), vec![5, 4, 3, 2]);
        assert_eq!(walk(7, 7).collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn deltas_slopes_guard_zero() {
        let horizontal = Deltas::between(GridPoint::new(0, 0), GridPoint::new(4, 0));
        assert!(horizontal.inverse_slope().abs() < f64::EPSILON);
        let vertical = Deltas::between(GridPoint::new(0, 0), GridPoint::new(0, 4));
        assert!(vertical.slope().abs() < f64::EPSILON);
        assert!(!vertical.x_dominant());
    }
}
