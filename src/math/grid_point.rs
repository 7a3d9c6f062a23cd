use std::fmt;

/// An integer point on the raster grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// Column index.
    pub x: i32,
    /// Row index, growing upwards.
    pub y: i32,
}

impl GridPoint {
    /// Creates a new grid point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance to `other`, i.e. the number of king moves between them.
    #[must_use]
    pub fn chebyshev_distance(&self, other: &Self) -> u64 {
        let dx = (i64::from(other.x) - i64::from(self.x)).unsigned_abs();
        let dy = (i64::from(other.y) - i64::from(self.y)).unsigned_abs();
        dx.max(dy)
    }

    /// Returns `true` if `other` is this point or one of its eight neighbours.
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.chebyshev_distance(other) <= 1
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<GridPoint> for (i32, i32) {
    fn from(p: GridPoint) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
