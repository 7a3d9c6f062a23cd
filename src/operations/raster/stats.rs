use std::collections::HashSet;

use crate::math::GridPoint;

/// Artifacts of a rasterized line, for comparing algorithms on one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineStats {
    /// Number of emitted points, repeats included.
    pub points: usize,
    /// Points emitted more than once, counting every extra occurrence.
    pub duplicates: usize,
    /// Consecutive pairs that are not 8-connected.
    pub gaps: usize,
}

impl LineStats {
    /// Measures a point sequence in emission order.
    #[must_use]
    pub fn of(points: &[GridPoint]) -> Self {
        let unique: HashSet<&GridPoint> = points.iter().collect();
        let gaps = points
            .windows(2)
            .filter(|pair| !pair[0].is_adjacent(&pair[1]))
            .count();
        Self {
            points: points.len(),
            duplicates: points.len() - unique.len(),
            gaps,
        }
    }

    /// Returns `true` if the sequence is gap-free and has no repeated points.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicates == 0 && self.gaps == 0
    }
}
