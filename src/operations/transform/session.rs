use tracing::trace;

use super::{multiply_matrices, transform_polygon, TransformParams, TransformStep};
use crate::math::{Matrix3, Point2};

/// A running transform built from individually applied steps.
///
/// Each [`apply`](Self::apply) composes a step onto the right of the current
/// matrix and records it, so the sequence can be undone or reset.
#[derive(Debug, Clone)]
pub struct TransformSession {
    history: Vec<TransformStep>,
    matrix: Matrix3,
}

impl Default for TransformSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformSession {
    /// Creates an empty session holding the identity matrix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
            matrix: Matrix3::identity(),
        }
    }

    /// Composes `step` onto the running matrix.
    ///
    /// Neutral steps are ignored and not recorded. Returns whether the step
    /// was applied.
    pub fn apply(&mut self, step: TransformStep) -> bool {
        if step.is_identity() {
            trace!(?step, "neutral step ignored");
            return false;
        }
        self.matrix = multiply_matrices(&self.matrix, &step.matrix());
        self.history.push(step);
        trace!(?step, depth = self.history.len(), "step applied");
        true
    }

    /// Applies every non-neutral step of `params` in composition order.
    ///
    /// Returns the number of steps applied.
    pub fn apply_params(&mut self, params: &TransformParams) -> usize {
        params
            .steps()
            .into_iter()
            .filter(|&step| self.apply(step))
            .count()
    }

    /// Removes the most recent step and returns it.
    ///
    /// The matrix is recomputed from the remaining history rather than
    /// inverted, so undoing a singular step (e.g. a zero scale) works.
    pub fn undo(&mut self) -> Option<TransformStep> {
        let step = self.history.pop()?;
        self.matrix = self
            .history
            .iter()
            .fold(Matrix3::identity(), |acc, s| multiply_matrices(&acc, &s.matrix()));
        trace!(?step, depth = self.history.len(), "step undone");
        Some(step)
    }

    /// Clears the history and returns to the identity.
    pub fn reset(&mut self) {
        self.history.clear();
        self.matrix = Matrix3::identity();
        trace!("session reset");
    }

    /// The composed matrix of all applied steps.
    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    /// Applied steps, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TransformStep] {
        &self.history
    }

    /// Returns `true` if no step has been applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Transforms `points` with the running matrix.
    #[must_use]
    pub fn transform_polygon(&self, points: &[Point2]) -> Vec<Point2> {
        transform_polygon(points, &self.matrix)
    }
}
