//! Quadratic map evaluation.
//!
//! Each coordinate's next value is a second-degree polynomial of the current
//! x and y:
//!
//! ```text
//! x' = a0 + a1*x + a2*x² + a3*y + a4*y² + a5*x*y
//! y' = a6 + a7*x + a8*x² + a9*y + a10*y² + a11*x*y
//! ```

use crate::schema::{Attractor, Coefficients, Parameters, State};

/// Apply the map once.
///
/// Pure; may return non-finite values for diverging inputs.
#[inline]
pub fn step(state: State, a: &Coefficients) -> State {
    let State { x, y } = state;
    State {
        x: a[0] + a[1] * x + a[2] * x * x + a[3] * y + a[4] * y * y + a[5] * x * y,
        y: a[6] + a[7] * x + a[8] * x * x + a[9] * y + a[10] * y * y + a[11] * x * y,
    }
}

/// Whether either coordinate left the bounded region (or stopped being a number).
#[inline]
pub fn has_escaped(state: State, bound: f64) -> bool {
    !(state.x.abs() <= bound && state.y.abs() <= bound)
}

/// Whether both coordinates moved less than `epsilon` in one step.
#[inline]
pub fn has_stagnated(previous: State, next: State, epsilon: f64) -> bool {
    (previous.x - next.x).abs() < epsilon && (previous.y - next.y).abs() < epsilon
}

impl Parameters {
    /// Replay the map for `num_points` steps from the stored initial state.
    ///
    /// No acceptance checks are applied. The result starts with the initial
    /// state, so it holds `num_points + 1` states.
    pub fn reconstruct(&self, num_points: usize) -> Vec<State> {
        let mut points = Vec::with_capacity(num_points + 1);
        let mut state = self.initial;
        points.push(state);
        for _ in 0..num_points {
            state = step(state, &self.coefficients);
            points.push(state);
        }
        points
    }
}

impl Attractor {
    /// Rebuild an attractor from stored parameters.
    ///
    /// Yields the same points a search would have accepted with the given
    /// burn-in: the initial state and the first `burn_in` steps are dropped.
    /// Returns `None` when the total step count does not fit in `usize`.
    pub fn replay(parameters: Parameters, burn_in: usize, num_points: usize) -> Option<Self> {
        let steps = burn_in.checked_add(num_points)?;
        steps.checked_add(1)?;
        let mut points = parameters.reconstruct(steps);
        points.drain(..=burn_in);
        Some(Self { points, parameters })
    }
}
