//! Largest Lyapunov exponent estimate from a renormalized shadow trajectory.
//!
//! A shadow state starts a small distance `d0` from the reference. After each
//! step the separation `d` is measured, `ln(d / d0)` is accumulated and the
//! shadow is pulled back to distance `d0` along the separation direction.
//! Steps must happen in that order: advance, measure, accumulate, renormalize.

use super::map::step;
use crate::schema::{Coefficients, State};

/// Benettin-style divergence estimator.
#[derive(Debug, Clone)]
pub struct DivergenceTracker {
    shadow: State,
    d0: f64,
    sum: f64,
    accumulated: usize,
}

impl DivergenceTracker {
    /// Start tracking with the given reference and shadow states.
    ///
    /// The initial separation is fixed here for the whole attempt.
    pub fn new(reference: State, shadow: State) -> Self {
        Self {
            shadow,
            d0: reference.distance(&shadow),
            sum: 0.0,
            accumulated: 0,
        }
    }

    /// Advance the shadow alongside a reference that has just been stepped.
    ///
    /// Returns the log-divergence term when one was accumulated. A zero `d`
    /// or `d0` leaves both the sum and the shadow position untouched.
    pub fn observe(&mut self, reference: State, coefficients: &Coefficients) -> Option<f64> {
        let advanced = step(self.shadow, coefficients);
        self.shadow = advanced;

        let dx = advanced.x - reference.x;
        let dy = advanced.y - reference.y;
        let d = (dx * dx + dy * dy).sqrt();

        if !(d > 0.0 && self.d0 > 0.0) {
            return None;
        }

        let term = (d / self.d0).ln();
        self.sum += term;
        self.accumulated += 1;

        self.shadow = State {
            x: reference.x + self.d0 * dx / d,
            y: reference.y + self.d0 * dy / d,
        };

        Some(term)
    }

    /// Raw accumulated sum of log-divergence ratios.
    #[inline]
    pub fn estimate(&self) -> f64 {
        self.sum
    }

    /// Fixed initial separation.
    #[inline]
    pub fn initial_separation(&self) -> f64 {
        self.d0
    }

    /// Current shadow state.
    #[inline]
    pub fn shadow(&self) -> State {
        self.shadow
    }

    /// Number of steps that contributed to the sum.
    #[inline]
    pub fn accumulated_steps(&self) -> usize {
        self.accumulated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// x' = 2x, y' = 2y
    fn doubling() -> Coefficients {
        let mut a = [0.0; 12];
        a[1] = 2.0;
        a[9] = 2.0;
        Coefficients(a)
    }

    #[test]
    fn test_doubling_map_accumulates_ln2() {
        let reference = State::new(0.1, 0.1);
        let mut tracker = DivergenceTracker::new(reference, State::new(0.1 + 1e-4, 0.1));
        let a = doubling();

        let next = step(reference, &a);
        let term = tracker.observe(next, &a).unwrap();
        assert!((term - 2f64.ln()).abs() < 1e-9);

        // Renormalized to d0 along +x.
        let shadow = tracker.shadow();
        assert!((shadow.distance(&next) - 1e-4).abs() < 1e-12);
        assert!(shadow.x > next.x);
        assert!((shadow.y - next.y).abs() < 1e-15);

        let next = step(next, &a);
        tracker.observe(next, &a);
        assert!((tracker.estimate() - 2.0 * 2f64.ln()).abs() < 1e-9);
        assert_eq!(tracker.accumulated_steps(), 2);
    }

    #[test]
    fn test_zero_initial_separation_never_accumulates() {
        let reference = State::new(0.2, -0.3);
        let mut tracker = DivergenceTracker::new(reference, reference);
        assert_eq!(tracker.initial_separation(), 0.0);

        let a = doubling();
        let mut state = reference;
        for _ in 0..10 {
            state = step(state, &a);
            assert!(tracker.observe(state, &a).is_none());
        }
        assert_eq!(tracker.estimate(), 0.0);
        assert_eq!(tracker.accumulated_steps(), 0);
    }

    #[test]
    fn test_zero_separation_skips_renormalization() {
        // Constant map sends every state to the same point, so d == 0.
        let mut a = [0.0; 12];
        a[0] = 0.4;
        a[6] = -0.1;
        let a = Coefficients(a);

        let reference = State::new(0.0, 0.0);
        let mut tracker = DivergenceTracker::new(reference, State::new(1e-3, 0.0));
        let next = step(reference, &a);
        assert!(tracker.observe(next, &a).is_none());
        assert_eq!(tracker.estimate(), 0.0);
        assert_eq!(tracker.shadow(), next);
    }

    proptest! {
        #[test]
        fn prop_sum_stays_finite(
            rx in -0.5f64..0.5,
            ry in -0.5f64..0.5,
            ox in 1e-4f64..1e-3,
            oy in -1e-3f64..1e-3,
            coefficients in proptest::array::uniform12(-2.0f64..2.0),
        ) {
            let a = Coefficients(coefficients);
            let reference = State::new(rx, ry);
            let mut tracker = DivergenceTracker::new(reference, State::new(rx + ox, ry + oy));
            let next = step(reference, &a);
            let before = tracker.estimate();
            match tracker.observe(next, &a) {
                Some(term) => {
                    prop_assert!(term.is_finite());
                    prop_assert!(tracker.estimate().is_finite());
                }
                None => prop_assert_eq!(tracker.estimate(), before),
            }
        }
    }
}
