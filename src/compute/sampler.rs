//! Random draws for search attempts.

use rand::prelude::*;

use crate::schema::{COEFFICIENT_COUNT, Coefficients, SeedError, SeedToken, State};

/// Half-width of the square initial states are drawn from.
pub const INITIAL_STATE_RANGE: f64 = 0.5;

/// Scale applied to the shadow perturbation draw.
pub const SHADOW_PERTURBATION_SCALE: f64 = 1.0 / 1000.0;

/// Half-width of the coefficient interval.
pub const COEFFICIENT_RANGE: f64 = 2.0;

/// Owned random source for attempt-level draws.
///
/// Draws happen in a fixed order per attempt (initial state, shadow offset,
/// coefficients), so a seeded generator replays the same attempts.
#[derive(Debug, Clone)]
pub struct ParameterSampler<R = StdRng> {
    rng: R,
}

impl ParameterSampler<StdRng> {
    /// Create from a numeric seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create from a seed token.
    pub fn from_token(token: &SeedToken) -> Result<Self, SeedError> {
        Ok(Self::new(token.rng_seed()?))
    }
}

impl<R: Rng> ParameterSampler<R> {
    /// Wrap an existing generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Initial state, uniform in [-0.5, 0.5]².
    pub fn initial_state(&mut self) -> State {
        State {
            x: self.symmetric(INITIAL_STATE_RANGE),
            y: self.symmetric(INITIAL_STATE_RANGE),
        }
    }

    /// Shadow state: `initial` offset by an independent draw per coordinate.
    pub fn shadow_state(&mut self, initial: State) -> State {
        State {
            x: initial.x + self.symmetric(INITIAL_STATE_RANGE) * SHADOW_PERTURBATION_SCALE,
            y: initial.y + self.symmetric(INITIAL_STATE_RANGE) * SHADOW_PERTURBATION_SCALE,
        }
    }

    /// Twelve coefficients, uniform in [-2, 2].
    pub fn coefficients(&mut self) -> Coefficients {
        let mut a = [0.0; COEFFICIENT_COUNT];
        for c in a.iter_mut() {
            *c = self.symmetric(COEFFICIENT_RANGE);
        }
        Coefficients(a)
    }

    fn symmetric(&mut self, half_width: f64) -> f64 {
        self.rng.gen_range(-half_width..=half_width)
    }
}
