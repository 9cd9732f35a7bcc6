//! Rejection-sampling search for chaotic attractors.

use rand::Rng;
use rand::rngs::StdRng;

use super::lyapunov::DivergenceTracker;
use super::map::{has_escaped, has_stagnated, step};
use super::sampler::ParameterSampler;
use crate::schema::{
    Attractor, Coefficients, ConfigError, ESCAPE_BOUND, LYAPUNOV_WARMUP, Parameters,
    STAGNATION_EPSILON, SearchConfig, SeedError, SeedSource, SeedToken, State,
};

/// Result of iterating a single candidate map.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// A coordinate left the bounded region at this iteration.
    Escaped { iteration: usize },
    /// The trajectory stopped moving at this iteration.
    Stagnated { iteration: usize },
    /// All iterations ran; carries the full trajectory and divergence sum.
    Completed {
        trajectory: Vec<State>,
        lyapunov: f64,
    },
}

/// Iterate one candidate map from `initial`, tracking divergence from `shadow`.
///
/// The trajectory excludes `initial` and holds at most `max_iterations`
/// states. Divergence is only measured once the iteration index exceeds
/// the warm-up count.
pub fn run_attempt(
    initial: State,
    shadow: State,
    coefficients: &Coefficients,
    max_iterations: usize,
) -> AttemptOutcome {
    let mut tracker = DivergenceTracker::new(initial, shadow);
    let mut trajectory = Vec::with_capacity(max_iterations);
    let mut state = initial;

    for iteration in 0..max_iterations {
        let next = step(state, coefficients);

        if has_escaped(next, ESCAPE_BOUND) {
            return AttemptOutcome::Escaped { iteration };
        }
        if has_stagnated(state, next, STAGNATION_EPSILON) {
            return AttemptOutcome::Stagnated { iteration };
        }

        if iteration > LYAPUNOV_WARMUP {
            tracker.observe(next, coefficients);
        }

        state = next;
        trajectory.push(next);
    }

    AttemptOutcome::Completed {
        trajectory,
        lyapunov: tracker.estimate(),
    }
}

/// Counters describing how attempts ended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub attempts: usize,
    pub accepted: usize,
    pub escaped: usize,
    pub stagnated: usize,
    pub below_threshold: usize,
}

/// Attractors accepted by a finished search.
#[derive(Debug, Clone, PartialEq)]
pub struct Discovery {
    /// Accepted attractors in discovery order.
    pub attractors: Vec<Attractor>,
    /// Parameters of the last accepted attractor.
    pub parameters: Parameters,
    pub stats: SearchStats,
}

/// A discovery together with the token that reproduces it.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub seed: SeedToken,
    pub attractors: Vec<Attractor>,
    pub parameters: Parameters,
    pub stats: SearchStats,
}

/// Search driver owning its random source.
pub struct AttractorSearch<R = StdRng> {
    config: SearchConfig,
    sampler: ParameterSampler<R>,
}

impl AttractorSearch<StdRng> {
    /// Create a search seeded from a token.
    pub fn from_token(config: SearchConfig, token: &SeedToken) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            config,
            sampler: ParameterSampler::from_token(token)?,
        })
    }
}

impl<R: Rng> AttractorSearch<R> {
    /// Create a search drawing from an injected generator.
    pub fn with_rng(config: SearchConfig, rng: R) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            config,
            sampler: ParameterSampler::with_rng(rng),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Draw and evaluate attempts until enough attractors are accepted or
    /// the attempt budget runs out.
    pub fn run(&mut self) -> Result<Discovery, SearchError> {
        let SearchConfig {
            count,
            max_iterations,
            min_lyapunov,
            burn_in,
            max_attempts,
        } = self.config;

        let mut stats = SearchStats::default();
        let mut attractors = Vec::with_capacity(count);

        while attractors.len() < count && stats.attempts < max_attempts {
            stats.attempts += 1;

            let initial = self.sampler.initial_state();
            let shadow = self.sampler.shadow_state(initial);
            let coefficients = self.sampler.coefficients();

            match run_attempt(initial, shadow, &coefficients, max_iterations) {
                AttemptOutcome::Escaped { iteration } => {
                    stats.escaped += 1;
                    log::trace!(
                        "attempt {} escaped at iteration {}",
                        stats.attempts,
                        iteration
                    );
                }
                AttemptOutcome::Stagnated { iteration } => {
                    stats.stagnated += 1;
                    log::trace!(
                        "attempt {} stagnated at iteration {}",
                        stats.attempts,
                        iteration
                    );
                }
                AttemptOutcome::Completed { lyapunov, .. }
                    if lyapunov.is_nan() || lyapunov < min_lyapunov =>
                {
                    stats.below_threshold += 1;
                    log::trace!(
                        "attempt {} below threshold: {:.3} < {:.3}",
                        stats.attempts,
                        lyapunov,
                        min_lyapunov
                    );
                }
                AttemptOutcome::Completed {
                    mut trajectory,
                    lyapunov,
                } => {
                    stats.accepted += 1;
                    log::debug!(
                        "attempt {} accepted with divergence sum {:.3}",
                        stats.attempts,
                        lyapunov
                    );
                    trajectory.drain(..burn_in.min(trajectory.len()));
                    attractors.push(Attractor {
                        points: trajectory,
                        parameters: Parameters {
                            initial,
                            coefficients,
                        },
                    });
                }
            }
        }

        log::info!(
            "search finished: {} accepted in {} attempts ({} escaped, {} stagnated, {} below threshold)",
            stats.accepted,
            stats.attempts,
            stats.escaped,
            stats.stagnated,
            stats.below_threshold
        );

        match attractors.last().map(|a| a.parameters) {
            Some(parameters) if attractors.len() >= count => Ok(Discovery {
                attractors,
                parameters,
                stats,
            }),
            _ => Err(SearchError::Exhausted {
                requested: count,
                accepted: stats.accepted,
                attempts: stats.attempts,
            }),
        }
    }
}

/// Resolve the seed source and run a search.
pub fn search(config: SearchConfig, seed: SeedSource) -> Result<SearchOutcome, SearchError> {
    let token = seed.resolve();
    let discovery = AttractorSearch::from_token(config, &token)?.run()?;
    Ok(SearchOutcome {
        seed: token,
        attractors: discovery.attractors,
        parameters: discovery.parameters,
        stats: discovery.stats,
    })
}

/// Search failures.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("Found {accepted} of {requested} attractors after {attempts} attempts")]
    Exhausted {
        requested: usize,
        accepted: usize,
        attempts: usize,
    },
    #[error("Invalid search configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid seed: {0}")]
    Seed(#[from] SeedError),
}
