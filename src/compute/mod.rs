//! Compute module - Map iteration, divergence estimation and attractor search.

mod lyapunov;
mod map;
mod sampler;
mod search;

pub use lyapunov::*;
pub use map::*;
pub use sampler::*;
pub use search::*;
