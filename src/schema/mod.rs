//! Schema module - Data model, configuration and persistence types.

mod attractor;
mod config;
mod metadata;
mod seed;

pub use attractor::*;
pub use config::*;
pub use metadata::*;
pub use seed::*;
