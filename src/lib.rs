//! Quadratic attractors - chaotic map discovery and density rendering.
//!
//! This crate searches the 12-coefficient family of two-dimensional quadratic
//! maps for strange attractors. Random maps are iterated and rejected when
//! they escape, collapse to a fixed point, or fail a Lyapunov-exponent
//! estimate; accepted trajectories are rendered into RGB images, optionally
//! colored by local point density.
//!
//! # Architecture
//!
//! - `schema`: Data model, configuration, seed tokens and metadata files
//! - `compute`: Map iteration, divergence tracking and the search loop
//! - `render`: Coordinate scaling, density splatting and pixel composition
//!
//! # Example
//!
//! ```rust,no_run
//! use quadratic_attractors::{
//!     compute::search,
//!     render::render,
//!     schema::{RenderConfig, SearchConfig, SeedSource},
//! };
//!
//! let outcome = search(
//!     SearchConfig::default(),
//!     SeedSource::Phrase("mi_semilla".to_string()),
//! )
//! .expect("no attractor found");
//!
//! let image = render(&outcome.attractors[0], &RenderConfig::default());
//! image.save("attractor.png").unwrap();
//! println!("Seed token: {}", outcome.seed);
//! ```

pub mod compute;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use compute::{AttractorSearch, SearchError, SearchOutcome, search};
pub use render::render;
pub use schema::{
    Attractor, AttractorMetadata, Parameters, RenderConfig, SearchConfig, SeedSource, SeedToken,
};
