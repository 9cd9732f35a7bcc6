//! Render module - Rasterizing attractors into RGB pixel buffers.
//!
//! The pipeline scales trajectory coordinates into pixel space, optionally
//! splats them into a density grid, and writes colored points into an
//! [`image::RgbImage`] ready for PNG encoding.

mod color;
mod compose;
mod density;
mod scale;

pub use color::*;
pub use compose::*;
pub use density::*;
pub use scale::*;
