//! Configuration types for attractor search and rendering.

use serde::{Deserialize, Serialize};

/// Coordinate magnitude beyond which a trajectory is considered escaped.
pub const ESCAPE_BOUND: f64 = 1e10;

/// Per-coordinate change below which a trajectory is considered stagnant.
pub const STAGNATION_EPSILON: f64 = 1e-10;

/// Iterations before the divergence estimator starts measuring.
pub const LYAPUNOV_WARMUP: usize = 1000;

/// Parameters of the rejection-sampling search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of attractors to accept before stopping.
    pub count: usize,
    /// Maximum map iterations per attempt.
    pub max_iterations: usize,
    /// Minimum accumulated log-divergence for acceptance.
    pub min_lyapunov: f64,
    /// Leading trajectory points dropped from accepted attractors.
    pub burn_in: usize,
    /// Attempt budget for the whole search.
    pub max_attempts: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            count: 1,
            max_iterations: 10_000,
            min_lyapunov: 10.0,
            burn_in: 100,
            max_attempts: 1000,
        }
    }
}

impl SearchConfig {
    /// Validate search parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount);
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::InvalidIterations);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidAttempts);
        }
        if self.min_lyapunov.is_nan() {
            return Err(ConfigError::InvalidThreshold);
        }
        if self.burn_in >= self.max_iterations {
            return Err(ConfigError::BurnInTooLong {
                burn_in: self.burn_in,
                iterations: self.max_iterations,
            });
        }
        Ok(())
    }
}

/// Density coloring parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityConfig {
    /// Splat radius in pixels.
    pub radius: usize,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self { radius: 5 }
    }
}

/// Raster output parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Blank border kept on every side, in pixels.
    #[serde(default = "default_margin")]
    pub margin: u32,
    /// Fill color.
    #[serde(default = "default_background")]
    pub background: [u8; 3],
    /// Point color when density coloring is off.
    #[serde(default = "default_foreground")]
    pub foreground: [u8; 3],
    /// Enables density coloring when present.
    #[serde(default)]
    pub density: Option<DensityConfig>,
}

fn default_margin() -> u32 {
    10
}

fn default_background() -> [u8; 3] {
    [0, 0, 0]
}

fn default_foreground() -> [u8; 3] {
    [255, 255, 255]
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            margin: default_margin(),
            background: default_background(),
            foreground: default_foreground(),
            density: None,
        }
    }
}

impl RenderConfig {
    /// Total pixel count (width * height).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Validate render parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if 2 * self.margin as u64 >= self.width.min(self.height) as u64 {
            return Err(ConfigError::MarginTooLarge {
                margin: self.margin,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Attractor count must be non-zero")]
    InvalidCount,
    #[error("Iteration count must be non-zero")]
    InvalidIterations,
    #[error("Attempt budget must be non-zero")]
    InvalidAttempts,
    #[error("Lyapunov threshold must not be NaN")]
    InvalidThreshold,
    #[error("Burn-in ({burn_in}) must be shorter than the iteration count ({iterations})")]
    BurnInTooLong { burn_in: usize, iterations: usize },
    #[error("Image dimensions must be non-zero")]
    InvalidDimensions,
    #[error("Margin {margin} leaves no drawable area in a {width}x{height} image")]
    MarginTooLarge { margin: u32, width: u32, height: u32 },
}
