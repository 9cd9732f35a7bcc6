//! Persisted description of a discovered attractor.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{COEFFICIENT_COUNT, Coefficients, Parameters, SeedToken, State};

/// Largest point count a metadata file may ask to replay.
pub const MAX_REPLAY_POINTS: usize = 100_000_000;

/// Metadata written next to a rendered attractor.
///
/// Holds enough to repeat the search (`seed`) or to replay the trajectory
/// directly (`initial_x`, `initial_y`, `coefficients`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttractorMetadata {
    /// Token that reproduces the search.
    pub seed: SeedToken,
    /// Initial x of the accepted attempt.
    pub initial_x: f64,
    /// Initial y of the accepted attempt.
    pub initial_y: f64,
    /// Map coefficients, 12 values.
    pub coefficients: Vec<f64>,
    /// Points in the rendered attractor (after burn-in).
    pub num_points: usize,
}

impl AttractorMetadata {
    pub fn new(seed: SeedToken, parameters: &Parameters, num_points: usize) -> Self {
        Self {
            seed,
            initial_x: parameters.initial.x,
            initial_y: parameters.initial.y,
            coefficients: parameters.coefficients.as_slice().to_vec(),
            num_points,
        }
    }

    /// Check field contents beyond what deserialization enforces.
    pub fn validate(&self) -> Result<(), MetadataError> {
        if self.coefficients.len() != COEFFICIENT_COUNT {
            return Err(MetadataError::Invalid(format!(
                "expected {} coefficients, found {}",
                COEFFICIENT_COUNT,
                self.coefficients.len()
            )));
        }
        if !self.initial_x.is_finite() || !self.initial_y.is_finite() {
            return Err(MetadataError::Invalid(
                "initial state is not finite".to_string(),
            ));
        }
        if let Some(i) = self.coefficients.iter().position(|c| !c.is_finite()) {
            return Err(MetadataError::Invalid(format!(
                "coefficient {i} is not finite"
            )));
        }
        if self.num_points > MAX_REPLAY_POINTS {
            return Err(MetadataError::Invalid(format!(
                "num_points {} exceeds the limit of {}",
                self.num_points, MAX_REPLAY_POINTS
            )));
        }
        Ok(())
    }

    /// Parameters of the recorded attractor.
    pub fn parameters(&self) -> Result<Parameters, MetadataError> {
        self.validate()?;
        let coefficients = Coefficients::from_slice(&self.coefficients).ok_or_else(|| {
            MetadataError::Invalid("coefficient vector has the wrong length".to_string())
        })?;
        Ok(Parameters {
            initial: State::new(self.initial_x, self.initial_y),
            coefficients,
        })
    }

    /// Write as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), MetadataError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Read and validate a metadata file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, MetadataError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse and validate metadata from JSON text.
    pub fn from_json(content: &str) -> Result<Self, MetadataError> {
        let metadata: Self = serde_json::from_str(content)?;
        metadata.validate()?;
        Ok(metadata)
    }
}

/// Metadata persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("Failed to access metadata file: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed metadata: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid metadata: {0}")]
    Invalid(String),
}
