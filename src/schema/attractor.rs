//! Data model for quadratic map attractors.

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Number of coefficients in the quadratic map (6 per output coordinate).
pub const COEFFICIENT_COUNT: usize = 12;

/// A point of the map's phase space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct State {
    pub x: f64,
    pub y: f64,
}

impl State {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another state.
    #[inline]
    pub fn distance(&self, other: &State) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Coefficients of the quadratic map.
///
/// Layout per coordinate: constant, x, x², y, y², xy. The first six drive the
/// x update, the last six the y update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coefficients(pub [f64; COEFFICIENT_COUNT]);

impl Coefficients {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Build from a slice, failing unless it holds exactly 12 values.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        <[f64; COEFFICIENT_COUNT]>::try_from(values).ok().map(Self)
    }
}

impl Index<usize> for Coefficients {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Origin of a trajectory: where it started and which map produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub initial: State,
    pub coefficients: Coefficients,
}

/// An accepted attractor: the settled trajectory plus its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Attractor {
    /// Trajectory with the burn-in prefix removed.
    pub points: Vec<State>,
    pub parameters: Parameters,
}

impl Attractor {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X coordinates in trajectory order.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Y coordinates in trajectory order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_from_slice() {
        assert!(Coefficients::from_slice(&[0.0; 12]).is_some());
        assert!(Coefficients::from_slice(&[0.0; 11]).is_none());
        assert!(Coefficients::from_slice(&[0.0; 13]).is_none());
    }

    #[test]
    fn test_coefficients_serialize_as_list() {
        let coefficients = Coefficients([1.0; 12]);
        let json = serde_json::to_string(&coefficients).unwrap();
        assert!(json.starts_with('['));
        assert_eq!(json.matches(',').count(), 11);
    }

    #[test]
    fn test_distance() {
        let a = State::new(0.0, 0.0);
        let b = State::new(3.0, 4.0);
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }
}
