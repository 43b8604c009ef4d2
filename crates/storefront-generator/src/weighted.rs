//! Weighted categorical sampling.

use crate::generator::GeneratorError;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Allowed distance between the weight total and 1.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// A fixed categorical distribution over `(value, weight)` pairs.
///
/// Weights must be finite, non-negative and sum to 1.
#[derive(Debug, Clone)]
pub struct WeightedChoice<T> {
    values: Vec<T>,
    index: WeightedIndex<f64>,
}

impl<T: Clone> WeightedChoice<T> {
    pub fn new(entries: impl IntoIterator<Item = (T, f64)>) -> Result<Self, GeneratorError> {
        let (values, weights): (Vec<T>, Vec<f64>) = entries.into_iter().unzip();

        if values.is_empty() {
            return Err(GeneratorError::InvalidWeights("no entries".to_string()));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
            return Err(GeneratorError::InvalidWeights(format!(
                "weight {w} is not a finite non-negative number"
            )));
        }
        let total: f64 = weights.iter().sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(GeneratorError::InvalidWeights(format!(
                "weights sum to {total}, expected 1"
            )));
        }

        let index = WeightedIndex::new(&weights)
            .map_err(|e| GeneratorError::InvalidWeights(e.to_string()))?;
        Ok(Self { values, index })
    }

    /// Draw one value.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> T {
        self.values[self.index.sample(rng)].clone()
    }
}
