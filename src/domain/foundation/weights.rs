//! Weight vector value object.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Per-criterion weights, applied after column normalization.
///
/// Only length and numeric parseability are enforced; zero or negative
/// weights are semantically meaningless but not rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weights(Vec<f64>);

impl Weights {
    /// Creates a weight vector from raw values.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Parses a comma-separated weight string such as `"0.25,0.25,0.5"`.
    ///
    /// Fails with [`ValidationError::NonNumeric`] on the first token that
    /// does not parse to a finite number.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let values = input
            .split(',')
            .enumerate()
            .map(|(position, token)| {
                token
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|w| w.is_finite())
                    .ok_or_else(|| ValidationError::non_numeric_weight(position, token.trim()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(values))
    }

    /// Returns the number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw weight values.
    pub fn values(&self) -> &[f64] {
        &self.0
    }
}
