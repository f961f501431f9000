//! Impact direction value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    /// Higher values are better (`+`).
    Benefit,
    /// Lower values are better (`-`).
    Cost,
}

impl Impact {
    /// Parses a single `+`/`-` symbol. Returns None for anything else.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "+" => Some(Impact::Benefit),
            "-" => Some(Impact::Cost),
            _ => None,
        }
    }

    /// Parses a comma-separated impact string such as `"+,-,+"`.
    ///
    /// Fails with [`ValidationError::InvalidImpact`] on the first token
    /// that is not exactly `+` or `-`.
    pub fn parse_list(input: &str) -> Result<Vec<Impact>, ValidationError> {
        input
            .split(',')
            .enumerate()
            .map(|(position, token)| {
                Impact::from_symbol(token)
                    .ok_or_else(|| ValidationError::invalid_impact(position, token.trim()))
            })
            .collect()
    }

    /// Returns the `+`/`-` symbol for this impact.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
