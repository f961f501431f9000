//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the scoring domain.

mod errors;
mod impact;
mod score;
mod weights;

pub use errors::{ErrorCode, ValidationError};
pub use impact::Impact;
pub use score::Score;
pub use weights::Weights;
