//! Topsis Module - Pure domain services for TOPSIS scoring.
//!
//! This module contains stateless functions that turn a decision matrix
//! plus weight/impact parameters into per-alternative scores and ranks.
//!
//! # Components
//!
//! - `DecisionMatrix` - Core data structure: alternatives x criteria values
//! - `MatrixValidator` - Input screening with a typed error per failure mode
//! - `TopsisEngine` - The five-step pipeline: normalize, weight, ideal
//!   points, distances, closeness scores
//! - `Ranker` - Competition ("minimum") ranking over scores
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results. No ports or adapters needed
//! since there's no I/O or external dependencies; invocations are independent
//! and may run concurrently without coordination.

mod decision_matrix;
mod engine;
mod ranker;
mod validator;

// Re-export all public types
pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use engine::{IdealPoints, ResultRow, TopsisEngine};
pub use ranker::Ranker;
pub use validator::{MatrixValidator, MIN_CRITERIA};
