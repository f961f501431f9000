//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `topsis` - Pure domain services for TOPSIS scoring

pub mod foundation;
pub mod topsis;
