//! Topsis Engine - Multi-Criteria Decision Scoring
//!
//! This crate implements the TOPSIS method (Technique for Order Preference
//! by Similarity to Ideal Solution) as a single shared engine, consumed by
//! thin command-line and web front-ends that own file parsing, transport,
//! and rendering.

pub mod application;
pub mod domain;
