//! Reconciliation module: exact reference matching plus fuzzy record linkage

pub mod engine;
pub mod similarity;

pub use engine::*;
pub use similarity::*;
