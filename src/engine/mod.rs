//! The trend-propagation inference engine.

pub mod analyzer;
pub mod indicators;
pub mod propagation;

pub use analyzer::PropagationEngine;
pub use indicators::extract_initial_indicators;
pub use propagation::chain_propagations;
