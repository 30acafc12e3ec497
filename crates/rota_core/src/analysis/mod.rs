//! # Analysis Module
//!
//! Closed-form reasoning about rotations, used to skip the scheduler when
//! a configuration sits in a regime with a known rate.
//!
//! ## Submodules
//!
//! - `regime` - per-skill regime thresholds and classification

pub mod regime;

pub use regime::{Regime, RegimeClassifier, RegimeThresholds};
