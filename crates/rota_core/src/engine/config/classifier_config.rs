//! Regime Classifier constants.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Scales N / cooldown down to where resonance starts (default: 0.5)
    pub damping: f64,
    /// cooldown_bound_upper = cooldown_bound_lower * upper_multiplier (default: 8.0)
    pub upper_multiplier: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            damping: 0.5,
            upper_multiplier: 8.0,
        }
    }
}
