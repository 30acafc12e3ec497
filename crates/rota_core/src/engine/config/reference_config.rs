//! Brute-Force Simulator horizon and step.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceConfig {
    /// Simulated horizon in seconds (default: 100.0)
    pub time_max: f64,
    /// Fixed steps per server tick (default: 480, ~69us at 30 Hz)
    pub steps_per_tick: u64,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            time_max: 100.0,
            steps_per_tick: 480,
        }
    }
}
