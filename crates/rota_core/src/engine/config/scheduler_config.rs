//! Event-Driven Scheduler budget.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Activations every skill needs before the run may close a cycle (default: 2)
    pub min_observations: u64,
    /// Maximum activations per run before settling for an estimate (default: 50_000)
    pub round_budget: u64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            min_observations: 2,
            round_budget: 50_000,
        }
    }
}
