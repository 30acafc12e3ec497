//! # Engine Configuration
//!
//! All tuning constants of the rate engines in one place.
//!
//! ## Usage
//! ```rust
//! use rota_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let quick = EngineConfig::quick();
//! assert!(quick.reference.time_max < config.reference.time_max);
//! ```

mod classifier_config;
mod quantizer_config;
mod reference_config;
mod scheduler_config;

pub use classifier_config::ClassifierConfig;
pub use quantizer_config::QuantizerConfig;
pub use reference_config::ReferenceConfig;
pub use scheduler_config::SchedulerConfig;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RotationError};

/// Which skills a run may start its rotation scan from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StartPolicy {
    /// One run, starting at the first skill in rotation order
    FirstSkill,
    /// One run per skill, rates averaged across runs
    #[default]
    EverySkill,
}

impl StartPolicy {
    /// Start indices for a rotation of `skill_count` skills.
    pub fn starts(self, skill_count: usize) -> std::ops::Range<usize> {
        match self {
            StartPolicy::FirstSkill => 0..skill_count.min(1),
            StartPolicy::EverySkill => 0..skill_count,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Integer clock resolution
    #[serde(default)]
    pub quantizer: QuantizerConfig,
    /// Event-Driven Scheduler budget
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    /// Brute-Force Simulator horizon and step
    #[serde(default)]
    pub reference: ReferenceConfig,
    /// Regime thresholds
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Starting skill(s) for both the scheduler and the reference simulator
    #[serde(default)]
    pub start_policy: StartPolicy,
}

impl EngineConfig {
    /// Cheap settings for interactive sweeps.
    pub fn quick() -> Self {
        let mut cfg = Self::default();
        cfg.scheduler.round_budget = 5_000;
        cfg.reference.time_max = 20.0;
        cfg.reference.steps_per_tick = 48;
        cfg.start_policy = StartPolicy::FirstSkill;
        cfg
    }

    /// Long horizon and budget for validation runs.
    pub fn thorough() -> Self {
        let mut cfg = Self::default();
        cfg.scheduler.round_budget = 500_000;
        cfg.reference.time_max = 1_000.0;
        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.quantizer.subdivisions == 0 {
            return Err(RotationError::InvalidSettings(
                "quantizer.subdivisions must be > 0".into(),
            ));
        }
        if self.scheduler.round_budget == 0 {
            return Err(RotationError::InvalidSettings(
                "scheduler.round_budget must be > 0".into(),
            ));
        }
        if !(self.reference.time_max.is_finite() && self.reference.time_max > 0.0) {
            return Err(RotationError::InvalidSettings(format!(
                "reference.time_max must be positive and finite, got {}",
                self.reference.time_max
            )));
        }
        if self.reference.steps_per_tick == 0 {
            return Err(RotationError::InvalidSettings(
                "reference.steps_per_tick must be > 0".into(),
            ));
        }
        if !(self.classifier.damping > 0.0 && self.classifier.upper_multiplier >= 1.0) {
            return Err(RotationError::InvalidSettings(format!(
                "classifier needs damping > 0 and upper_multiplier >= 1, got {} / {}",
                self.classifier.damping, self.classifier.upper_multiplier
            )));
        }
        Ok(())
    }
}

// ========== Tests ==========
