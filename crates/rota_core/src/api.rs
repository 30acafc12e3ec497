//! Entry points: `evaluate`, `classify`, `simulate_reference`.
//!
//! Every call quantizes its own copy of the configuration and keeps all
//! mutable state local, so calls may run concurrently on shared inputs.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::{Regime, RegimeClassifier, RegimeThresholds};
use crate::engine::config::EngineConfig;
use crate::engine::reference::{ReferenceOutcome, ReferenceSimulator};
use crate::engine::rotation::QuantizedRotation;
use crate::engine::scheduler::{EventScheduler, ScheduleOutcome};
use crate::error::Result;
use crate::models::RotationConfig;

/// How the rates of an [`Evaluation`] were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Every skill had a closed-form rate
    ClosedForm,
    /// At least one skill was unresolved; the scheduler produced all rates
    Scheduled { converged: bool, rounds: u64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Activations per second, in rotation order
    pub rates: Vec<f64>,
    /// Seconds between activations (`inf` for a skill that never fires)
    pub mean_intervals: Vec<f64>,
    pub regimes: Vec<Regime>,
    pub thresholds: Vec<RegimeThresholds>,
    pub resolution: Resolution,
}

impl Evaluation {
    /// False only when the scheduler ran out of budget.
    pub fn converged(&self) -> bool {
        match self.resolution {
            Resolution::ClosedForm => true,
            Resolution::Scheduled { converged, .. } => converged,
        }
    }
}

/// Rate engines bound to one set of settings.
#[derive(Debug, Clone, Default)]
pub struct RateEngine {
    config: EngineConfig,
}

impl RateEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validated, integer-clock copy of `config`.
    pub fn quantize(&self, config: &RotationConfig) -> Result<QuantizedRotation> {
        QuantizedRotation::new(config, self.config.quantizer.subdivisions)
    }

    /// Closed-form rates where they are exact, scheduler otherwise.
    pub fn evaluate(&self, config: &RotationConfig) -> Result<Evaluation> {
        let rotation = self.quantize(config)?;
        let classifier = RegimeClassifier::new(&self.config.classifier);
        let thresholds = classifier.thresholds(&rotation);
        let regimes = classifier.classify_with(&rotation, &thresholds);

        let (rates, resolution) = match classifier.closed_form(&rotation, &regimes) {
            Some(rates) => {
                debug!(
                    "Closed form for {} skills at {:.3} attacks/s",
                    rotation.skill_count(),
                    rotation.attack_rate()
                );
                (rates, Resolution::ClosedForm)
            }
            None => {
                debug!(
                    "No exact closed form at {:.3} attacks/s ({:?}), running scheduler",
                    rotation.attack_rate(),
                    regimes
                );
                let outcome = self.run_scheduler(&rotation);
                (
                    outcome.rates,
                    Resolution::Scheduled {
                        converged: outcome.converged,
                        rounds: outcome.rounds,
                    },
                )
            }
        };

        Ok(Evaluation {
            mean_intervals: rates.iter().map(|&r| mean_interval(r)).collect(),
            rates,
            regimes,
            thresholds,
            resolution,
        })
    }

    /// Regime of every skill.
    pub fn classify(&self, config: &RotationConfig) -> Result<Vec<Regime>> {
        let rotation = self.quantize(config)?;
        Ok(RegimeClassifier::new(&self.config.classifier).classify(&rotation))
    }

    /// Scheduler rates regardless of regime.
    pub fn schedule(&self, config: &RotationConfig) -> Result<ScheduleOutcome> {
        let rotation = self.quantize(config)?;
        Ok(self.run_scheduler(&rotation))
    }

    /// Brute-force oracle.
    pub fn simulate_reference(&self, config: &RotationConfig) -> Result<ReferenceOutcome> {
        let rotation = self.quantize(config)?;
        Ok(ReferenceSimulator::new(&rotation, &self.config.reference).run(self.config.start_policy))
    }

    fn run_scheduler(&self, rotation: &QuantizedRotation) -> ScheduleOutcome {
        EventScheduler::new(rotation, &self.config.scheduler).run(self.config.start_policy)
    }
}

/// Activation rate per skill, in rotation order, with default settings.
pub fn evaluate(config: &RotationConfig) -> Result<Vec<f64>> {
    RateEngine::default().evaluate(config).map(|e| e.rates)
}

pub fn classify(config: &RotationConfig) -> Result<Vec<Regime>> {
    RateEngine::default().classify(config)
}

/// Oracle rates with default settings. Slow; meant for validation.
pub fn simulate_reference(config: &RotationConfig) -> Result<Vec<f64>> {
    RateEngine::default()
        .simulate_reference(config)
        .map(|o| o.rates)
}

#[inline]
fn mean_interval(rate: f64) -> f64 {
    if rate > 0.0 {
        1.0 / rate
    } else {
        f64::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RotationError;
    use crate::models::Skill;

    #[test]
    fn test_evaluate_closed_form() {
        let cfg = RotationConfig::from_rates(30.0, 4.0, 0.15, vec![Skill::new("Frost Bomb", 2.5)]);
        let eval = RateEngine::default().evaluate(&cfg).unwrap();
        assert_eq!(eval.resolution, Resolution::ClosedForm);
        assert_eq!(eval.regimes, vec![Regime::CooldownBound]);
        assert!((eval.rates[0] - 0.4).abs() < 1e-12);
        assert!((eval.mean_intervals[0] - 2.5).abs() < 1e-9);
        assert!(eval.converged());
    }

    #[test]
    fn test_evaluate_delegates_unresolved() {
        let cfg = RotationConfig::from_rates(
            30.0,
            8.0,
            0.15,
            vec![
                Skill::new("Frost Bomb", 2.5),
                Skill::new("Arc", 0.0),
                Skill::new("Ice Spear", 0.0),
            ],
        );
        let eval = RateEngine::default().evaluate(&cfg).unwrap();
        assert!(matches!(
            eval.resolution,
            Resolution::Scheduled { converged: true, .. }
        ));
        assert!(eval.rates.iter().all(|&r| r > 0.0));
    }

    #[test]
    fn test_evaluate_schedules_cooldown_off_attack_grid() {
        // cooldown-bound, but 0.5s is 4.5 slots at 9 aps
        let cfg = RotationConfig::from_rates(30.0, 9.0, 0.15, vec![Skill::new("Nova", 0.5)]);
        let eval = RateEngine::default().evaluate(&cfg).unwrap();
        assert_eq!(eval.regimes, vec![Regime::CooldownBound]);
        assert!(matches!(
            eval.resolution,
            Resolution::Scheduled { converged: true, .. }
        ));
        assert!((eval.rates[0] - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_configuration_fails_fast() {
        let cfg = RotationConfig::from_rates(30.0, 4.0, 0.15, vec![]);
        assert!(evaluate(&cfg).unwrap_err().is_invalid_configuration());
        assert!(classify(&cfg).is_err());
        assert!(simulate_reference(&cfg).is_err());
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let mut config = EngineConfig::default();
        config.scheduler.round_budget = 0;
        assert!(matches!(
            RateEngine::new(config),
            Err(RotationError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_mean_interval_of_idle_skill() {
        assert!(mean_interval(0.0).is_infinite());
        assert!((mean_interval(4.0) - 0.25).abs() < 1e-12);
    }
}
