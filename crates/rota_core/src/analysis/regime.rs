//! # Regime Classifier
//!
//! Places each skill of a rotation in one of four regimes by comparing the
//! attack rate against per-skill thresholds:
//!
//! | attack rate                                   | regime          | rate                |
//! |-----------------------------------------------|-----------------|---------------------|
//! | `>= cooldown_bound_upper`                     | `CooldownBound` | `1 / cooldown`      |
//! | `>= cooldown_bound_lower` or `>= min(gcd)`    | `Unresolved`    | scheduler           |
//! | `>= attack_bound`                             | `AttackBound`   | `attack_rate / n`   |
//! | otherwise                                     | `Unreachable`   | 0                   |
//!
//! `min(gcd)` is the smallest global cooldown bound, `n / cooldown` over the
//! skills whose own cooldown exceeds the global cooldown. Cooldown-bound
//! skills whose combined rate would exceed the global cooldown are demoted
//! to `Unresolved`.
//!
//! A regime is a diagnosis, not a promise: [`RegimeClassifier::closed_form`]
//! only answers when the cadence makes the formula exact.
//!
//! Cooldowns are taken after clamping to the global cooldown and snapping
//! to the server tick, the same values the engines run on.

use serde::{Deserialize, Serialize};

use crate::engine::config::ClassifierConfig;
use crate::engine::rotation::QuantizedRotation;
use crate::engine::scheduler::cadence;

/// Ordered by how strongly cooldowns dominate the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Regime {
    /// Attack rate below every meaningful threshold
    Unreachable,
    /// Every attack goes to the next skill in turn
    AttackBound,
    /// Tick quantization and rotation length interact; needs the scheduler
    Unresolved,
    /// Skill fires as soon as its cooldown allows
    CooldownBound,
}

impl Regime {
    pub fn has_closed_form(self) -> bool {
        !matches!(self, Regime::Unresolved)
    }
}

/// Attack-rate thresholds (attacks per second) for one skill.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegimeThresholds {
    pub attack_bound: f64,
    pub cooldown_bound_lower: f64,
    pub global_cooldown_bound: f64,
    pub cooldown_bound_upper: f64,
}

pub struct RegimeClassifier<'a> {
    config: &'a ClassifierConfig,
}

impl<'a> RegimeClassifier<'a> {
    pub fn new(config: &'a ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn thresholds(&self, rotation: &QuantizedRotation) -> Vec<RegimeThresholds> {
        let n = rotation.skill_count() as f64;

        (0..rotation.skill_count())
            .map(|i| {
                let saturation = n * cooldown_rate(rotation, i);
                let lower = self.config.damping * saturation;
                let above_global = rotation.raw_cooldown(i) > rotation.raw_global_cooldown();
                let global_cooldown_bound = if above_global {
                    saturation
                } else {
                    f64::INFINITY
                };
                RegimeThresholds {
                    attack_bound: 0.0,
                    cooldown_bound_lower: lower,
                    global_cooldown_bound,
                    cooldown_bound_upper: lower * self.config.upper_multiplier,
                }
            })
            .collect()
    }

    /// Regime of every skill at the rotation's (quantized) attack rate.
    pub fn classify(&self, rotation: &QuantizedRotation) -> Vec<Regime> {
        let thresholds = self.thresholds(rotation);
        self.classify_with(rotation, &thresholds)
    }

    /// [`classify`](Self::classify) with precomputed thresholds.
    ///
    /// Cooldown-bound skills still share one global cooldown: when their
    /// combined demand exceeds what the global cooldown lets through, none
    /// of them keeps its closed form.
    pub fn classify_with(
        &self,
        rotation: &QuantizedRotation,
        thresholds: &[RegimeThresholds],
    ) -> Vec<Regime> {
        let mut regimes = classify_at(rotation.attack_rate(), thresholds);

        let demand: f64 = regimes
            .iter()
            .enumerate()
            .filter(|(_, &r)| r == Regime::CooldownBound)
            .map(|(i, _)| cooldown_rate(rotation, i))
            .sum();
        let capacity = per_second(rotation.quantizer().to_time(rotation.global_cooldown()));

        if demand > capacity * (1.0 + 1e-9) {
            for regime in regimes.iter_mut().filter(|r| **r == Regime::CooldownBound) {
                *regime = Regime::Unresolved;
            }
        }
        regimes
    }

    /// Closed-form rates, or `None` when the scheduler has to decide.
    ///
    /// Rotation order couples the skills, so a single unresolved skill
    /// leaves the whole rotation to the scheduler. So does any regime whose
    /// formula the cadence would not reproduce exactly:
    ///
    /// - a cooldown-bound skill fires every `cooldown` only when it runs
    ///   alone and its snapped cooldown is a whole number of attack slots;
    ///   otherwise the wait for the next slot (or for the cursor) stretches
    ///   its period
    /// - attack-bound skills split the attack rate evenly only when each one
    ///   is ready again by its next turn and the global cooldown never
    ///   blocks a slot
    pub fn closed_form(&self, rotation: &QuantizedRotation, regimes: &[Regime]) -> Option<Vec<f64>> {
        if !regimes.iter().all(|r| r.has_closed_form()) {
            return None;
        }

        let n = rotation.skill_count();
        let attack = rotation.attack();
        let turn = attack * n as u64;

        let exact = regimes.iter().enumerate().all(|(i, regime)| match regime {
            Regime::CooldownBound => {
                let cooldown = rotation.cooldown(i);
                n == 1 && cooldown > 0 && cooldown % attack == 0
            }
            Regime::AttackBound => {
                cadence::longest_wait(rotation, rotation.raw_cooldown(i)) <= turn
                    && cadence::longest_wait(rotation, rotation.raw_global_cooldown()) <= attack
            }
            _ => true,
        });
        if !exact {
            return None;
        }

        let share = rotation.attack_rate() / n as f64;
        Some(
            regimes
                .iter()
                .enumerate()
                .map(|(i, regime)| match regime {
                    Regime::CooldownBound => cooldown_rate(rotation, i),
                    Regime::AttackBound => share,
                    _ => 0.0,
                })
                .collect(),
        )
    }
}

/// Classify every skill at `attack_rate`.
pub fn classify_at(attack_rate: f64, thresholds: &[RegimeThresholds]) -> Vec<Regime> {
    let min_global = thresholds
        .iter()
        .map(|t| t.global_cooldown_bound)
        .fold(f64::INFINITY, f64::min);

    thresholds
        .iter()
        .map(|t| {
            if attack_rate >= t.cooldown_bound_upper {
                Regime::CooldownBound
            } else if attack_rate >= t.cooldown_bound_lower || attack_rate >= min_global {
                Regime::Unresolved
            } else if attack_rate >= t.attack_bound {
                Regime::AttackBound
            } else {
                Regime::Unreachable
            }
        })
        .collect()
}

/// Activations per second of a skill that fires as soon as it is ready.
#[inline]
fn cooldown_rate(rotation: &QuantizedRotation, skill: usize) -> f64 {
    per_second(rotation.quantizer().to_time(rotation.cooldown(skill)))
}

/// 1 / seconds, +inf for a zero span.
#[inline]
fn per_second(seconds: f64) -> f64 {
    if seconds > 0.0 {
        1.0 / seconds
    } else {
        f64::INFINITY
    }
}

// ========== Tests ==========
