use serde::{Deserialize, Serialize};

use super::Skill;
use crate::error::{ConfigIssue, Result};

/// A skill rotation as the server sees it.
///
/// Rotation order matters: skills are considered left to right, wrapping
/// around after the last one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationConfig {
    /// Seconds per server tick
    pub server_tick_period: f64,
    /// Seconds between attack attempts (1 / attacks per second)
    pub attack_period: f64,
    /// Seconds between any two activations
    pub global_cooldown: f64,
    /// Skills in rotation order
    pub skills: Vec<Skill>,
}

impl RotationConfig {
    pub fn new(
        server_tick_period: f64,
        attack_period: f64,
        global_cooldown: f64,
        skills: Vec<Skill>,
    ) -> Self {
        Self {
            server_tick_period,
            attack_period,
            global_cooldown,
            skills,
        }
    }

    /// Build from rates: server ticks per second and attacks per second.
    pub fn from_rates(
        tick_rate: f64,
        attacks_per_second: f64,
        global_cooldown: f64,
        skills: Vec<Skill>,
    ) -> Self {
        Self::new(1.0 / tick_rate, 1.0 / attacks_per_second, global_cooldown, skills)
    }

    /// Copy of this rotation at a different attack rate (sweep point).
    pub fn with_attack_rate(&self, attacks_per_second: f64) -> Self {
        Self {
            attack_period: 1.0 / attacks_per_second,
            ..self.clone()
        }
    }

    /// Attacks per second.
    #[inline]
    pub fn attack_rate(&self) -> f64 {
        1.0 / self.attack_period
    }

    #[inline]
    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    /// Reject configurations the engines cannot reason about.
    pub fn validate(&self) -> Result<()> {
        if self.skills.is_empty() {
            return Err(ConfigIssue::EmptyRotation.into());
        }
        if !(self.attack_period.is_finite() && self.attack_period > 0.0) {
            return Err(ConfigIssue::InvalidAttackPeriod(self.attack_period).into());
        }
        if !(self.server_tick_period.is_finite() && self.server_tick_period > 0.0) {
            return Err(ConfigIssue::InvalidTickPeriod(self.server_tick_period).into());
        }
        if !(self.global_cooldown.is_finite() && self.global_cooldown >= 0.0) {
            return Err(ConfigIssue::InvalidGlobalCooldown(self.global_cooldown).into());
        }
        if let Some(skill) = self
            .skills
            .iter()
            .find(|s| !(s.cooldown.is_finite() && s.cooldown >= 0.0))
        {
            return Err(ConfigIssue::InvalidCooldown {
                id: skill.id.clone(),
                cooldown: skill.cooldown,
            }
            .into());
        }
        Ok(())
    }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RotationError;

    fn frost_arc() -> RotationConfig {
        RotationConfig::from_rates(
            30.0,
            4.0,
            0.15,
            vec![Skill::new("Frost Bomb", 2.5), Skill::new("Arc", 0.0)],
        )
    }

    #[test]
    fn test_from_rates() {
        let cfg = frost_arc();
        assert!((cfg.server_tick_period - 1.0 / 30.0).abs() < 1e-12);
        assert!((cfg.attack_period - 0.25).abs() < 1e-12);
        assert!((cfg.attack_rate() - 4.0).abs() < 1e-12);
        assert_eq!(cfg.skill_count(), 2);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_with_attack_rate_leaves_source_untouched() {
        let cfg = frost_arc();
        let faster = cfg.with_attack_rate(16.0);
        assert!((faster.attack_rate() - 16.0).abs() < 1e-9);
        assert!((cfg.attack_rate() - 4.0).abs() < 1e-12);
        assert_eq!(faster.skills, cfg.skills);
    }

    #[test]
    fn test_empty_rotation_rejected() {
        let cfg = RotationConfig::new(1.0 / 30.0, 0.25, 0.15, Vec::new());
        assert_eq!(
            cfg.validate(),
            Err(RotationError::InvalidConfiguration(ConfigIssue::EmptyRotation))
        );
    }

    #[test]
    fn test_non_positive_periods_rejected() {
        let mut cfg = frost_arc();
        cfg.attack_period = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(RotationError::InvalidConfiguration(ConfigIssue::InvalidAttackPeriod(_)))
        ));

        let mut cfg = frost_arc();
        cfg.server_tick_period = -0.1;
        assert!(matches!(
            cfg.validate(),
            Err(RotationError::InvalidConfiguration(ConfigIssue::InvalidTickPeriod(_)))
        ));

        let mut cfg = frost_arc();
        cfg.attack_period = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_negative_cooldown_rejected() {
        let mut cfg = frost_arc();
        cfg.skills[1].cooldown = -0.5;
        match cfg.validate() {
            Err(RotationError::InvalidConfiguration(ConfigIssue::InvalidCooldown { id, .. })) => {
                assert_eq!(id, "Arc");
            }
            other => panic!("expected InvalidCooldown, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_global_cooldown_rejected() {
        let mut cfg = frost_arc();
        cfg.global_cooldown = -0.01;
        assert!(cfg.validate().unwrap_err().is_invalid_configuration());
    }
}
