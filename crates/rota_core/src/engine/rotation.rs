//! Owned, integer-clock view of a rotation.
//!
//! Every evaluation quantizes its own copy of the caller's configuration, so
//! concurrent evaluations never share (or mutate) skill records.

use crate::engine::quantizer::{ceil_to, TickQuantizer, Ticks};
use crate::error::Result;
use crate::models::RotationConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedRotation {
    quantizer: TickQuantizer,
    /// Attack cadence (never 0)
    attack: Ticks,
    /// Global cooldown before server-tick snapping
    raw_global_cooldown: Ticks,
    /// max(cooldown, global cooldown) before server-tick snapping
    raw_cooldowns: Vec<Ticks>,
    /// Global cooldown snapped up to whole server ticks
    global_cooldown: Ticks,
    /// Effective cooldowns snapped up to whole server ticks
    cooldowns: Vec<Ticks>,
}

impl QuantizedRotation {
    /// Validate `config` and quantize it onto a clock with `subdivisions`
    /// clock ticks per server tick.
    pub fn new(config: &RotationConfig, subdivisions: Ticks) -> Result<Self> {
        config.validate()?;

        let quantizer = TickQuantizer::with_subdivisions(config.server_tick_period, subdivisions);
        let server_tick = quantizer.server_tick();

        let raw_global_cooldown = quantizer.to_ticks(config.global_cooldown);
        let raw_cooldowns: Vec<Ticks> = config
            .skills
            .iter()
            .map(|s| quantizer.to_ticks(s.effective_cooldown(config.global_cooldown)))
            .collect();

        Ok(Self {
            quantizer,
            attack: quantizer.to_ticks(config.attack_period).max(1),
            raw_global_cooldown,
            global_cooldown: ceil_to(raw_global_cooldown, server_tick),
            cooldowns: raw_cooldowns
                .iter()
                .map(|&c| ceil_to(c, server_tick))
                .collect(),
            raw_cooldowns,
        })
    }

    #[inline]
    pub fn quantizer(&self) -> &TickQuantizer {
        &self.quantizer
    }

    #[inline]
    pub fn skill_count(&self) -> usize {
        self.cooldowns.len()
    }

    #[inline]
    pub fn attack(&self) -> Ticks {
        self.attack
    }

    #[inline]
    pub fn server_tick(&self) -> Ticks {
        self.quantizer.server_tick()
    }

    #[inline]
    pub fn global_cooldown(&self) -> Ticks {
        self.global_cooldown
    }

    #[inline]
    pub fn cooldown(&self, skill: usize) -> Ticks {
        self.cooldowns[skill]
    }

    #[inline]
    pub fn cooldowns(&self) -> &[Ticks] {
        &self.cooldowns
    }

    #[inline]
    pub fn raw_global_cooldown(&self) -> Ticks {
        self.raw_global_cooldown
    }

    #[inline]
    pub fn raw_cooldown(&self, skill: usize) -> Ticks {
        self.raw_cooldowns[skill]
    }

    /// Attacks per second on the quantized cadence.
    pub fn attack_rate(&self) -> f64 {
        1.0 / self.quantizer.to_time(self.attack)
    }

    /// Server tick on which the attempt at `attempt_time` is processed.
    #[inline]
    pub fn processing_tick(&self, attempt_time: Ticks) -> Ticks {
        ceil_to(attempt_time, self.server_tick())
    }

    /// Clock time of attack slot `slot`.
    #[inline]
    pub fn slot_time(&self, slot: u64) -> Ticks {
        slot * self.attack
    }

    /// Rate over `span` clock ticks for `count` activations.
    pub fn rate(&self, count: u64, span: Ticks) -> f64 {
        if span == 0 {
            return 0.0;
        }
        count as f64 / self.quantizer.to_time(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RotationError;
    use crate::models::Skill;

    fn rotation(aps: f64, skills: Vec<Skill>) -> QuantizedRotation {
        let cfg = RotationConfig::from_rates(30.0, aps, 0.15, skills);
        QuantizedRotation::new(&cfg, TickQuantizer::DEFAULT_SUBDIVISIONS).unwrap()
    }

    #[test]
    fn test_cooldowns_clamped_and_snapped() {
        let rot = rotation(4.0, vec![Skill::new("Frost Bomb", 2.5), Skill::new("Arc", 0.0)]);
        let tick = rot.server_tick();
        assert_eq!(rot.cooldown(0), 75 * tick);
        // 0 -> 0.15s (4.5 ticks) -> 5 ticks
        assert_eq!(rot.raw_cooldown(1), tick * 9 / 2);
        assert_eq!(rot.cooldown(1), 5 * tick);
        assert_eq!(rot.global_cooldown(), 5 * tick);
        assert_eq!(rot.attack(), tick * 15 / 2);
    }

    #[test]
    fn test_caller_config_is_not_mutated() {
        let cfg = RotationConfig::from_rates(30.0, 4.0, 0.15, vec![Skill::new("Arc", 0.0)]);
        let before = cfg.clone();
        let _ = QuantizedRotation::new(&cfg, TickQuantizer::DEFAULT_SUBDIVISIONS).unwrap();
        assert_eq!(cfg, before);
        assert_eq!(cfg.skills[0].cooldown, 0.0);
    }

    #[test]
    fn test_processing_tick() {
        let rot = rotation(4.0, vec![Skill::new("Arc", 0.0)]);
        let tick = rot.server_tick();
        assert_eq!(rot.processing_tick(0), 0);
        assert_eq!(rot.processing_tick(rot.slot_time(1)), 8 * tick);
        assert_eq!(rot.processing_tick(rot.slot_time(2)), 15 * tick);
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let cfg = RotationConfig::new(0.0, 0.25, 0.15, vec![Skill::new("Arc", 0.0)]);
        let err = QuantizedRotation::new(&cfg, TickQuantizer::DEFAULT_SUBDIVISIONS).unwrap_err();
        assert!(matches!(err, RotationError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_attack_rate_round_trip() {
        let rot = rotation(16.0, vec![Skill::new("Arc", 0.0)]);
        assert!((rot.attack_rate() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_rate_zero_span() {
        let rot = rotation(4.0, vec![Skill::new("Arc", 0.0)]);
        assert_eq!(rot.rate(3, 0), 0.0);
    }
}
