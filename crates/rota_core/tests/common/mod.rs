//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rota_core::{RotationConfig, Skill};

pub const TICK_RATE: f64 = 30.0;
pub const GLOBAL_COOLDOWN: f64 = 0.15;

/// Attack rates used by the agreement sweeps: powers of two and their
/// midpoints. Every one of them is a whole number of reference steps.
pub const SWEEP_RATES: [f64; 9] = [4.0, 6.0, 8.0, 12.0, 16.0, 24.0, 32.0, 48.0, 64.0];

pub fn skill_sets() -> Vec<Vec<Skill>> {
    vec![
        vec![Skill::new("Ice Spear", 0.0)],
        vec![Skill::new("Ice Spear", 0.0), Skill::new("Arc", 0.0)],
        vec![Skill::new("Frost Bomb", 2.5), Skill::new("Arc", 0.0)],
        vec![Skill::new("Ice Spear", 0.0), Skill::new("Frost Bomb", 2.5)],
        vec![
            Skill::new("Frost Bomb", 2.5),
            Skill::new("Arc", 0.0),
            Skill::new("Ice Spear", 0.0),
        ],
    ]
}

/// Cooldowns that are not a whole number of attack slots at most rates.
pub fn off_grid_skill_sets() -> Vec<Vec<Skill>> {
    vec![
        vec![Skill::new("Nova", 0.5)],
        vec![Skill::new("Blink", 1.0), Skill::new("Shock", 0.3)],
    ]
}

pub fn all_skill_sets() -> Vec<Vec<Skill>> {
    skill_sets().into_iter().chain(off_grid_skill_sets()).collect()
}

pub fn config(attack_rate: f64, skills: Vec<Skill>) -> RotationConfig {
    RotationConfig::from_rates(TICK_RATE, attack_rate, GLOBAL_COOLDOWN, skills)
}

pub fn config_with_cooldowns(attack_rate: f64, cooldowns: &[f64]) -> RotationConfig {
    let skills = cooldowns
        .iter()
        .enumerate()
        .map(|(i, &cd)| Skill::new(format!("skill_{i}"), cd))
        .collect();
    config(attack_rate, skills)
}

pub fn names(skills: &[Skill]) -> String {
    skills
        .iter()
        .map(|s| s.id.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}
