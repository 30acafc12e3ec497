use serde::{Deserialize, Serialize};

/// A skill in a rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Identity of the skill (display name in balance reports)
    pub id: String,
    /// Cooldown in seconds
    pub cooldown: f64,
}

impl Skill {
    pub fn new(id: impl Into<String>, cooldown: f64) -> Self {
        Self {
            id: id.into(),
            cooldown,
        }
    }

    /// Cooldown actually used for scheduling: a skill can never come back
    /// sooner than the global cooldown allows.
    #[inline]
    pub fn effective_cooldown(&self, global_cooldown: f64) -> f64 {
        self.cooldown.max(global_cooldown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_cooldown_clamps_to_gcd() {
        let arc = Skill::new("Arc", 0.0);
        assert!((arc.effective_cooldown(0.15) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_effective_cooldown_keeps_longer_cooldown() {
        let bomb = Skill::new("Frost Bomb", 2.5);
        assert!((bomb.effective_cooldown(0.15) - 2.5).abs() < 1e-12);
    }
}
