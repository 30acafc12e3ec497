use serde::{Deserialize, Serialize};

use crate::engine::quantizer::Ticks;

/// Per-skill scheduling state, scoped to a single evaluation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivationState {
    /// Server tick on which the skill's cooldown runs out
    pub next_ready: Ticks,
    /// Activations so far in this run
    pub activation_count: u64,
}

impl ActivationState {
    /// Whether an attempt at `time` may use the skill.
    #[inline]
    pub fn is_ready_at(&self, time: Ticks) -> bool {
        self.next_ready <= time
    }

    /// Record an activation; the skill is usable again from `ready_at`.
    #[inline]
    pub fn activate(&mut self, ready_at: Ticks) {
        self.next_ready = ready_at;
        self.activation_count += 1;
    }
}

/// Progress pointer into the rotation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationCursor {
    /// Server tick of the most recent activation (0 before the first one)
    pub time: Ticks,
    /// Skill the next rotation scan starts from
    pub skill_index: usize,
}

impl RotationCursor {
    pub fn starting_at(skill_index: usize) -> Self {
        Self {
            time: 0,
            skill_index,
        }
    }

    /// Move past the skill that just fired at `time`.
    #[inline]
    pub fn advance_past(&mut self, winner: usize, time: Ticks, skill_count: usize) {
        self.time = time;
        self.skill_index = (winner + 1) % skill_count;
    }
}
