//! One scheduling decision.
//!
//! [`next_activation`] is a pure function of the rotation and the current
//! state; [`RotationState::apply`] commits its result.

use super::cadence;
use crate::engine::quantizer::Ticks;
use crate::engine::rotation::QuantizedRotation;
use crate::models::{ActivationState, RotationCursor};

/// Where the rotation stands between two activations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationState {
    pub cursor: RotationCursor,
    /// First attack slot not yet consumed by an activation
    pub next_slot: u64,
    /// Server tick on which the global cooldown runs out
    pub global_ready: Ticks,
    pub skills: Vec<ActivationState>,
}

/// The activation chosen by [`next_activation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub skill: usize,
    pub slot: u64,
    /// Server tick the attempt is processed on
    pub tick: Ticks,
}

/// Everything that determines the future of a run, relative to the next
/// free attack slot. Two states with equal keys produce the same
/// activation sequence, shifted in time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct StateKey {
    cursor: usize,
    phase: Ticks,
    global_remaining: Ticks,
    remaining: Vec<Ticks>,
}

impl RotationState {
    /// Everything ready at time 0, scan starting at `start` (wrapped into
    /// the rotation).
    pub fn new(skill_count: usize, start: usize) -> Self {
        Self {
            cursor: RotationCursor::starting_at(start.checked_rem(skill_count).unwrap_or(0)),
            next_slot: 0,
            global_ready: 0,
            skills: vec![ActivationState::default(); skill_count],
        }
    }

    pub fn counts(&self) -> Vec<u64> {
        self.skills.iter().map(|s| s.activation_count).collect()
    }

    pub fn total_activations(&self) -> u64 {
        self.skills.iter().map(|s| s.activation_count).sum()
    }

    /// Fewest activations of any skill.
    pub fn min_activations(&self) -> u64 {
        self.skills
            .iter()
            .map(|s| s.activation_count)
            .min()
            .unwrap_or(0)
    }

    /// Commit `activation`. Both cooldowns start at the attempt itself and
    /// end on a server tick.
    pub fn apply(&mut self, rotation: &QuantizedRotation, activation: Activation) {
        let Activation { skill, slot, tick } = activation;
        let attempt = rotation.slot_time(slot);
        let ready = cadence::ready_after(rotation, attempt, rotation.raw_cooldown(skill));
        self.skills[skill].activate(ready);
        self.global_ready = cadence::ready_after(rotation, attempt, rotation.raw_global_cooldown());
        self.next_slot = slot + 1;
        self.cursor
            .advance_past(skill, tick, rotation.skill_count());
    }

    /// Choose and commit the next activation.
    #[inline]
    pub fn advance(&mut self, rotation: &QuantizedRotation) -> Activation {
        let activation = next_activation(rotation, self);
        self.apply(rotation, activation);
        activation
    }

    pub(crate) fn key(&self, rotation: &QuantizedRotation) -> StateKey {
        let now = rotation.slot_time(self.next_slot);
        StateKey {
            cursor: self.cursor.skill_index,
            phase: cadence::phase(rotation, self.next_slot),
            global_remaining: self.global_ready.saturating_sub(now),
            remaining: self
                .skills
                .iter()
                .map(|s| s.next_ready.saturating_sub(now))
                .collect(),
        }
    }
}

/// The next skill to fire and when.
///
/// Each skill is usable from the first free attack slot that happens no
/// earlier than both its own cooldown and the global cooldown. The earliest
/// such slot wins; ties go to the skill closest after the cursor.
/// Wasted attempts never move the cursor, so jumping straight to the
/// winning slot is equivalent to scanning every attempt in between.
///
/// The rotation must hold at least one skill.
pub fn next_activation(rotation: &QuantizedRotation, state: &RotationState) -> Activation {
    let n = rotation.skill_count();
    let start = state.cursor.skill_index % n;

    let slot_for = |skill: usize| {
        let ready = state.skills[skill].next_ready.max(state.global_ready);
        cadence::first_slot_ready(rotation, state.next_slot, ready)
    };

    let mut skill = start;
    let mut slot = slot_for(start);
    for offset in 1..n {
        let candidate = (start + offset) % n;
        let candidate_slot = slot_for(candidate);
        if candidate_slot < slot {
            skill = candidate;
            slot = candidate_slot;
        }
    }

    Activation {
        skill,
        slot,
        tick: rotation.processing_tick(rotation.slot_time(slot)),
    }
}

/// Pure variant of [`RotationState::advance`].
pub fn step(rotation: &QuantizedRotation, state: &RotationState) -> (RotationState, Activation) {
    let activation = next_activation(rotation, state);
    let mut next = state.clone();
    next.apply(rotation, activation);
    (next, activation)
}
