//! Steady-state detection.
//!
//! The scheduler state space is finite once cooldowns are measured relative
//! to the next free slot, so every run eventually enters a cycle. Rates
//! over one full cycle are the exact long-run rates.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::step::{RotationState, StateKey};
use crate::engine::config::SchedulerConfig;
use crate::engine::quantizer::Ticks;
use crate::engine::rotation::QuantizedRotation;

/// Result of a single run from one starting skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub start: usize,
    /// Activations per second, per skill
    pub rates: Vec<f64>,
    /// A repeating state was found before the round budget ran out
    pub converged: bool,
    /// Activations simulated
    pub rounds: u64,
    /// Length of the detected cycle in attack slots
    pub cycle_slots: Option<u64>,
}

#[derive(Debug, Clone)]
struct Checkpoint {
    time: Ticks,
    slot: u64,
    counts: Vec<u64>,
}

impl Checkpoint {
    fn of(rotation: &QuantizedRotation, state: &RotationState) -> Self {
        Self {
            time: rotation.slot_time(state.next_slot),
            slot: state.next_slot,
            counts: state.counts(),
        }
    }

    fn rates_until(&self, rotation: &QuantizedRotation, later: &Checkpoint) -> Vec<f64> {
        let span = later.time - self.time;
        later
            .counts
            .iter()
            .zip(&self.counts)
            .map(|(&to, &from)| rotation.rate(to - from, span))
            .collect()
    }
}

/// Run the scheduler from `start` (wrapped into the rotation) until the
/// state repeats or the round budget is spent.
pub fn run_from(rotation: &QuantizedRotation, start: usize, config: &SchedulerConfig) -> RunOutcome {
    let mut state = RotationState::new(rotation.skill_count(), start);
    let start = state.cursor.skill_index;
    let mut seen: HashMap<StateKey, Checkpoint> = HashMap::new();
    let mut warm_up: Option<Checkpoint> = None;

    for round in 1..=config.round_budget {
        state.advance(rotation);
        if state.min_activations() < config.min_observations {
            continue;
        }

        let checkpoint = Checkpoint::of(rotation, &state);
        if warm_up.is_none() {
            warm_up = Some(checkpoint.clone());
        }

        match seen.entry(state.key(rotation)) {
            Entry::Occupied(entry) => {
                let first = entry.get();
                let cycle_slots = checkpoint.slot - first.slot;
                debug!(
                    "Run from skill {} converged after {} rounds, cycle of {} slots",
                    start, round, cycle_slots
                );
                return RunOutcome {
                    start,
                    rates: first.rates_until(rotation, &checkpoint),
                    converged: true,
                    rounds: round,
                    cycle_slots: Some(cycle_slots),
                };
            }
            Entry::Vacant(entry) => {
                entry.insert(checkpoint);
            }
        }
    }

    let end = Checkpoint::of(rotation, &state);
    let rates = match warm_up {
        Some(ref from) if end.time > from.time => from.rates_until(rotation, &end),
        _ => end
            .counts
            .iter()
            .map(|&count| rotation.rate(count, end.time))
            .collect(),
    };
    warn!(
        "Run from skill {} did not converge within {} rounds; rates are estimates",
        start, config.round_budget
    );

    RunOutcome {
        start,
        rates,
        converged: false,
        rounds: config.round_budget,
        cycle_slots: None,
    }
}
