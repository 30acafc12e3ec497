//! # Event-Driven Scheduler
//!
//! Jumps from activation to activation instead of stepping through time.
//! Each step asks every skill for the first attack slot it could use and
//! fires the earliest one (rotation order breaks ties). A run stops as soon
//! as the relative state repeats, which yields exact steady-state rates.
//!
//! ## Structure
//! - `cadence`: attack-slot / server-tick arithmetic
//! - `step`: the pure decision function and the state it advances
//! - `convergence`: cycle detection and budget fallback

pub mod cadence;
pub mod convergence;
pub mod step;

pub use convergence::{run_from, RunOutcome};
pub use step::{next_activation, step, Activation, RotationState};

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::{SchedulerConfig, StartPolicy};
use super::rotation::QuantizedRotation;

/// Rates averaged over every run allowed by the start policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    pub rates: Vec<f64>,
    /// Every run found its cycle
    pub converged: bool,
    /// Activations simulated across all runs
    pub rounds: u64,
    pub runs: Vec<RunOutcome>,
}

pub struct EventScheduler<'a> {
    rotation: &'a QuantizedRotation,
    config: &'a SchedulerConfig,
}

impl<'a> EventScheduler<'a> {
    pub fn new(rotation: &'a QuantizedRotation, config: &'a SchedulerConfig) -> Self {
        Self { rotation, config }
    }

    pub fn run_from(&self, start: usize) -> RunOutcome {
        run_from(self.rotation, start, self.config)
    }

    pub fn run(&self, policy: StartPolicy) -> ScheduleOutcome {
        let runs: Vec<RunOutcome> = policy
            .starts(self.rotation.skill_count())
            .map(|start| self.run_from(start))
            .collect();

        let rates = average_rates(self.rotation.skill_count(), runs.iter().map(|r| &r.rates));
        let converged = runs.iter().all(|r| r.converged);
        let rounds = runs.iter().map(|r| r.rounds).sum();

        debug!(
            "Scheduled {} skills over {} runs ({} rounds, converged: {})",
            self.rotation.skill_count(),
            runs.len(),
            rounds,
            converged
        );

        ScheduleOutcome {
            rates,
            converged,
            rounds,
            runs,
        }
    }
}

/// Element-wise mean of per-run rate vectors.
pub(crate) fn average_rates<'r>(
    skill_count: usize,
    runs: impl Iterator<Item = &'r Vec<f64>>,
) -> Vec<f64> {
    let mut sums = vec![0.0; skill_count];
    let mut n = 0usize;
    for rates in runs {
        for (sum, rate) in sums.iter_mut().zip(rates) {
            *sum += rate;
        }
        n += 1;
    }
    if n > 0 {
        for sum in &mut sums {
            *sum /= n as f64;
        }
    }
    sums
}
