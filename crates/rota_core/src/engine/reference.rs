//! # Brute-Force Simulator
//!
//! Ground truth for the scheduler. Walks the clock in steps much smaller
//! than a server tick, keeps a running server-tick accumulator, and handles
//! an attack attempt whenever the clock reaches the next cadence slot.
//!
//! Deliberately slow: cost is `time_max / step` per run regardless of the
//! rotation.

use log::trace;
use serde::{Deserialize, Serialize};

use super::config::{ReferenceConfig, StartPolicy};
use super::quantizer::{floor_to, Ticks};
use super::rotation::QuantizedRotation;
use super::scheduler::average_rates;
use crate::models::{ActivationState, RotationCursor};

/// One fixed-horizon run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRun {
    pub start: usize,
    pub counts: Vec<u64>,
    /// Simulated seconds
    pub elapsed: f64,
    /// Attempts on which no skill was ready
    pub wasted_attempts: u64,
    pub rates: Vec<f64>,
}

/// Rates averaged over every run allowed by the start policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceOutcome {
    pub rates: Vec<f64>,
    pub runs: Vec<ReferenceRun>,
}

impl ReferenceOutcome {
    pub fn wasted_attempts(&self) -> u64 {
        self.runs.iter().map(|r| r.wasted_attempts).sum()
    }
}

pub struct ReferenceSimulator<'a> {
    rotation: &'a QuantizedRotation,
    config: &'a ReferenceConfig,
}

impl<'a> ReferenceSimulator<'a> {
    pub fn new(rotation: &'a QuantizedRotation, config: &'a ReferenceConfig) -> Self {
        Self { rotation, config }
    }

    /// Clock step; divides the server tick whenever `steps_per_tick` does.
    pub fn time_delta(&self) -> Ticks {
        (self.rotation.server_tick() / self.config.steps_per_tick.max(1)).max(1)
    }

    /// One run with the scan starting at `start` (wrapped into the
    /// rotation).
    pub fn simulate_from(&self, start: usize) -> ReferenceRun {
        let rot = self.rotation;
        let server_tick = rot.server_tick();
        let attack = rot.attack();
        let delta = self.time_delta();
        let horizon = rot.quantizer().to_ticks(self.config.time_max);
        let n = rot.skill_count();
        let start = start % n;

        let mut skills = vec![ActivationState::default(); n];
        let mut cursor = RotationCursor::starting_at(start);
        let mut global_ready: Ticks = 0;
        let mut time: Ticks = 0;
        let mut tick: Ticks = 0;
        let mut trigger_next: Ticks = 0;
        let mut wasted = 0u64;

        while time < horizon {
            if time >= trigger_next {
                let winner = if global_ready <= time {
                    (0..n)
                        .map(|offset| (cursor.skill_index + offset) % n)
                        .find(|&i| skills[i].is_ready_at(time))
                } else {
                    None
                };

                match winner {
                    Some(i) => {
                        skills[i].activate(snap_from(tick, time + rot.raw_cooldown(i), server_tick));
                        global_ready = snap_from(tick, time + rot.raw_global_cooldown(), server_tick);
                        cursor.advance_past(i, tick, n);
                    }
                    None => wasted += 1,
                }
                trigger_next = floor_to(time, attack) + attack;
            }

            time += delta;
            while tick < time {
                tick += server_tick;
            }
        }

        let counts: Vec<u64> = skills.iter().map(|s| s.activation_count).collect();
        let rates = counts.iter().map(|&c| rot.rate(c, time)).collect();
        trace!(
            "Reference run from skill {}: {} activations, {} wasted attempts",
            start,
            counts.iter().sum::<u64>(),
            wasted
        );

        ReferenceRun {
            start,
            counts,
            elapsed: rot.quantizer().to_time(time),
            wasted_attempts: wasted,
            rates,
        }
    }

    pub fn run(&self, policy: StartPolicy) -> ReferenceOutcome {
        let runs: Vec<ReferenceRun> = policy
            .starts(self.rotation.skill_count())
            .map(|start| self.simulate_from(start))
            .collect();
        ReferenceOutcome {
            rates: average_rates(self.rotation.skill_count(), runs.iter().map(|r| &r.rates)),
            runs,
        }
    }
}

/// First server tick reachable from `tick` that is not before `target`.
#[inline]
fn snap_from(tick: Ticks, target: Ticks, server_tick: Ticks) -> Ticks {
    let mut snapped = tick;
    while snapped < target {
        snapped += server_tick;
    }
    snapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::quantizer::TickQuantizer;
    use crate::models::{RotationConfig, Skill};

    fn rotation(aps: f64, cooldowns: &[f64]) -> QuantizedRotation {
        let skills = cooldowns
            .iter()
            .enumerate()
            .map(|(i, &cd)| Skill::new(format!("skill_{i}"), cd))
            .collect();
        let cfg = RotationConfig::from_rates(30.0, aps, 0.15, skills);
        QuantizedRotation::new(&cfg, TickQuantizer::DEFAULT_SUBDIVISIONS).unwrap()
    }

    #[test]
    fn test_snap_from() {
        assert_eq!(snap_from(30, 25, 10), 30);
        assert_eq!(snap_from(30, 30, 10), 30);
        assert_eq!(snap_from(30, 31, 10), 40);
        assert_eq!(snap_from(30, 75, 10), 80);
    }

    #[test]
    fn test_single_skill_counts() {
        // activations at 0, 2.5, 5.0, ... 97.5 within 100s
        let rot = rotation(4.0, &[2.5]);
        let config = ReferenceConfig::default();
        let run = ReferenceSimulator::new(&rot, &config).simulate_from(0);
        assert_eq!(run.counts, vec![40]);
        assert!((run.elapsed - 100.0).abs() < 1e-9);
        assert!((run.rates[0] - 0.4).abs() < 1e-12);
        // 400 attempts, 40 used
        assert_eq!(run.wasted_attempts, 360);
    }

    #[test]
    fn test_two_free_skills_alternate() {
        let rot = rotation(4.0, &[0.0, 0.0]);
        let config = ReferenceConfig {
            time_max: 10.0,
            steps_per_tick: 48,
        };
        let run = ReferenceSimulator::new(&rot, &config).simulate_from(0);
        assert_eq!(run.counts, vec![20, 20]);
        assert_eq!(run.wasted_attempts, 0);
    }

    #[test]
    fn test_cooldown_runs_from_attempt_time() {
        // 7 aps: every other attempt lands after the gcd, 3.5/s
        let rot = rotation(7.0, &[0.0]);
        let config = ReferenceConfig {
            time_max: 10.0,
            steps_per_tick: 480,
        };
        let run = ReferenceSimulator::new(&rot, &config).simulate_from(0);
        assert_eq!(run.counts, vec![35]);
        assert_eq!(run.wasted_attempts, 35);
    }

    #[test]
    fn test_out_of_range_start_wraps() {
        let rot = rotation(8.0, &[2.5, 0.0, 0.0]);
        let config = ReferenceConfig {
            time_max: 5.0,
            steps_per_tick: 48,
        };
        let sim = ReferenceSimulator::new(&rot, &config);
        let wrapped = sim.simulate_from(5);
        assert_eq!(wrapped.start, 2);
        assert_eq!(wrapped.counts, sim.simulate_from(2).counts);
    }

    #[test]
    fn test_time_delta_divides_server_tick() {
        let rot = rotation(4.0, &[0.0]);
        let config = ReferenceConfig::default();
        let sim = ReferenceSimulator::new(&rot, &config);
        assert_eq!(rot.server_tick() % sim.time_delta(), 0);
        assert!(sim.time_delta() < rot.attack());
    }

    #[test]
    fn test_every_skill_policy_averages() {
        let rot = rotation(8.0, &[2.5, 0.0, 0.0]);
        let config = ReferenceConfig {
            time_max: 20.0,
            steps_per_tick: 48,
        };
        let outcome = ReferenceSimulator::new(&rot, &config).run(StartPolicy::EverySkill);
        assert_eq!(outcome.runs.len(), 3);
        for (i, rate) in outcome.rates.iter().enumerate() {
            let mean = outcome.runs.iter().map(|r| r.rates[i]).sum::<f64>() / 3.0;
            assert!((rate - mean).abs() < 1e-12);
        }
    }
}
