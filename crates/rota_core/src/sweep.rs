//! Attack-rate sweeps.
//!
//! Each sweep point owns its own copy of the rotation, so points run in
//! parallel with no shared mutable state.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::api::{Evaluation, RateEngine};
use crate::error::Result;
use crate::models::RotationConfig;

/// Insert the midpoint between every pair of neighbours, `depth` times.
///
/// `[4, 8, 16]` at depth 1 becomes `[4, 6, 8, 12, 16]`; each level
/// roughly doubles the number of points.
pub fn subsample(rates: &[f64], depth: u32) -> Vec<f64> {
    let mut current = rates.to_vec();
    for _ in 0..depth {
        let mut next = Vec::with_capacity(current.len() * 2);
        for pair in current.windows(2) {
            next.push(pair[0]);
            next.push((pair[0] + pair[1]) / 2.0);
        }
        if let Some(&last) = current.last() {
            next.push(last);
        }
        current = next;
    }
    current
}

/// Attack rates doubling from `from` up to and including `to`.
pub fn doubling(from: f64, to: f64) -> Vec<f64> {
    let mut rates = Vec::new();
    let mut rate = from;
    while from > 0.0 && rate <= to {
        rates.push(rate);
        rate *= 2.0;
    }
    rates
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepOptions {
    /// Also run the brute-force simulator at every point
    pub with_reference: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub attack_rate: f64,
    pub evaluation: Evaluation,
    /// Brute-force rates, when requested
    pub reference: Option<Vec<f64>>,
}

/// Evaluate `base` at every attack rate, in parallel.
///
/// Points come back in the order of `attack_rates`. The first invalid
/// point aborts the sweep.
pub fn sweep_attack_rates(
    engine: &RateEngine,
    base: &RotationConfig,
    attack_rates: &[f64],
    options: SweepOptions,
) -> Result<Vec<SweepPoint>> {
    attack_rates
        .par_iter()
        .map(|&attack_rate| {
            let config = base.with_attack_rate(attack_rate);
            let evaluation = engine.evaluate(&config)?;
            let reference = if options.with_reference {
                Some(engine.simulate_reference(&config)?.rates)
            } else {
                None
            };
            Ok(SweepPoint {
                attack_rate,
                evaluation,
                reference,
            })
        })
        .collect()
}
