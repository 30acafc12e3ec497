//! Tick Quantizer: continuous seconds <-> integer clock ticks.
//!
//! The engines never compare floating-point times. A `TickQuantizer` maps
//! seconds onto an integer clock where one server tick spans
//! `subdivisions` clock ticks; every cadence decision (server tick, attack
//! slot) is then exact integer rounding with [`ceil_to`] / [`floor_to`].

use serde::{Deserialize, Serialize};

/// A point or span on the integer clock.
pub type Ticks = u64;

/// Smallest multiple of `base` that is `>= x`.
///
/// `base` must be non-zero.
#[inline]
pub fn ceil_to(x: Ticks, base: Ticks) -> Ticks {
    x.div_ceil(base) * base
}

/// Largest multiple of `base` that is `<= x`.
///
/// `base` must be non-zero.
#[inline]
pub fn floor_to(x: Ticks, base: Ticks) -> Ticks {
    x / base * base
}

/// Converts between seconds and clock ticks for one server tick period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickQuantizer {
    tick_period: f64,
    subdivisions: Ticks,
}

impl TickQuantizer {
    /// 2^5 * 3^2 * 5 * 7 * 11 * 13: attack rates that divide the tick rate
    /// into small fractions, and cooldowns given in hundredths of a second,
    /// land exactly on the clock.
    pub const DEFAULT_SUBDIVISIONS: Ticks = 1_441_440;

    pub fn new(tick_period: f64) -> Self {
        Self::with_subdivisions(tick_period, Self::DEFAULT_SUBDIVISIONS)
    }

    /// `subdivisions` is clamped to at least 1.
    pub fn with_subdivisions(tick_period: f64, subdivisions: Ticks) -> Self {
        Self {
            tick_period,
            subdivisions: subdivisions.max(1),
        }
    }

    /// Seconds per server tick.
    #[inline]
    pub fn tick_period(&self) -> f64 {
        self.tick_period
    }

    /// One server tick, in clock ticks.
    #[inline]
    pub fn server_tick(&self) -> Ticks {
        self.subdivisions
    }

    /// Seconds -> clock ticks, rounded to the nearest tick.
    /// Negative inputs map to 0.
    #[inline]
    pub fn to_ticks(&self, seconds: f64) -> Ticks {
        let ticks = (seconds / self.tick_period * self.subdivisions as f64).round();
        if ticks <= 0.0 {
            0
        } else {
            ticks as Ticks
        }
    }

    /// Clock ticks -> seconds.
    #[inline]
    pub fn to_time(&self, ticks: Ticks) -> f64 {
        ticks as f64 / self.subdivisions as f64 * self.tick_period
    }

    /// Seconds rounded up to a whole number of server ticks, in clock ticks.
    #[inline]
    pub fn ceil_to_server_tick(&self, seconds: f64) -> Ticks {
        ceil_to(self.to_ticks(seconds), self.subdivisions)
    }
}

// ========== Tests ==========
