//! Attack-slot arithmetic for the scheduler.
//!
//! Attempt `n` happens at `n * attack` and is processed by the server on
//! `ceil_to(n * attack, server_tick)`. Cooldowns started by an attempt end
//! on the first server tick at or after `attempt + cooldown`.

use crate::engine::quantizer::{ceil_to, Ticks};
use crate::engine::rotation::QuantizedRotation;

/// First slot `>= from_slot` whose attempt happens at or after `ready`.
#[inline]
pub fn first_slot_ready(rotation: &QuantizedRotation, from_slot: u64, ready: Ticks) -> u64 {
    ready.div_ceil(rotation.attack()).max(from_slot)
}

/// Server tick on which a cooldown of `span` started by the attempt at
/// `attempt_time` runs out.
#[inline]
pub fn ready_after(rotation: &QuantizedRotation, attempt_time: Ticks, span: Ticks) -> Ticks {
    ceil_to(attempt_time + span, rotation.server_tick())
}

/// Longest wait, over every attack slot, between an attempt and the end of
/// a cooldown of `span` it starts.
///
/// Slots fall on multiples of `gcd(attack, server_tick)` within a tick, so
/// the worst case is the slot whose `attempt + span` lands just past a tick.
pub fn longest_wait(rotation: &QuantizedRotation, span: Ticks) -> Ticks {
    let tick = rotation.server_tick();
    let step = gcd(rotation.attack(), tick);
    match span % step {
        0 => span + tick - step,
        rest => span + tick - rest,
    }
}

/// Offset of the attempt cadence against the server tick at `slot`.
#[inline]
pub fn phase(rotation: &QuantizedRotation, slot: u64) -> Ticks {
    rotation.slot_time(slot) % rotation.server_tick()
}

fn gcd(mut a: Ticks, mut b: Ticks) -> Ticks {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
