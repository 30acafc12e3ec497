//! Rotation input values and per-evaluation state.
//!
//! `Skill` and `RotationConfig` are immutable inputs owned by the caller.
//! `ActivationState` and `RotationCursor` are created fresh for every
//! evaluation and never outlive it.

mod rotation_config;
mod skill;
mod state;

pub use rotation_config::RotationConfig;
pub use skill::Skill;
pub use state::{ActivationState, RotationCursor};
