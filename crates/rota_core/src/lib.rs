//! # rota_core - Skill Rotation Rate Engine
//!
//! Estimates the long-run activation rate of every skill in a round-robin
//! rotation limited by per-skill cooldowns, a shared global cooldown, a
//! fixed attack cadence and the server tick.
//!
//! ## Features
//! - Event-driven scheduler with exact steady-state (cycle) detection
//! - Brute-force fixed-step reference simulator for validation
//! - Closed-form regime classifier that skips the scheduler when it can
//! - Integer clock: no floating-point time comparisons in the engines
//!
//! ## Usage
//! ```rust
//! use rota_core::{evaluate, RotationConfig, Skill};
//!
//! let config = RotationConfig::from_rates(30.0, 4.0, 0.15, vec![Skill::new("Frost Bomb", 2.5)]);
//! let rates = evaluate(&config).unwrap();
//! assert!((rates[0] - 0.4).abs() < 1e-9);
//! ```

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod analysis;
pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod sweep;

pub use analysis::{Regime, RegimeClassifier, RegimeThresholds};
pub use api::{classify, evaluate, simulate_reference, Evaluation, RateEngine, Resolution};
pub use engine::{EngineConfig, QuantizedRotation, StartPolicy, TickQuantizer, Ticks};
pub use error::{ConfigIssue, Result, RotationError};
pub use models::{ActivationState, RotationConfig, RotationCursor, Skill};
pub use sweep::{subsample, sweep_attack_rates, SweepOptions, SweepPoint};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
