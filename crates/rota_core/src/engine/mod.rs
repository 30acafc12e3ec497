//! Rate engines on a shared integer clock.
//!
//! - [`quantizer`]: seconds <-> clock ticks
//! - [`rotation`]: validated, quantized copy of a rotation
//! - [`scheduler`]: event-driven steady-state rates
//! - [`reference`]: fixed-step oracle

pub mod config;
pub mod quantizer;
pub mod reference;
pub mod rotation;
pub mod scheduler;

pub use config::{EngineConfig, StartPolicy};
pub use quantizer::{ceil_to, floor_to, TickQuantizer, Ticks};
pub use reference::{ReferenceOutcome, ReferenceRun, ReferenceSimulator};
pub use rotation::QuantizedRotation;
pub use scheduler::{EventScheduler, RunOutcome, ScheduleOutcome};
