//! Integer clock resolution.

use serde::{Deserialize, Serialize};

use crate::engine::quantizer::{TickQuantizer, Ticks};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantizerConfig {
    /// Clock ticks per server tick (default: 1_441_440)
    pub subdivisions: Ticks,
}

impl Default for QuantizerConfig {
    fn default() -> Self {
        Self {
            subdivisions: TickQuantizer::DEFAULT_SUBDIVISIONS,
        }
    }
}
