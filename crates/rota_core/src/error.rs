use thiserror::Error;

/// Reasons a rotation configuration cannot be evaluated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigIssue {
    #[error("rotation has no skills")]
    EmptyRotation,

    #[error("attack period must be positive and finite, got {0}")]
    InvalidAttackPeriod(f64),

    #[error("server tick period must be positive and finite, got {0}")]
    InvalidTickPeriod(f64),

    #[error("global cooldown must be non-negative and finite, got {0}")]
    InvalidGlobalCooldown(f64),

    #[error("skill '{id}' has invalid cooldown {cooldown}")]
    InvalidCooldown { id: String, cooldown: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),

    #[error("Invalid engine settings: {0}")]
    InvalidSettings(String),
}

impl RotationError {
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, RotationError::InvalidConfiguration(_))
    }
}

pub type Result<T> = std::result::Result<T, RotationError>;
