//! Errors raised by creatures and combatants.

use crate::error::{ErrorSeverity, GameError};

/// Errors returned when a combatant tries to attack.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackError {
    /// Not enough energy left to pay the attack cost.
    #[error("{name} is out of energy! (energy: {energy}, required: {required})")]
    InsufficientEnergy {
        /// Name of the exhausted combatant.
        name: String,
        /// Energy at the time of the attempt.
        energy: u32,
        /// Energy an attack costs.
        required: u32,
    },
}

impl GameError for AttackError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            AttackError::InsufficientEnergy { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AttackError::InsufficientEnergy { .. } => "ATTACK_INSUFFICIENT_ENERGY",
        }
    }
}

/// Errors returned when constructing a combatant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CreatureError {
    #[error("invalid creature: {reason}")]
    InvalidCreature { reason: &'static str },
}

impl CreatureError {
    pub(crate) const fn invalid(reason: &'static str) -> Self {
        Self::InvalidCreature { reason }
    }
}

impl GameError for CreatureError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CreatureError::InvalidCreature { .. } => "CREATURE_INVALID",
        }
    }
}
