//! Roster management errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur while managing a trainer's roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterError {
    /// Roster already holds the maximum number of combatants.
    #[error("{trainer}'s roster is full (max: {capacity})")]
    RosterFull {
        /// Owner of the roster.
        trainer: String,
        /// Maximum capacity.
        capacity: usize,
    },

    /// No combatant at the requested slot.
    #[error("{trainer} has no combatant in slot {index} (roster size: {len})")]
    NoSuchCombatant {
        trainer: String,
        index: usize,
        len: usize,
    },

    /// The same slot was requested twice where two distinct combatants are needed.
    #[error("slot {index} cannot be paired with itself")]
    SameCombatant { index: usize },
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use RosterError::*;
        match self {
            RosterFull { .. } => "ROSTER_FULL",
            NoSuchCombatant { .. } => "ROSTER_NO_SUCH_COMBATANT",
            SameCombatant { .. } => "ROSTER_SAME_COMBATANT",
        }
    }
}
