//! Errors surfaced by the battle engine.

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    /// A combatant entered the battle with no health left.
    #[error("{name} is already defeated and cannot battle")]
    AlreadyDefeated { name: String },

    /// The configured turn limit passed with both combatants still standing.
    #[error("battle still undecided after {turns} turns")]
    TurnLimitReached { turns: u32 },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            BattleError::AlreadyDefeated { .. } => ErrorSeverity::Validation,
            BattleError::TurnLimitReached { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            BattleError::AlreadyDefeated { .. } => "BATTLE_ALREADY_DEFEATED",
            BattleError::TurnLimitReached { .. } => "BATTLE_TURN_LIMIT_REACHED",
        }
    }
}
