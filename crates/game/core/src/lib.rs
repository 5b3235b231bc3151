//! Deterministic combat rules for the elemental arena.
//!
//! `arena-core` defines the canonical battle rules (elements, creatures,
//! rosters, turn loop) as pure, synchronous APIs. Callers own every
//! combatant; all state mutation during a fight flows through
//! [`battle::BattleEngine`], which borrows the two combatants for the length
//! of one battle.
pub mod battle;
pub mod config;
pub mod creature;
pub mod element;
pub mod error;
pub mod roster;

pub use battle::{BattleEngine, BattleError, BattleEvent, BattleReport, Side};
pub use config::BattleConfig;
pub use creature::{AttackError, Combatant, Creature, CreatureError, Stats, Status, preset_for};
pub use element::Element;
pub use error::{ErrorSeverity, GameError};
pub use roster::{RosterError, Trainer};
