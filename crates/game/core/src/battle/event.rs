//! Battle log entries.

/// Which of the two combatants passed to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    /// The combatant that acts first every turn.
    First,
    Second,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// A single thing that happened during a battle, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// An attack landed.
    Attack {
        turn: u32,
        attacker: Side,
        /// Damage computed by the attacker, including elemental advantage.
        raw_damage: u32,
        /// Damage after the defender's reduction.
        applied_damage: u32,
        advantage: bool,
        /// Defender's health after the hit.
        defender_health: u32,
    },

    /// An attack failed for lack of energy and the attacker recovered instead.
    Exhausted {
        turn: u32,
        side: Side,
        energy_before: u32,
        energy_after: u32,
    },

    /// A combatant's health reached zero.
    Defeated { turn: u32, side: Side },
}

impl BattleEvent {
    pub fn turn(&self) -> u32 {
        match self {
            BattleEvent::Attack { turn, .. }
            | BattleEvent::Exhausted { turn, .. }
            | BattleEvent::Defeated { turn, .. } => *turn,
        }
    }

    /// The side that acted (attacker, exhausted side, or the defeated side).
    pub fn side(&self) -> Side {
        match self {
            BattleEvent::Attack { attacker, .. } => *attacker,
            BattleEvent::Exhausted { side, .. } | BattleEvent::Defeated { side, .. } => *side,
        }
    }
}
