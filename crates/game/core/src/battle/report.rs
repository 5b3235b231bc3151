use super::event::{BattleEvent, Side};
use crate::creature::Combatant;

/// Outcome of a finished battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub winner: Side,
    /// Number of turns played. The last turn counts even if it ended after
    /// the first combatant's half.
    pub turns: u32,
    pub events: Vec<BattleEvent>,
}

impl BattleReport {
    /// Picks the winning combatant out of the pair that fought.
    pub fn winner_of<'c>(&self, first: &'c Combatant, second: &'c Combatant) -> &'c Combatant {
        match self.winner {
            Side::First => first,
            Side::Second => second,
        }
    }

    pub fn loser(&self) -> Side {
        self.winner.opponent()
    }

    /// Events belonging to a single turn.
    pub fn turn_events(&self, turn: u32) -> impl Iterator<Item = &BattleEvent> {
        self.events.iter().filter(move |event| event.turn() == turn)
    }

    /// Total reduced damage landed by `side`.
    pub fn damage_dealt(&self, side: Side) -> u32 {
        self.events
            .iter()
            .filter_map(|event| match event {
                BattleEvent::Attack {
                    attacker,
                    applied_damage,
                    ..
                } if *attacker == side => Some(*applied_damage),
                _ => None,
            })
            .sum()
    }
}
