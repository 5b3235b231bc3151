//! Turn loop between two combatants.
//!
//! The [`BattleEngine`] borrows two combatants for the duration of one
//! battle and mutates them in place. The first combatant always acts first
//! in a turn; the loop ends as soon as either side is defeated.
//!
//! # Turn Structure
//!
//! ```text
//! first attacks second  (or recovers energy if it cannot attack)
//! stop if second is defeated
//! second attacks first  (or recovers energy if it cannot attack)
//! ```
//!
//! A failed attack is never an error for the engine: it grants the attacker
//! [`BattleConfig::EXHAUSTION_RECOVERY`] energy and the turn moves on.

mod error;
mod event;
mod report;

pub use error::BattleError;
pub use event::{BattleEvent, Side};
pub use report::BattleReport;

use crate::config::BattleConfig;
use crate::creature::Combatant;

/// Runs battles according to a [`BattleConfig`].
#[derive(Clone, Debug, Default)]
pub struct BattleEngine {
    config: BattleConfig,
}

impl BattleEngine {
    pub fn new(config: BattleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Fights until one side is defeated and returns the survivor.
    ///
    /// Same rules as [`Self::fight`] without keeping a battle log.
    pub fn run_battle<'c>(
        &self,
        first: &'c mut Combatant,
        second: &'c mut Combatant,
    ) -> Result<&'c Combatant, BattleError> {
        let (winner, _) = self.resolve(first, second, |_| {})?;
        Ok(match winner {
            Side::First => &*first,
            Side::Second => &*second,
        })
    }

    /// Fights until one side is defeated and returns the full battle log.
    pub fn fight(
        &self,
        first: &mut Combatant,
        second: &mut Combatant,
    ) -> Result<BattleReport, BattleError> {
        let mut events = Vec::new();
        let (winner, turns) = self.resolve(first, second, |event| events.push(event))?;
        Ok(BattleReport {
            winner,
            turns,
            events,
        })
    }

    /// The turn loop. Every event is handed to `record` as it happens.
    fn resolve(
        &self,
        first: &mut Combatant,
        second: &mut Combatant,
        mut record: impl FnMut(BattleEvent),
    ) -> Result<(Side, u32), BattleError> {
        for combatant in [&*first, &*second] {
            if !combatant.is_alive() {
                return Err(BattleError::AlreadyDefeated {
                    name: combatant.name().to_owned(),
                });
            }
        }

        tracing::debug!(
            first = first.name(),
            second = second.name(),
            "battle started"
        );

        let limit = self.config.turn_limit();
        let mut turn: u32 = 0;

        while first.is_alive() && second.is_alive() {
            if limit.is_some_and(|limit| turn >= limit) || turn == u32::MAX {
                tracing::warn!(turns = turn, "battle hit the turn limit");
                return Err(BattleError::TurnLimitReached { turns: turn });
            }
            turn += 1;

            half_turn(first, second, Side::First, turn, &mut record);
            if !second.is_alive() {
                break;
            }
            half_turn(second, first, Side::Second, turn, &mut record);
        }

        let (winner, survivor) = if first.is_alive() {
            (Side::First, &*first)
        } else {
            (Side::Second, &*second)
        };
        tracing::info!(winner = survivor.name(), turns = turn, "battle finished");
        Ok((winner, turn))
    }
}

/// One combatant's action within a turn.
fn half_turn(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    side: Side,
    turn: u32,
    record: &mut impl FnMut(BattleEvent),
) {
    match attacker.attack(defender) {
        Ok(raw_damage) => {
            let advantage = attacker.element().has_advantage_over(defender.element());
            let applied_damage = defender.defend(raw_damage);
            tracing::debug!(
                turn,
                attacker = attacker.name(),
                defender = defender.name(),
                raw_damage,
                applied_damage,
                advantage,
                defender_health = defender.health(),
                "attack landed"
            );
            record(BattleEvent::Attack {
                turn,
                attacker: side,
                raw_damage,
                applied_damage,
                advantage,
                defender_health: defender.health(),
            });
            if !defender.is_alive() {
                record(BattleEvent::Defeated {
                    turn,
                    side: side.opponent(),
                });
            }
        }
        Err(err) => {
            let energy_before = attacker.energy();
            attacker.recover_energy(BattleConfig::EXHAUSTION_RECOVERY);
            tracing::debug!(
                turn,
                %err,
                energy_before,
                energy_after = attacker.energy(),
                "attack failed, recovering energy"
            );
            record(BattleEvent::Exhausted {
                turn,
                side,
                energy_before,
                energy_after: attacker.energy(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creature::Stats;
    use crate::element::Element;

    fn combatant(name: &str, element: Element) -> Combatant {
        Combatant::new(name, element)
    }

    #[test]
    fn first_turn_matches_hand_computed_values() {
        let mut fire = combatant("Ignis", Element::Fire);
        let mut ice = combatant("Frost", Element::Ice);

        let report = BattleEngine::default().fight(&mut fire, &mut ice).unwrap();
        let first_turn: Vec<_> = report.turn_events(1).cloned().collect();

        assert_eq!(
            first_turn,
            vec![
                BattleEvent::Attack {
                    turn: 1,
                    attacker: Side::First,
                    raw_damage: 37,
                    applied_damage: 25,
                    advantage: true,
                    defender_health: 95,
                },
                BattleEvent::Attack {
                    turn: 1,
                    attacker: Side::Second,
                    raw_damage: 20,
                    applied_damage: 14,
                    advantage: false,
                    defender_health: 86,
                },
            ]
        );
    }

    #[test]
    fn exhausted_attacker_recovers_and_deals_nothing() {
        let mut tired =
            Combatant::custom("Sleepy", Element::Ice, Stats::new(100, 10, 20)).unwrap();
        let mut fresh = combatant("Ignis", Element::Fire);

        let report = BattleEngine::default().fight(&mut tired, &mut fresh).unwrap();

        assert_eq!(
            report.events[0],
            BattleEvent::Exhausted {
                turn: 1,
                side: Side::First,
                energy_before: 10,
                energy_after: 40,
            }
        );
        // Ignis strikes back at full health the same turn.
        assert!(matches!(
            report.events[1],
            BattleEvent::Attack {
                attacker: Side::Second,
                ..
            }
        ));
    }

    #[test]
    fn second_side_skips_its_half_once_first_wins() {
        let mut strong =
            Combatant::custom("Titan", Element::Fire, Stats::new(100, 100, 200)).unwrap();
        let mut weak = combatant("Frost", Element::Ice);

        let report = BattleEngine::default().fight(&mut strong, &mut weak).unwrap();

        assert_eq!(report.winner, Side::First);
        assert_eq!(report.turns, 1);
        assert_eq!(report.events.len(), 2);
        assert_eq!(
            report.events[1],
            BattleEvent::Defeated {
                turn: 1,
                side: Side::Second
            }
        );
        assert_eq!(weak.health(), 0);
        assert_eq!(strong.health(), 100);
    }

    #[test]
    fn run_battle_returns_the_survivor() {
        let mut fire = combatant("Ignis", Element::Fire);
        let mut ice = combatant("Frost", Element::Ice);

        let winner = BattleEngine::default()
            .run_battle(&mut fire, &mut ice)
            .unwrap();
        assert!(winner.is_alive());
        assert_eq!(winner.name(), "Ignis");
        assert!(std::ptr::eq(winner, &fire));
    }

    #[test]
    fn run_battle_returns_the_second_side_by_identity() {
        let mut fire = combatant("Ignis", Element::Fire);
        let mut ice = combatant("Frost", Element::Ice);

        let winner = BattleEngine::default()
            .run_battle(&mut ice, &mut fire)
            .unwrap();
        let winner: *const Combatant = winner;
        assert!(std::ptr::eq(winner, &fire));
        assert!(!std::ptr::eq(winner, &ice));
    }

    #[test]
    fn run_battle_agrees_with_fight() {
        let mut fire = combatant("Ignis", Element::Fire);
        let mut ice = combatant("Frost", Element::Ice);
        let report = BattleEngine::default()
            .fight(&mut fire.clone(), &mut ice.clone())
            .unwrap();

        let winner = BattleEngine::default()
            .run_battle(&mut fire, &mut ice)
            .unwrap();
        assert_eq!(winner.health(), 44);
        assert_eq!(report.winner, Side::First);
        assert_eq!(ice.health(), 0);
    }

    #[test]
    fn zero_turn_limit_does_not_stop_the_battle() {
        let mut fire = combatant("Ignis", Element::Fire);
        let mut ice = combatant("Frost", Element::Ice);

        let engine = BattleEngine::new(BattleConfig { max_turns: Some(0) });
        let report = engine.fight(&mut fire, &mut ice).unwrap();
        assert_eq!(report.turns, 5);
    }

    #[test]
    fn refuses_defeated_combatants() {
        let mut fire = combatant("Ignis", Element::Fire);
        let mut ice = combatant("Frost", Element::Ice);
        ice.defend(10_000);

        let err = BattleEngine::default().fight(&mut fire, &mut ice).unwrap_err();
        assert_eq!(
            err,
            BattleError::AlreadyDefeated {
                name: "Frost".into()
            }
        );
        assert_eq!(fire.energy(), 100);
    }

    #[test]
    fn turn_limit_stops_long_battles() {
        let mut fire = combatant("Ignis", Element::Fire);
        let mut ice = combatant("Frost", Element::Ice);

        let engine = BattleEngine::new(BattleConfig::with_max_turns(2));
        let err = engine.fight(&mut fire, &mut ice).unwrap_err();

        assert_eq!(err, BattleError::TurnLimitReached { turns: 2 });
        assert_eq!(ice.health(), 120 - 25 - 25);
        assert_eq!(fire.health(), 100 - 14 - 14);
    }
}
