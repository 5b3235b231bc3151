//! Trainers and their bounded rosters.

mod error;

pub use error::RosterError;

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::creature::Combatant;

/// A named trainer owning up to [`BattleConfig::ROSTER_CAPACITY`] combatants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trainer {
    name: String,
    combatants: ArrayVec<Combatant, { BattleConfig::ROSTER_CAPACITY }>,
}

impl Trainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            combatants: ArrayVec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a combatant to the roster.
    ///
    /// Fails with [`RosterError::RosterFull`] when the roster is at capacity;
    /// the roster is left unchanged.
    pub fn add_combatant(&mut self, combatant: Combatant) -> Result<(), RosterError> {
        self.combatants
            .try_push(combatant)
            .map_err(|_| RosterError::RosterFull {
                trainer: self.name.clone(),
                capacity: BattleConfig::ROSTER_CAPACITY,
            })
    }

    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    pub fn combatant(&self, index: usize) -> Result<&Combatant, RosterError> {
        let len = self.combatants.len();
        self.combatants.get(index).ok_or_else(|| RosterError::NoSuchCombatant {
            trainer: self.name.clone(),
            index,
            len,
        })
    }

    pub fn combatant_mut(&mut self, index: usize) -> Result<&mut Combatant, RosterError> {
        let len = self.combatants.len();
        if index >= len {
            return Err(RosterError::NoSuchCombatant {
                trainer: self.name.clone(),
                index,
                len,
            });
        }
        Ok(&mut self.combatants[index])
    }

    /// Borrows two distinct combatants of this roster mutably, in the order requested.
    pub fn pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> Result<(&mut Combatant, &mut Combatant), RosterError> {
        if first == second {
            return Err(RosterError::SameCombatant { index: first });
        }
        let len = self.combatants.len();
        if let Some(&index) = [first, second].iter().find(|&&index| index >= len) {
            return Err(RosterError::NoSuchCombatant {
                trainer: self.name.clone(),
                index,
                len,
            });
        }

        let (low, high) = (first.min(second), first.max(second));
        let (head, tail) = self.combatants.split_at_mut(high);
        let (low_ref, high_ref) = (&mut head[low], &mut tail[0]);
        if first < second {
            Ok((low_ref, high_ref))
        } else {
            Ok((high_ref, low_ref))
        }
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.combatants.is_full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;

    fn dragon(name: &str) -> Combatant {
        Combatant::new(name, Element::Fire)
    }

    fn full_trainer() -> Trainer {
        let mut trainer = Trainer::new("Ash");
        for i in 0..BattleConfig::ROSTER_CAPACITY {
            trainer.add_combatant(dragon(&format!("Dragon {i}"))).unwrap();
        }
        trainer
    }

    #[test]
    fn keeps_insertion_order() {
        let mut trainer = Trainer::new("Ash");
        trainer.add_combatant(dragon("First")).unwrap();
        trainer.add_combatant(dragon("Second")).unwrap();

        let names: Vec<_> = trainer.combatants().iter().map(Combatant::name).collect();
        assert_eq!(names, ["First", "Second"]);
        assert_eq!(trainer.len(), 2);
        assert!(!trainer.is_full());
    }

    #[test]
    fn seventh_combatant_is_rejected() {
        let mut trainer = full_trainer();
        assert!(trainer.is_full());

        let result = trainer.add_combatant(dragon("Extra"));
        assert_eq!(
            result,
            Err(RosterError::RosterFull {
                trainer: "Ash".into(),
                capacity: 6,
            })
        );
        assert_eq!(trainer.len(), 6);
        assert!(trainer.combatants().iter().all(|c| c.name() != "Extra"));
    }

    #[test]
    fn missing_slot_reports_roster_size() {
        let mut trainer = Trainer::new("Misty");
        trainer.add_combatant(dragon("Only")).unwrap();
        assert_eq!(
            trainer.combatant(3).unwrap_err(),
            RosterError::NoSuchCombatant {
                trainer: "Misty".into(),
                index: 3,
                len: 1,
            }
        );
        assert!(trainer.combatant_mut(1).is_err());
        assert_eq!(trainer.combatant(0).unwrap().name(), "Only");
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut trainer = full_trainer();
        let (a, b) = trainer.pair_mut(4, 1).unwrap();
        assert_eq!(a.name(), "Dragon 4");
        assert_eq!(b.name(), "Dragon 1");

        let (a, b) = trainer.pair_mut(0, 5).unwrap();
        assert_eq!(a.name(), "Dragon 0");
        assert_eq!(b.name(), "Dragon 5");
    }

    #[test]
    fn pair_mut_rejects_same_or_missing_slot() {
        let mut trainer = full_trainer();
        assert_eq!(
            trainer.pair_mut(2, 2).unwrap_err(),
            RosterError::SameCombatant { index: 2 }
        );
        assert!(matches!(
            trainer.pair_mut(0, 6),
            Err(RosterError::NoSuchCombatant { index: 6, .. })
        ));
    }
}
