//! Creature state and the combatants built on top of it.
//!
//! A [`Creature`] only tracks health and energy. Its [`Status`] is never
//! stored: it is recomputed from health on every read, so the two cannot
//! drift apart.

mod combatant;
mod error;
mod preset;

pub use combatant::Combatant;
pub use error::{AttackError, CreatureError};
pub use preset::{Stats, preset_for};

use crate::config::BattleConfig;

/// Health tier of a creature.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Status {
    Healthy,
    Injured,
    Defeated,
}

impl Status {
    /// Classifies a health value.
    pub const fn from_health(health: u32) -> Self {
        if health == 0 {
            Status::Defeated
        } else if health <= BattleConfig::INJURED_THRESHOLD {
            Status::Injured
        } else {
            Status::Healthy
        }
    }
}

/// Named creature with health and energy pools.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    name: String,
    health: u32,
    energy: u32,
}

impl Creature {
    /// Creates a creature with the given health and the default energy pool.
    pub fn new(name: impl Into<String>, health: u32) -> Self {
        Self::with_energy(name, health, BattleConfig::DEFAULT_ENERGY)
    }

    pub fn with_energy(name: impl Into<String>, health: u32, energy: u32) -> Self {
        Self {
            name: name.into(),
            health,
            energy,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn status(&self) -> Status {
        Status::from_health(self.health)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtracts `amount` from health, clamped at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Grants energy. Health is never restored.
    pub fn recover_energy(&mut self, amount: u32) {
        self.energy = self.energy.saturating_add(amount);
    }

    /// Spends energy if enough is available, returning whether it did.
    pub(crate) fn try_spend_energy(&mut self, amount: u32) -> bool {
        match self.energy.checked_sub(amount) {
            Some(remaining) => {
                self.energy = remaining;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creature_starts_healthy_with_default_energy() {
        let creature = Creature::new("Ember", 100);
        assert_eq!(creature.name(), "Ember");
        assert_eq!(creature.health(), 100);
        assert_eq!(creature.energy(), 100);
        assert_eq!(creature.status(), Status::Healthy);
        assert!(creature.is_alive());
    }

    #[test]
    fn status_thresholds() {
        assert_eq!(Status::from_health(0), Status::Defeated);
        assert_eq!(Status::from_health(1), Status::Injured);
        assert_eq!(Status::from_health(30), Status::Injured);
        assert_eq!(Status::from_health(31), Status::Healthy);
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut creature = Creature::new("Ember", 20);
        creature.apply_damage(50);
        assert_eq!(creature.health(), 0);
        assert_eq!(creature.status(), Status::Defeated);
        assert!(!creature.is_alive());

        creature.apply_damage(10);
        assert_eq!(creature.health(), 0);
    }

    #[test]
    fn zero_damage_is_a_no_op() {
        let mut creature = Creature::new("Ember", 100);
        creature.apply_damage(0);
        assert_eq!(creature.health(), 100);
        assert_eq!(creature.status(), Status::Healthy);
    }

    #[test]
    fn status_only_moves_forward_under_damage() {
        let mut creature = Creature::new("Ember", 100);
        let mut previous = creature.status();
        for _ in 0..20 {
            creature.apply_damage(7);
            let current = creature.status();
            assert!(current >= previous, "{previous} -> {current} went backwards");
            previous = current;
        }
        assert_eq!(creature.status(), Status::Defeated);
    }

    #[test]
    fn spending_more_energy_than_available_leaves_it_untouched() {
        let mut creature = Creature::with_energy("Volt", 100, 10);
        assert!(!creature.try_spend_energy(15));
        assert_eq!(creature.energy(), 10);

        creature.recover_energy(30);
        assert!(creature.try_spend_energy(15));
        assert_eq!(creature.energy(), 25);
    }
}
