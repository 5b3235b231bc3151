//! Initial stats per element.
//!
//! The three creature kinds differ only in starting values, so they are a
//! data table rather than separate types.

use crate::config::BattleConfig;
use crate::element::Element;

/// Starting stats of a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub health: u32,
    pub energy: u32,
    pub power: u32,
}

impl Stats {
    pub const fn new(health: u32, energy: u32, power: u32) -> Self {
        Self {
            health,
            energy,
            power,
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new(
            BattleConfig::DEFAULT_HEALTH,
            BattleConfig::DEFAULT_ENERGY,
            BattleConfig::DEFAULT_POWER,
        )
    }
}

const FIRE: Stats = Stats::new(BattleConfig::DEFAULT_HEALTH, BattleConfig::DEFAULT_ENERGY, 25);
const ICE: Stats = Stats::new(120, BattleConfig::DEFAULT_ENERGY, BattleConfig::DEFAULT_POWER);
const LIGHTNING: Stats = Stats::new(
    BattleConfig::DEFAULT_HEALTH,
    130,
    BattleConfig::DEFAULT_POWER,
);

/// Returns the starting stats for a combatant of the given element.
///
/// | Element   | health | energy | power |
/// |-----------|--------|--------|-------|
/// | Fire      | 100    | 100    | 25    |
/// | Ice       | 120    | 100    | 20    |
/// | Lightning | 100    | 130    | 20    |
pub const fn preset_for(element: Element) -> Stats {
    match element {
        Element::Fire => FIRE,
        Element::Ice => ICE,
        Element::Lightning => LIGHTNING,
    }
}
