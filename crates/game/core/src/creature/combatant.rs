use crate::config::BattleConfig;
use crate::element::Element;

use super::error::{AttackError, CreatureError};
use super::preset::{Stats, preset_for};
use super::{Creature, Status};

/// A creature that can attack and defend.
///
/// Deserialized combatants go through the same power check as
/// [`Combatant::custom`]. Zero health and blank names are valid saved state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CombatantState"))]
pub struct Combatant {
    creature: Creature,
    element: Element,
    power: u32,
}

/// Unchecked wire form of [`Combatant`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CombatantState {
    creature: Creature,
    element: Element,
    power: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<CombatantState> for Combatant {
    type Error = CreatureError;

    fn try_from(state: CombatantState) -> Result<Self, Self::Error> {
        check_power(state.power)?;
        Ok(Self {
            creature: state.creature,
            element: state.element,
            power: state.power,
        })
    }
}

fn check_power(power: u32) -> Result<(), CreatureError> {
    if power < Combatant::MIN_POWER {
        return Err(CreatureError::invalid("power is too low to ever deal damage"));
    }
    Ok(())
}

impl Combatant {
    /// Lowest power that still lands a non-zero hit after the defender's reduction.
    pub const MIN_POWER: u32 = 2;

    /// Creates a combatant with the preset stats of its element.
    ///
    /// Any name is accepted, including an empty one.
    pub fn new(name: impl Into<String>, element: Element) -> Self {
        Self::from_parts(name.into(), element, preset_for(element))
    }

    /// Creates a combatant with explicit starting stats.
    ///
    /// Rejects blank names, zero health and power below [`Self::MIN_POWER`]:
    /// a combatant that can never damage its opponent would keep a battle
    /// running forever.
    pub fn custom(
        name: impl Into<String>,
        element: Element,
        stats: Stats,
    ) -> Result<Self, CreatureError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CreatureError::invalid("name must not be blank"));
        }
        if stats.health == 0 {
            return Err(CreatureError::invalid("health must be positive"));
        }
        check_power(stats.power)?;

        Ok(Self::from_parts(name, element, stats))
    }

    fn from_parts(name: String, element: Element, stats: Stats) -> Self {
        Self {
            creature: Creature::with_energy(name, stats.health, stats.energy),
            element,
            power: stats.power,
        }
    }

    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    pub fn name(&self) -> &str {
        self.creature.name()
    }

    pub fn health(&self) -> u32 {
        self.creature.health()
    }

    pub fn energy(&self) -> u32 {
        self.creature.energy()
    }

    pub fn status(&self) -> Status {
        self.creature.status()
    }

    pub fn is_alive(&self) -> bool {
        self.creature.is_alive()
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn power(&self) -> u32 {
        self.power
    }

    /// Pays the attack cost and returns the unmodified attack value.
    ///
    /// Fails without touching any state when energy is below the cost.
    pub fn base_attack(&mut self) -> Result<u32, AttackError> {
        let cost = BattleConfig::ATTACK_ENERGY_COST;
        if !self.creature.try_spend_energy(cost) {
            return Err(AttackError::InsufficientEnergy {
                name: self.creature.name().to_owned(),
                energy: self.creature.energy(),
                required: cost,
            });
        }
        Ok(self.power)
    }

    /// Attacks `opponent`, returning the raw damage before the defender's reduction.
    ///
    /// Elemental advantage multiplies the damage by 1.5, truncated.
    pub fn attack(&mut self, opponent: &Combatant) -> Result<u32, AttackError> {
        let damage = self.base_attack()?;
        if self.element.has_advantage_over(opponent.element) {
            return Ok(advantage_damage(damage));
        }
        Ok(damage)
    }

    /// Takes 70% of `incoming` (truncated) as damage and returns the amount applied.
    pub fn defend(&mut self, incoming: u32) -> u32 {
        let damage = defended_damage(incoming);
        self.creature.apply_damage(damage);
        damage
    }

    /// Grants the recovery bonus after a failed attack.
    pub fn recover_energy(&mut self, amount: u32) {
        self.creature.recover_energy(amount);
    }
}

/// floor(damage * 1.5), capped at `u32::MAX`.
fn advantage_damage(damage: u32) -> u32 {
    scale(damage, 3, 2)
}

/// floor(damage * 0.7)
fn defended_damage(damage: u32) -> u32 {
    scale(damage, 7, 10)
}

fn scale(damage: u32, numerator: u64, denominator: u64) -> u32 {
    let scaled = u64::from(damage) * numerator / denominator;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire() -> Combatant {
        Combatant::new("Ignis", Element::Fire)
    }

    fn ice() -> Combatant {
        Combatant::new("Frost", Element::Ice)
    }

    fn lightning() -> Combatant {
        Combatant::new("Volt", Element::Lightning)
    }

    #[test]
    fn presets_are_applied() {
        let fire = fire();
        assert_eq!((fire.health(), fire.energy(), fire.power()), (100, 100, 25));
        assert_eq!(fire.element(), Element::Fire);

        let ice = ice();
        assert_eq!((ice.health(), ice.energy(), ice.power()), (120, 100, 20));

        let lightning = lightning();
        assert_eq!(
            (lightning.health(), lightning.energy(), lightning.power()),
            (100, 130, 20)
        );
    }

    #[test]
    fn base_attack_spends_energy_and_returns_power() {
        let mut fire = fire();
        assert_eq!(fire.base_attack(), Ok(25));
        assert_eq!(fire.energy(), 85);
    }

    #[test]
    fn attack_with_advantage_is_boosted() {
        let mut fire = fire();
        let ice = ice();
        assert_eq!(fire.attack(&ice), Ok(37));
        assert_eq!(fire.energy(), 85);
    }

    #[test]
    fn attack_without_advantage_is_plain_power() {
        let mut ice = ice();
        let fire = fire();
        assert_eq!(ice.attack(&fire), Ok(20));

        let mut same = fire.clone();
        assert_eq!(same.attack(&fire), Ok(25));
    }

    #[test]
    fn lightning_over_fire_truncates() {
        let mut volt = lightning();
        let fire = fire();
        assert_eq!(volt.attack(&fire), Ok(30));
    }

    #[test]
    fn attack_fails_below_cost_without_mutation() {
        let stats = Stats::new(100, 14, 20);
        let mut tired = Combatant::custom("Sleepy", Element::Ice, stats).unwrap();
        let opponent = fire();

        let err = tired.attack(&opponent).unwrap_err();
        assert_eq!(
            err,
            AttackError::InsufficientEnergy {
                name: "Sleepy".into(),
                energy: 14,
                required: 15,
            }
        );
        assert_eq!(tired.energy(), 14);
        assert_eq!(tired.health(), 100);
        assert!(err.to_string().contains("Sleepy"));
    }

    #[test]
    fn attack_succeeds_at_exactly_the_cost() {
        let stats = Stats::new(100, 15, 20);
        let mut combatant = Combatant::custom("Edge", Element::Fire, stats).unwrap();
        assert!(combatant.base_attack().is_ok());
        assert_eq!(combatant.energy(), 0);
        assert!(combatant.base_attack().is_err());
    }

    #[test]
    fn energy_drains_by_fifteen_per_attack() {
        let mut volt = lightning();
        let fire = fire();
        let mut expected = volt.energy();
        while expected >= 15 {
            volt.attack(&fire).unwrap();
            expected -= 15;
            assert_eq!(volt.energy(), expected);
        }
        assert!(volt.attack(&fire).is_err());
        assert_eq!(volt.energy(), 10);
    }

    #[test]
    fn defend_applies_seventy_percent() {
        let mut ice = ice();
        assert_eq!(ice.defend(37), 25);
        assert_eq!(ice.health(), 95);

        let mut fire = fire();
        assert_eq!(fire.defend(20), 14);
        assert_eq!(fire.health(), 86);

        assert_eq!(fire.defend(1), 0);
        assert_eq!(fire.health(), 86);
    }

    #[test]
    fn damage_math_is_exact_for_large_values() {
        assert_eq!(advantage_damage(2_000_000_000), 3_000_000_000);
        assert_eq!(advantage_damage(u32::MAX), u32::MAX);
        assert_eq!(defended_damage(u32::MAX), 3_006_477_106);
        assert_eq!(defended_damage(1_000_000_000), 700_000_000);
    }

    #[test]
    fn defend_floors_at_zero_health() {
        let mut fire = fire();
        fire.defend(1000);
        assert_eq!(fire.health(), 0);
        assert_eq!(fire.status(), Status::Defeated);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_rejects_powerless_combatants() {
        let mut value = serde_json::to_value(fire()).unwrap();
        let restored: Combatant = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(restored, fire());

        value["power"] = serde_json::json!(0);
        let err = serde_json::from_value::<Combatant>(value).unwrap_err();
        assert!(err.to_string().contains("power is too low"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_keeps_defeated_state() {
        let mut fire = fire();
        fire.defend(10_000);
        let json = serde_json::to_string(&fire).unwrap();
        let restored: Combatant = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.status(), Status::Defeated);
    }

    #[test]
    fn preset_construction_accepts_any_name() {
        let nameless = Combatant::new("", Element::Fire);
        assert_eq!(nameless.name(), "");
        assert_eq!(nameless.health(), 100);
        assert!(nameless.is_alive());
    }

    #[test]
    fn rejects_invalid_custom_construction() {
        assert!(matches!(
            Combatant::custom("   ", Element::Fire, Stats::default()),
            Err(CreatureError::InvalidCreature { .. })
        ));
        assert!(matches!(
            Combatant::custom("Ghost", Element::Ice, Stats::new(0, 100, 20)),
            Err(CreatureError::InvalidCreature { .. })
        ));
        assert!(matches!(
            Combatant::custom("Feeble", Element::Ice, Stats::new(100, 100, 1)),
            Err(CreatureError::InvalidCreature { .. })
        ));
        assert!(Combatant::custom("Weakest", Element::Ice, Stats::new(1, 0, 2)).is_ok());
    }
}
