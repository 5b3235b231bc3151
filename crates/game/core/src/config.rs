/// Rule constants and tunable battle parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Upper bound on full turns before the engine gives up.
    /// `None` (or `Some(0)`) runs until one side is defeated.
    pub max_turns: Option<u32>,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of combatants a single trainer can hold.
    pub const ROSTER_CAPACITY: usize = 6;

    // ===== fixed rule values =====
    /// Energy consumed by every successful attack.
    pub const ATTACK_ENERGY_COST: u32 = 15;
    /// Energy granted to a combatant whose attack failed for lack of energy.
    pub const EXHAUSTION_RECOVERY: u32 = 30;
    /// Highest health value still classified as injured.
    pub const INJURED_THRESHOLD: u32 = 30;

    pub const DEFAULT_HEALTH: u32 = 100;
    pub const DEFAULT_ENERGY: u32 = 100;
    pub const DEFAULT_POWER: u32 = 20;

    pub fn new() -> Self {
        Self { max_turns: None }
    }

    /// Limits battles to `max_turns` full turns. `0` means no limit.
    pub fn with_max_turns(max_turns: u32) -> Self {
        Self {
            max_turns: (max_turns > 0).then_some(max_turns),
        }
    }

    /// The effective turn limit, if any.
    pub fn turn_limit(&self) -> Option<u32> {
        self.max_turns.filter(|&limit| limit > 0)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
