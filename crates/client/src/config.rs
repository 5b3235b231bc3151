//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use arena_core::BattleConfig;

/// Settings for the `arena` binary.
///
/// Command-line flags take precedence over these values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Turn limit handed to the battle engine. `None` fights to the end.
    pub max_turns: Option<u32>,
    /// Directory for `arena.log`. File logging is off when unset.
    pub log_dir: Option<PathBuf>,
    /// Colored terminal output.
    pub color: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_turns: None,
            log_dir: None,
            color: true,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_MAX_TURNS` - Turn limit per battle (default: unlimited, `0` also means unlimited)
    /// - `ARENA_LOG_DIR` - Directory for the log file (default: none)
    /// - `ARENA_COLOR` - `0`/`false` disables colored output (default: enabled)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(turns) = parse_var::<u32>(&lookup, "ARENA_MAX_TURNS") {
            config.max_turns = (turns > 0).then_some(turns);
        }

        if let Some(dir) = lookup("ARENA_LOG_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.log_dir = Some(PathBuf::from(dir));
        }

        if let Some(color) = lookup("ARENA_COLOR") {
            let color = color.trim().to_ascii_lowercase();
            config.color = !matches!(color.as_str(), "0" | "false" | "no");
        }

        config
    }

    /// Builds the engine configuration, letting `max_turns_override` win over the environment.
    ///
    /// An override of `0` lifts the limit, the same as `ARENA_MAX_TURNS=0`.
    pub fn battle_config(&self, max_turns_override: Option<u32>) -> BattleConfig {
        match max_turns_override {
            Some(turns) => BattleConfig::with_max_turns(turns),
            None => BattleConfig {
                max_turns: self.max_turns,
            },
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
