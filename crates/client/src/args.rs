//! Parsing of command-line combatant descriptions.
use std::str::FromStr;

use arena_core::{Combatant, Element};

/// A combatant given on the command line as `name:element`, e.g. `Ignis:fire`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatantArg {
    pub name: String,
    pub element: Element,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatantArgError {
    #[error("expected NAME:ELEMENT, got '{0}'")]
    MissingSeparator(String),

    #[error("unknown element '{0}' (expected fire, ice or lightning)")]
    UnknownElement(String),
}

impl FromStr for CombatantArg {
    type Err = CombatantArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, element) = s
            .rsplit_once(':')
            .ok_or_else(|| CombatantArgError::MissingSeparator(s.to_string()))?;
        let element = element
            .trim()
            .parse::<Element>()
            .map_err(|_| CombatantArgError::UnknownElement(element.to_string()))?;
        Ok(Self {
            name: name.trim().to_string(),
            element,
        })
    }
}

impl CombatantArg {
    /// Builds the combatant with its element preset.
    pub fn build(&self) -> Combatant {
        Combatant::new(self.name.clone(), self.element)
    }
}
