//! Elemental affinities and the advantage triangle.

/// Elemental affinity of a combatant.
///
/// The advantage relation is a fixed 3-cycle:
/// Fire -> Ice -> Lightning -> Fire
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    Fire,
    Ice,
    Lightning,
}

impl Element {
    /// The element this one has an advantage over.
    pub const fn beats(self) -> Element {
        match self {
            Element::Fire => Element::Ice,
            Element::Ice => Element::Lightning,
            Element::Lightning => Element::Fire,
        }
    }

    /// The element that has an advantage over this one.
    pub const fn weakness(self) -> Element {
        match self {
            Element::Fire => Element::Lightning,
            Element::Ice => Element::Fire,
            Element::Lightning => Element::Ice,
        }
    }

    /// Returns true only for (Fire, Ice), (Ice, Lightning) and (Lightning, Fire).
    pub fn has_advantage_over(self, other: Element) -> bool {
        self.beats() == other
    }
}
