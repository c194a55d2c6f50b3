//! Elements, alignments, and the static elemental advantage table.
//!
//! The advantage table is immutable configuration: it drives the
//! `ElementAdvantage` damage formula and is also exposed for flavor display
//! by the presentation layer even when the variance formula is active.

use serde::{Deserialize, Serialize};

use crate::core::constants::ELEMENT_ADVANTAGE_MULTIPLIER;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
    Light,
    Dark,
    Nature,
    Lightning,
    Ice,
    Poison,
}

impl Element {
    pub const ALL: [Element; 10] = [
        Element::Fire,
        Element::Water,
        Element::Earth,
        Element::Air,
        Element::Light,
        Element::Dark,
        Element::Nature,
        Element::Lightning,
        Element::Ice,
        Element::Poison,
    ];

    /// Returns the display name for this element.
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Water => "Water",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Light => "Light",
            Element::Dark => "Dark",
            Element::Nature => "Nature",
            Element::Lightning => "Lightning",
            Element::Ice => "Ice",
            Element::Poison => "Poison",
        }
    }

    /// Elements this element is strong against.
    pub fn strong_against(self) -> &'static [Element] {
        match self {
            Element::Fire => &[Element::Ice, Element::Poison, Element::Nature],
            Element::Water => &[Element::Fire, Element::Lightning],
            Element::Earth => &[Element::Lightning, Element::Poison],
            Element::Air => &[Element::Earth, Element::Nature],
            Element::Light => &[Element::Dark],
            Element::Dark => &[Element::Light, Element::Ice],
            Element::Nature => &[Element::Water, Element::Earth],
            Element::Lightning => &[Element::Air, Element::Fire],
            Element::Ice => &[Element::Lightning, Element::Dark],
            Element::Poison => &[Element::Nature, Element::Earth],
        }
    }
}

/// True if `attacker` holds the elemental advantage over `defender`.
pub fn has_advantage(attacker: Element, defender: Element) -> bool {
    attacker.strong_against().contains(&defender)
}

/// Flat damage multiplier for the `ElementAdvantage` formula:
/// 1.5 when the defender is weak to the attacker's element, 1.0 otherwise.
pub fn advantage_multiplier(attacker: Element, defender: Element) -> f64 {
    if has_advantage(attacker, defender) {
        ELEMENT_ADVANTAGE_MULTIPLIER
    } else {
        1.0
    }
}

/// Alignment is a flavor tag only; it has no effect on combat resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    LawfulGood,
    NeutralGood,
    ChaoticGood,
    LawfulNeutral,
    TrueNeutral,
    ChaoticNeutral,
    LawfulEvil,
    NeutralEvil,
    ChaoticEvil,
}

impl Alignment {
    pub const ALL: [Alignment; 9] = [
        Alignment::LawfulGood,
        Alignment::NeutralGood,
        Alignment::ChaoticGood,
        Alignment::LawfulNeutral,
        Alignment::TrueNeutral,
        Alignment::ChaoticNeutral,
        Alignment::LawfulEvil,
        Alignment::NeutralEvil,
        Alignment::ChaoticEvil,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Alignment::LawfulGood => "Lawful Good",
            Alignment::NeutralGood => "Neutral Good",
            Alignment::ChaoticGood => "Chaotic Good",
            Alignment::LawfulNeutral => "Lawful Neutral",
            Alignment::TrueNeutral => "True Neutral",
            Alignment::ChaoticNeutral => "Chaotic Neutral",
            Alignment::LawfulEvil => "Lawful Evil",
            Alignment::NeutralEvil => "Neutral Evil",
            Alignment::ChaoticEvil => "Chaotic Evil",
        }
    }
}
