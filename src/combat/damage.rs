//! Damage calculation.
//!
//! Pure over its inputs: the same attacker, defender, formula, and RNG
//! state always produce the same result. The caller owns the RNG so tests
//! can pin outcomes.

use serde::{Deserialize, Serialize};

use crate::actor::types::Actor;
use crate::core::constants::{
    ATTACK_VARIANCE_MAX, ATTACK_VARIANCE_MIN, DEFENSE_VARIANCE_MAX, DEFENSE_VARIANCE_MIN,
};
use crate::core::elements::advantage_multiplier;
use rand::Rng;

/// Which base-damage formula the encounter uses.
///
/// `Variance` rolls independent multipliers on attack and defense;
/// `ElementAdvantage` applies the flat 1.5x multiplier from the static
/// advantage table instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DamageFormula {
    #[default]
    Variance,
    ElementAdvantage,
}

/// Computes the damage of one attack.
///
/// The floor of 1 applies to the base roll only; Empowered (x1.2) and
/// Cursed (x0.5) then compose multiplicatively on top, and the result is
/// truncated, so a cursed attacker can legitimately deal 0.
pub fn calculate_damage(
    attacker: &Actor,
    defender: &Actor,
    formula: DamageFormula,
    rng: &mut impl Rng,
) -> u32 {
    let base = match formula {
        DamageFormula::Variance => {
            let attack = attacker.attack as f64
                * rng.gen_range(ATTACK_VARIANCE_MIN..ATTACK_VARIANCE_MAX);
            let defense = defender.defense as f64
                * rng.gen_range(DEFENSE_VARIANCE_MIN..DEFENSE_VARIANCE_MAX);
            (attack - defense).max(1.0)
        }
        DamageFormula::ElementAdvantage => {
            let base = (attacker.attack as f64 - defender.defense as f64).max(1.0);
            base * advantage_multiplier(attacker.element, defender.element)
        }
    };
    (base * attacker.outgoing_damage_multiplier()) as u32
}
