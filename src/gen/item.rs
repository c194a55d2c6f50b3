//! Random item generation from the prefix/type/suffix name pools.
//!
//! Stats are independent uniform rolls capped by the tier; the gold value is
//! derived from the rolled stats plus a small jitter, so better items are
//! always worth more.

use rand::Rng;

use crate::actor::status::StatusKind;
use crate::actor::types::Item;
use crate::core::constants::{
    HEALTH_POTION_HEAL, ITEM_STAT_PER_TIER, ITEM_VALUE_JITTER_MAX, ITEM_VALUE_JITTER_MIN,
    ITEM_VALUE_STAT_MULTIPLIER,
};

const PREFIXES: [&str; 5] = ["Ancient", "Forgotten", "Divine", "Cursed", "Enchanted"];
const ITEM_TYPES: [&str; 6] = ["Sword", "Amulet", "Ring", "Tome", "Armor", "Shield"];
const SUFFIXES: [&str; 5] = ["Power", "Wisdom", "the Ages", "Destiny", "Elements"];

fn pick<'a>(pool: &[&'a str], rng: &mut impl Rng) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// Rolls a random piece of gear for the given tier.
///
/// Attack, defense, and magic are independent draws from `[1, tier*2]`
/// (tier 0 is treated as tier with cap 1), so all three are always at
/// least 1 but uncorrelated. Value is `(atk+def+mag) * 10` plus jitter.
pub fn generate_item(tier: u32, rng: &mut impl Rng) -> Item {
    let cap = (tier * ITEM_STAT_PER_TIER).max(1);
    let name = format!(
        "{} {} of {}",
        pick(&PREFIXES, rng),
        pick(&ITEM_TYPES, rng),
        pick(&SUFFIXES, rng)
    );
    let attack = rng.gen_range(1..=cap);
    let defense = rng.gen_range(1..=cap);
    let magic = rng.gen_range(1..=cap);
    let value = (attack + defense + magic) * ITEM_VALUE_STAT_MULTIPLIER
        + rng.gen_range(ITEM_VALUE_JITTER_MIN..=ITEM_VALUE_JITTER_MAX);
    Item {
        name,
        attack,
        defense,
        magic,
        value,
        effect: None,
        consumable: None,
    }
}

/// The standard shop potion.
pub fn health_potion() -> Item {
    Item::healing("Health Potion", HEALTH_POTION_HEAL, 50)
}

/// The fixed shop stock, item value doubling as the asking price.
pub fn shop_stock() -> Vec<Item> {
    vec![
        Item::passive("Iron Sword", 5, 0, 0, 100),
        Item::passive("Steel Armor", 0, 5, 0, 150),
        Item::passive("Magic Wand", 0, 0, 7, 120),
        health_potion(),
        Item::passive("Enchanted Shield", 0, 4, 0, 130),
        Item::passive("Spell Tome", 0, 0, 5, 110),
        Item::weapon_with_effect("Crimson Sword", 7, 150, StatusKind::Bleed, 0.15),
        Item::weapon_with_effect("Thunder Hammer", 8, 180, StatusKind::Stunned, 0.15),
    ]
}
