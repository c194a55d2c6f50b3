//! Enemy and NPC generation.
//!
//! Enemies are built from a fixed archetype table that restricts which
//! elements and alignments each mob can roll; numeric stats come from the
//! caller (usually `archetype_base_stats` scaled by level) and get an
//! independent multiplicative variance per stat.

use rand::Rng;

use crate::actor::types::{Actor, Personality};
use crate::core::constants::{
    ENEMY_STAT_VARIANCE_MAX, ENEMY_STAT_VARIANCE_MIN, NPC_ATTACK_RANGE, NPC_DEFENSE_RANGE,
    NPC_HEALTH_RANGE, NPC_MAGIC_RANGE, PERSONALITY_RANGE, QUEST_INTEREST_RANGE,
};
use crate::core::elements::{Alignment, Element};
use crate::gen::quest::QuestKind;

struct Archetype {
    name: &'static str,
    elements: &'static [Element],
    alignments: &'static [Alignment],
    /// Per-level (health, attack, defense, magic).
    base_stats: (u32, u32, u32, u32),
}

static ARCHETYPES: [Archetype; 13] = [
    Archetype {
        name: "Slime",
        elements: &[Element::Water, Element::Poison, Element::Nature],
        alignments: &[Alignment::TrueNeutral, Alignment::ChaoticNeutral],
        base_stats: (30, 3, 1, 1),
    },
    Archetype {
        name: "Goblin",
        elements: &[Element::Earth, Element::Fire, Element::Dark],
        alignments: &[Alignment::ChaoticNeutral, Alignment::ChaoticEvil],
        base_stats: (50, 5, 3, 2),
    },
    Archetype {
        name: "Shadow Beast",
        elements: &[Element::Dark],
        alignments: &[Alignment::ChaoticEvil, Alignment::NeutralEvil],
        base_stats: (70, 7, 4, 3),
    },
    Archetype {
        name: "Rat",
        elements: &[Element::Earth, Element::Poison],
        alignments: &[Alignment::TrueNeutral, Alignment::ChaoticNeutral],
        base_stats: (25, 4, 1, 0),
    },
    Archetype {
        name: "Spider",
        elements: &[Element::Poison, Element::Dark],
        alignments: &[Alignment::NeutralEvil, Alignment::ChaoticNeutral],
        base_stats: (35, 3, 2, 3),
    },
    Archetype {
        name: "Skeleton",
        elements: &[Element::Dark],
        alignments: &[Alignment::LawfulEvil, Alignment::NeutralEvil],
        base_stats: (45, 6, 3, 1),
    },
    Archetype {
        name: "Dark Mage",
        elements: &[Element::Dark, Element::Fire, Element::Ice],
        alignments: &[Alignment::NeutralEvil, Alignment::ChaoticEvil],
        base_stats: (40, 2, 2, 8),
    },
    Archetype {
        name: "Stone Golem",
        elements: &[Element::Earth],
        alignments: &[Alignment::LawfulNeutral, Alignment::TrueNeutral],
        base_stats: (100, 4, 8, 0),
    },
    Archetype {
        name: "Harpy",
        elements: &[Element::Air, Element::Lightning],
        alignments: &[Alignment::ChaoticNeutral, Alignment::ChaoticEvil],
        base_stats: (45, 6, 2, 3),
    },
    Archetype {
        name: "Werewolf",
        elements: &[Element::Nature, Element::Dark],
        alignments: &[Alignment::ChaoticNeutral, Alignment::ChaoticEvil],
        base_stats: (65, 8, 4, 1),
    },
    Archetype {
        name: "Dragon Wyrmling",
        elements: &[Element::Fire, Element::Ice, Element::Lightning],
        alignments: &[Alignment::LawfulEvil, Alignment::NeutralEvil],
        base_stats: (85, 7, 6, 6),
    },
    Archetype {
        name: "Lich",
        elements: &[Element::Dark, Element::Ice],
        alignments: &[Alignment::LawfulEvil, Alignment::NeutralEvil],
        base_stats: (75, 4, 5, 10),
    },
    Archetype {
        name: "Ancient Guardian",
        elements: &[Element::Light, Element::Earth],
        alignments: &[Alignment::LawfulNeutral, Alignment::LawfulEvil],
        base_stats: (120, 6, 9, 4),
    },
];

/// Fallback stat line for mobs missing from the archetype table.
const FALLBACK_BASE_STATS: (u32, u32, u32, u32) = (40, 4, 2, 2);
const FALLBACK_ELEMENTS: &[Element] = &[Element::Dark];
const FALLBACK_ALIGNMENTS: &[Alignment] = &[Alignment::NeutralEvil];

const NPC_NAMES: [&str; 10] = [
    "Aelien", "Branwen", "Caelum", "Drystan", "Eirian", "Faelar", "Gwyneth", "Haelia",
    "Ithilien", "Kyros",
];

fn lookup(name: &str) -> Option<&'static Archetype> {
    ARCHETYPES.iter().find(|a| a.name == name)
}

/// The element/alignment pools an archetype may roll from. Unknown
/// archetypes fall back to a dark, neutral-evil mob.
pub fn archetype_pools(name: &str) -> (&'static [Element], &'static [Alignment]) {
    match lookup(name) {
        Some(archetype) => (archetype.elements, archetype.alignments),
        None => (FALLBACK_ELEMENTS, FALLBACK_ALIGNMENTS),
    }
}

/// Level-scaled (health, attack, defense, magic) for an archetype, before
/// variance. Unknown names use the fallback stat line.
pub fn archetype_base_stats(name: &str, level: u32) -> (u32, u32, u32, u32) {
    let (health, attack, defense, magic) =
        lookup(name).map_or(FALLBACK_BASE_STATS, |a| a.base_stats);
    (health * level, attack * level, defense * level, magic * level)
}

fn vary(value: u32, rng: &mut impl Rng) -> u32 {
    (value as f64 * rng.gen_range(ENEMY_STAT_VARIANCE_MIN..ENEMY_STAT_VARIANCE_MAX)) as u32
}

/// Builds an enemy from an archetype name and caller-supplied stats.
///
/// Element and alignment are uniform picks from the archetype's pools; each
/// numeric stat then gets its own independent variance roll. Health is
/// clamped to the rolled max so the health invariant holds from birth.
pub fn generate_enemy(
    archetype: &str,
    health: u32,
    attack: u32,
    defense: u32,
    magic: u32,
    rng: &mut impl Rng,
) -> Actor {
    let (elements, alignments) = archetype_pools(archetype);
    let element = elements[rng.gen_range(0..elements.len())];
    let alignment = alignments[rng.gen_range(0..alignments.len())];
    let mut enemy = Actor::new(
        archetype.to_string(),
        health,
        attack,
        defense,
        magic,
        element,
        alignment,
    );
    enemy.health = vary(enemy.health, rng);
    enemy.max_health = vary(enemy.max_health, rng).max(1);
    enemy.health = enemy.health.clamp(1, enemy.max_health);
    enemy.attack = vary(enemy.attack, rng);
    enemy.defense = vary(enemy.defense, rng);
    enemy.magic_power = vary(enemy.magic_power, rng);
    enemy
}

/// Rolls a recruitable NPC: pooled name, unrestricted element/alignment,
/// mid-range stats, and random personality and quest interests.
pub fn generate_npc(rng: &mut impl Rng) -> Actor {
    let name = NPC_NAMES[rng.gen_range(0..NPC_NAMES.len())];
    let element = Element::ALL[rng.gen_range(0..Element::ALL.len())];
    let alignment = Alignment::ALL[rng.gen_range(0..Alignment::ALL.len())];
    let mut npc = Actor::new(
        name.to_string(),
        rng.gen_range(NPC_HEALTH_RANGE.0..=NPC_HEALTH_RANGE.1),
        rng.gen_range(NPC_ATTACK_RANGE.0..=NPC_ATTACK_RANGE.1),
        rng.gen_range(NPC_DEFENSE_RANGE.0..=NPC_DEFENSE_RANGE.1),
        rng.gen_range(NPC_MAGIC_RANGE.0..=NPC_MAGIC_RANGE.1),
        element,
        alignment,
    );
    npc.personality = Personality {
        bravery: rng.gen_range(PERSONALITY_RANGE.0..=PERSONALITY_RANGE.1),
        loyalty: rng.gen_range(PERSONALITY_RANGE.0..=PERSONALITY_RANGE.1),
        greed: rng.gen_range(PERSONALITY_RANGE.0..=PERSONALITY_RANGE.1),
    };
    for kind in QuestKind::ALL {
        npc.quest_interest.insert(
            kind,
            rng.gen_range(QUEST_INTEREST_RANGE.0..=QUEST_INTEREST_RANGE.1),
        );
    }
    npc
}
