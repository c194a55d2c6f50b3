//! Quest generation from the per-rank template pools.
//!
//! Each rank tier owns a fixed pool of five templates. Generation picks one
//! uniformly, fills its count placeholder, and derives difficulty and
//! rewards from the tier value.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::actor::types::{Actor, Item};
use crate::core::constants::{
    QUEST_DIFFICULTY_JITTER, QUEST_DIFFICULTY_PER_TIER, QUEST_EXP_PER_TIER, QUEST_GOLD_PER_TIER,
    QUEST_ITEM_REWARD_CHANCE, SUCCESS_ESTIMATE_ATTACK_PIVOT, SUCCESS_ESTIMATE_ATTACK_WEIGHT,
    SUCCESS_ESTIMATE_BASE, SUCCESS_ESTIMATE_LEVEL_WEIGHT, SUCCESS_ESTIMATE_MAX,
    SUCCESS_ESTIMATE_MIN,
};
use crate::gen::item::generate_item;
use crate::progression::Rank;

/// Broad quest categories; NPC quest interest is keyed by these.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum QuestKind {
    Combat,
    Gather,
    Rescue,
    Diplomacy,
}

impl QuestKind {
    pub const ALL: [QuestKind; 4] = [
        QuestKind::Combat,
        QuestKind::Gather,
        QuestKind::Rescue,
        QuestKind::Diplomacy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuestKind::Combat => "Combat",
            QuestKind::Gather => "Gather",
            QuestKind::Rescue => "Rescue",
            QuestKind::Diplomacy => "Diplomacy",
        }
    }
}

struct QuestTemplate {
    name: &'static str,
    /// May contain a `{count}` placeholder.
    description: &'static str,
    kind: QuestKind,
    count: (u32, u32),
}

const fn tpl(
    name: &'static str,
    description: &'static str,
    kind: QuestKind,
    count: (u32, u32),
) -> QuestTemplate {
    QuestTemplate {
        name,
        description,
        kind,
        count,
    }
}

/// Five templates per rank tier, F through SSS.
static TEMPLATES: [[QuestTemplate; 5]; 9] = [
    // F
    [
        tpl("Slime Cull", "Cull {count} slimes oozing from the grove", QuestKind::Combat, (3, 6)),
        tpl("Herb Run", "Collect {count} herbs for the apothecary", QuestKind::Gather, (10, 15)),
        tpl("Lost Mule", "Find the merchant's mule lost on the moor", QuestKind::Rescue, (1, 1)),
        tpl("Fence Dispute", "Settle the fence dispute between two farmers", QuestKind::Diplomacy, (1, 1)),
        tpl("Granary Rats", "Clear {count} rat nests from the granary", QuestKind::Combat, (2, 4)),
    ],
    // E
    [
        tpl("Goblin Scouts", "Drive off {count} goblin scouting parties", QuestKind::Combat, (3, 6)),
        tpl("Flooded Mine", "Recover {count} ore samples from the flooded mine", QuestKind::Gather, (5, 8)),
        tpl("Marsh Escort", "Escort the scholar along the marsh road", QuestKind::Rescue, (1, 1)),
        tpl("Boundary Talks", "Mediate the boundary quarrel between two villages", QuestKind::Diplomacy, (1, 1)),
        tpl("Webbed Hollow", "Burn {count} spider egg clutches in the hollow", QuestKind::Combat, (3, 5)),
    ],
    // D
    [
        tpl("Bandit Camps", "Break up {count} bandit camps along the trade road", QuestKind::Combat, (3, 6)),
        tpl("Moonpetal Harvest", "Gather {count} moonpetal blossoms by night", QuestKind::Gather, (5, 8)),
        tpl("Taken Smith", "Save the blacksmith from the cultists", QuestKind::Rescue, (1, 1)),
        tpl("Guild Contract", "Hold the woodcutters' guild to its contract", QuestKind::Diplomacy, (1, 1)),
        tpl("Old Road Dead", "Destroy {count} skeleton patrols on the old road", QuestKind::Combat, (3, 5)),
    ],
    // C
    [
        tpl("Moonlit Hunt", "Hunt the werewolf stalking the outlying farms", QuestKind::Combat, (1, 1)),
        tpl("Sunken Chapel", "Retrieve {count} relics from the sunken chapel", QuestKind::Gather, (5, 8)),
        tpl("Diplomat's Road", "Escort the diplomat through dangerous territory", QuestKind::Rescue, (1, 1)),
        tpl("River Truce", "Negotiate peace between the river guilds", QuestKind::Diplomacy, (1, 1)),
        tpl("Cliff Roosts", "Scatter {count} harpy roosts along the cliffs", QuestKind::Combat, (2, 4)),
    ],
    // B
    [
        tpl("Corrupted Knight", "Defeat the Corrupted Knight of the barrow downs", QuestKind::Combat, (1, 1)),
        tpl("Ruined Archive", "Recover {count} artifacts from the ruined archive", QuestKind::Gather, (5, 8)),
        tpl("Elder's Ransom", "Rescue the elder taken by shadow beasts", QuestKind::Rescue, (1, 1)),
        tpl("Nobles and Mages", "Broker a truce between the nobles and the mages", QuestKind::Diplomacy, (1, 1)),
        tpl("Barrow Purge", "Purge {count} undead barrows", QuestKind::Combat, (3, 6)),
    ],
    // A
    [
        tpl("Ash Tower", "Slay the dark mage of the ash tower", QuestKind::Combat, (1, 1)),
        tpl("Storm Crystals", "Collect {count} storm crystals from the high peaks", QuestKind::Gather, (5, 8)),
        tpl("Catacomb Vigil", "Free the priest held in the lich's catacombs", QuestKind::Rescue, (1, 1)),
        tpl("Druid Accord", "Convince the druids to join the cause", QuestKind::Diplomacy, (1, 1)),
        tpl("Summoning Circles", "Shatter {count} summoning circles before moonrise", QuestKind::Combat, (2, 4)),
    ],
    // S
    [
        tpl("Fallen Titan", "Defeat the Fallen Titan beneath the mountain", QuestKind::Combat, (1, 1)),
        tpl("Broken Seal", "Recover {count} shards of the broken seal", QuestKind::Gather, (5, 8)),
        tpl("Burning Steppe", "Escort the royal envoy across the burning steppe", QuestKind::Rescue, (1, 1)),
        tpl("One Banner", "Unite the mercenary companies under one banner", QuestKind::Diplomacy, (1, 1)),
        tpl("Wyrmling Nests", "Destroy {count} dragon wyrmling nests", QuestKind::Combat, (2, 3)),
    ],
    // SS
    [
        tpl("Elder Lich", "Slay the elder lich of the cursed sanctum", QuestKind::Combat, (1, 1)),
        tpl("First Flame", "Gather {count} embers of the first flame", QuestKind::Gather, (3, 5)),
        tpl("Void Breach", "Rescue the archmage from the void breach", QuestKind::Rescue, (1, 1)),
        tpl("Guardian Terms", "Negotiate terms with the ancient guardians", QuestKind::Diplomacy, (1, 1)),
        tpl("Realm's Edge", "Seal {count} rifts tearing at the realm's edge", QuestKind::Combat, (2, 4)),
    ],
    // SSS
    [
        tpl("Avatar of Dark", "Defeat the Avatar of the Dark", QuestKind::Combat, (1, 1)),
        tpl("Crown Jewels", "Recover the {count} lost crown jewels of the realm", QuestKind::Gather, (3, 5)),
        tpl("Last Guardian", "Pull the last guardian back from corruption", QuestKind::Rescue, (1, 1)),
        tpl("Elemental Pact", "Forge a pact between the realms and the elements", QuestKind::Diplomacy, (1, 1)),
        tpl("World-Enders", "Extinguish {count} world-ending flames", QuestKind::Combat, (2, 3)),
    ],
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QuestRewards {
    pub exp: u32,
    pub gold: u32,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub name: String,
    pub description: String,
    pub kind: QuestKind,
    pub difficulty: u32,
    pub target_count: u32,
    pub rewards: QuestRewards,
    /// Unset until the quest is resolved.
    pub success: Option<bool>,
}

/// Rolls a quest from the rank's template pool.
///
/// Difficulty is `tier*10` with a small jitter, floored at 1. The reward
/// bundle scales linearly with the tier; an item rides along 30% of the
/// time.
pub fn generate_quest(rank: Rank, rng: &mut impl Rng) -> Quest {
    let tier = rank.value();
    let pool = &TEMPLATES[(tier - 1) as usize];
    let template = &pool[rng.gen_range(0..pool.len())];
    let (lo, hi) = template.count;
    let count = rng.gen_range(lo..=hi);
    let difficulty = ((tier * QUEST_DIFFICULTY_PER_TIER) as i32
        + rng.gen_range(-QUEST_DIFFICULTY_JITTER..=QUEST_DIFFICULTY_JITTER))
    .max(1) as u32;
    let items = if rng.gen::<f64>() > 1.0 - QUEST_ITEM_REWARD_CHANCE {
        vec![generate_item(tier, rng)]
    } else {
        Vec::new()
    };
    Quest {
        name: template.name.to_string(),
        description: template
            .description
            .replace("{count}", &count.to_string()),
        kind: template.kind,
        difficulty,
        target_count: count,
        rewards: QuestRewards {
            exp: tier * QUEST_EXP_PER_TIER,
            gold: tier * QUEST_GOLD_PER_TIER,
            items,
        },
        success: None,
    }
}

/// Rough success probability shown on the quest board, in percent.
/// Level counts for more than raw attack; clamped to [5, 95].
pub fn estimate_success_chance(player: &Actor, quest: &Quest) -> u32 {
    let level_factor =
        (player.level as i32 - quest.difficulty as i32) * SUCCESS_ESTIMATE_LEVEL_WEIGHT;
    let attack_factor =
        (player.attack as i32 - SUCCESS_ESTIMATE_ATTACK_PIVOT) * SUCCESS_ESTIMATE_ATTACK_WEIGHT;
    (SUCCESS_ESTIMATE_BASE + level_factor + attack_factor)
        .clamp(SUCCESS_ESTIMATE_MIN, SUCCESS_ESTIMATE_MAX) as u32
}
