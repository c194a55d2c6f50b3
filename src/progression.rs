//! Level and adventurer-rank progression.
//!
//! Levels come from experience on any actor; ranks are a player-only track
//! fed by completed quest difficulty, advancing F through SSS.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::actor::types::{Actor, NPC_GROWTH};
use crate::core::constants::{
    RANK_PROGRESS_DIFFICULTY_FACTOR, RANK_PROGRESS_RANK_BONUS, SHARED_QUEST_DELTA_MAX,
    SHARED_QUEST_DELTA_MIN, XP_CURVE_BASE, XP_CURVE_STEP,
};
use crate::gen::quest::Quest;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Rank {
    #[default]
    F,
    E,
    D,
    C,
    B,
    A,
    S,
    SS,
    SSS,
}

impl Rank {
    pub const ALL: [Rank; 9] = [
        Rank::F,
        Rank::E,
        Rank::D,
        Rank::C,
        Rank::B,
        Rank::A,
        Rank::S,
        Rank::SS,
        Rank::SSS,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rank::F => "F",
            Rank::E => "E",
            Rank::D => "D",
            Rank::C => "C",
            Rank::B => "B",
            Rank::A => "A",
            Rank::S => "S",
            Rank::SS => "SS",
            Rank::SSS => "SSS",
        }
    }

    /// Numeric tier, 1 (F) through 9 (SSS). Scales quest difficulty,
    /// rewards, and the rank-progress bonus.
    pub fn value(self) -> u32 {
        match self {
            Rank::F => 1,
            Rank::E => 2,
            Rank::D => 3,
            Rank::C => 4,
            Rank::B => 5,
            Rank::A => 6,
            Rank::S => 7,
            Rank::SS => 8,
            Rank::SSS => 9,
        }
    }

    /// Progress needed to leave this rank; `None` at the cap.
    pub fn threshold(self) -> Option<f64> {
        match self {
            Rank::F => Some(150.0),
            Rank::E => Some(400.0),
            Rank::D => Some(800.0),
            Rank::C => Some(1400.0),
            Rank::B => Some(2200.0),
            Rank::A => Some(3200.0),
            Rank::S => Some(4500.0),
            Rank::SS => Some(6000.0),
            Rank::SSS => None,
        }
    }

    pub fn next(self) -> Rank {
        match self {
            Rank::F => Rank::E,
            Rank::E => Rank::D,
            Rank::D => Rank::C,
            Rank::C => Rank::B,
            Rank::B => Rank::A,
            Rank::A => Rank::S,
            Rank::S => Rank::SS,
            Rank::SS => Rank::SSS,
            Rank::SSS => Rank::SSS,
        }
    }
}

/// Experience needed to clear `level`.
pub fn exp_threshold(level: u32) -> u32 {
    XP_CURVE_BASE + (level - 1) * XP_CURVE_STEP
}

/// What `apply_level_progression` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpReport {
    pub levels_gained: u32,
    pub new_level: u32,
}

/// Credits experience and resolves any level-ups.
///
/// Each level consumes its threshold from the pool and applies the class
/// growth line (players) or the flat NPC growth. Any level-up refills
/// health to the new max.
pub fn apply_level_progression(actor: &mut Actor, exp_delta: u32) -> LevelUpReport {
    actor.exp += exp_delta;
    let mut levels_gained = 0;
    while actor.exp >= exp_threshold(actor.level) {
        actor.exp -= exp_threshold(actor.level);
        actor.level += 1;
        levels_gained += 1;
        let growth = match actor.player.as_ref() {
            Some(player) => player.class.growth(),
            None => NPC_GROWTH,
        };
        actor.max_health += growth.health;
        if let Some(player) = actor.player.as_mut() {
            player.base_health += growth.health;
            player.base_attack += growth.attack;
            player.base_defense += growth.defense;
            player.base_magic += growth.magic;
        } else {
            actor.attack += growth.attack;
            actor.defense += growth.defense;
            actor.magic_power += growth.magic;
        }
        actor.recalc_stats();
    }
    if levels_gained > 0 {
        actor.health = actor.max_health;
    }
    LevelUpReport {
        levels_gained,
        new_level: actor.level,
    }
}

/// Credits rank progress for a completed quest. Higher ranks earn progress
/// faster but need more of it. Returns true when the rank advanced.
/// No-op for non-players.
pub fn apply_rank_progression(actor: &mut Actor, quest_difficulty: u32) -> bool {
    let Some(player) = actor.player.as_mut() else {
        return false;
    };
    let gain = quest_difficulty as f64
        * RANK_PROGRESS_DIFFICULTY_FACTOR
        * (1.0 + player.rank.value() as f64 * RANK_PROGRESS_RANK_BONUS);
    player.rank_progress += gain;
    match player.rank.threshold() {
        Some(threshold) if player.rank_progress >= threshold => {
            player.rank = player.rank.next();
            player.rank_progress = 0.0;
            true
        }
        _ => false,
    }
}

/// Applies the mutual relationship swing after a quest run with a party
/// NPC. The NPC feels the outcome at full strength, the player at half.
/// An unresolved quest counts as a failure.
pub fn handle_shared_quest(player: &mut Actor, npc: &mut Actor, quest: &Quest, rng: &mut impl Rng) {
    let change = rng.gen_range(SHARED_QUEST_DELTA_MIN..=SHARED_QUEST_DELTA_MAX);
    if quest.success == Some(true) {
        npc.update_relationship(
            &player.name,
            change,
            &format!("Successfully completed {}", quest.description),
        );
        player.update_relationship(&npc.name, change / 2, "Worked well together");
    } else {
        npc.update_relationship(
            &player.name,
            -change,
            &format!("Failed {}", quest.description),
        );
        // Floored halving: an odd penalty rounds away from zero.
        player.update_relationship(&npc.name, (-change).div_euclid(2), "Let them down");
    }
}

/// Mean loyalty across the party; 0.0 for an empty party.
pub fn party_morale(party: &[Actor]) -> f64 {
    if party.is_empty() {
        return 0.0;
    }
    party
        .iter()
        .map(|npc| npc.personality.loyalty as f64)
        .sum::<f64>()
        / party.len() as f64
}
