//! Status effects and the per-round status processor.
//!
//! Effects are keyed by kind, so at most one instance of a kind can be
//! active on an actor; re-applying an active kind is a no-op. Damaging
//! kinds (Burn, Poisoned, Shocked, Bleed) subtract their per-turn damage
//! each round before any action resolution. Every active effect loses one
//! turn per round and is removed when it reaches zero.

use serde::{Deserialize, Serialize};

use crate::actor::types::Actor;
use crate::core::constants::{
    CURSED_MULTIPLIER, EMPOWERED_MULTIPLIER, PERIODIC_DAMAGE_FRACTION, PERIODIC_DAMAGE_MIN,
    STATUS_EFFECT_TURNS, STUN_TURNS,
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum StatusKind {
    Burn,
    Poisoned,
    Shocked,
    Bleed,
    Frozen,
    Stunned,
    Cursed,
    Empowered,
}

impl StatusKind {
    pub fn name(self) -> &'static str {
        match self {
            StatusKind::Burn => "Burn",
            StatusKind::Poisoned => "Poisoned",
            StatusKind::Shocked => "Shocked",
            StatusKind::Bleed => "Bleed",
            StatusKind::Frozen => "Frozen",
            StatusKind::Stunned => "Stunned",
            StatusKind::Cursed => "Cursed",
            StatusKind::Empowered => "Empowered",
        }
    }

    /// Kinds that subtract health every round.
    pub fn deals_damage(self) -> bool {
        matches!(
            self,
            StatusKind::Burn | StatusKind::Poisoned | StatusKind::Shocked | StatusKind::Bleed
        )
    }

    /// Kinds that forbid the carrier's action for the round.
    pub fn prevents_action(self) -> bool {
        matches!(self, StatusKind::Frozen | StatusKind::Stunned)
    }

    /// Multiplier applied to the carrier's outgoing damage.
    pub fn outgoing_damage_multiplier(self) -> f64 {
        match self {
            StatusKind::Empowered => EMPOWERED_MULTIPLIER,
            StatusKind::Cursed => CURSED_MULTIPLIER,
            _ => 1.0,
        }
    }
}

/// Payload of an active status effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub turns: u32,
    pub damage_per_turn: Option<u32>,
}

impl StatusEffect {
    pub fn lasting(turns: u32) -> Self {
        Self {
            turns,
            damage_per_turn: None,
        }
    }

    pub fn damaging(turns: u32, damage_per_turn: u32) -> Self {
        Self {
            turns,
            damage_per_turn: Some(damage_per_turn),
        }
    }
}

/// Per-turn damage for a damaging effect: 5% of the target's max health,
/// floored at a fixed minimum.
pub fn periodic_damage(target_max_health: u32) -> u32 {
    ((target_max_health as f64 * PERIODIC_DAMAGE_FRACTION) as u32).max(PERIODIC_DAMAGE_MIN)
}

/// The payload a fresh application of `kind` carries against `target`.
pub fn standard_application(kind: StatusKind, target_max_health: u32) -> StatusEffect {
    if kind.deals_damage() {
        StatusEffect::damaging(STATUS_EFFECT_TURNS, periodic_damage(target_max_health))
    } else if kind == StatusKind::Stunned {
        StatusEffect::lasting(STUN_TURNS)
    } else {
        StatusEffect::lasting(STATUS_EFFECT_TURNS)
    }
}

/// What the processor did to a single effect during a round tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTick {
    Damage { kind: StatusKind, amount: u32 },
    Expired { kind: StatusKind },
}

/// Runs one round tick over every active effect on `actor`.
///
/// Damaging effects land first, then every effect is decremented and
/// expired entries are dropped. Death (and the player revive) is settled
/// by the caller via [`Actor::settle_health`].
pub fn process_round(actor: &mut Actor) -> Vec<StatusTick> {
    let mut ticks = Vec::new();
    let kinds: Vec<StatusKind> = actor.statuses.keys().copied().collect();
    for kind in kinds {
        let effect = actor.statuses[&kind];
        if kind.deals_damage() {
            let amount = effect.damage_per_turn.unwrap_or(0);
            actor.health = actor.health.saturating_sub(amount);
            ticks.push(StatusTick::Damage { kind, amount });
        }
        let entry = actor.statuses.get_mut(&kind).unwrap();
        entry.turns -= 1;
        if entry.turns == 0 {
            actor.statuses.remove(&kind);
            ticks.push(StatusTick::Expired { kind });
        }
    }
    ticks
}
