//! Narratable combat events.
//!
//! The engine performs no I/O; everything the presentation layer needs to
//! narrate an encounter is reported through this ordered event log.

use serde::{Deserialize, Serialize};

use crate::actor::status::StatusKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatEvent {
    RoundStarted {
        round: u32,
    },
    Hit {
        attacker: String,
        target: String,
        damage: u32,
        target_health: u32,
    },
    /// A Frozen or Stunned actor forfeits its action this round.
    ActionForfeited {
        name: String,
        status: StatusKind,
    },
    ConsumableUsed {
        name: String,
        item: String,
        healed: u32,
    },
    StatusApplied {
        target: String,
        status: StatusKind,
        turns: u32,
    },
    StatusDamage {
        name: String,
        status: StatusKind,
        damage: u32,
    },
    StatusExpired {
        name: String,
        status: StatusKind,
    },
    Died {
        name: String,
    },
    Revived {
        name: String,
        restored: u32,
    },
}

impl CombatEvent {
    /// One-line narration for the presentation layer.
    pub fn narrate(&self) -> String {
        match self {
            CombatEvent::RoundStarted { round } => format!("--- Round {round} ---"),
            CombatEvent::Hit {
                attacker,
                target,
                damage,
                target_health,
            } => format!("{attacker} hits {target} for {damage} damage (HP: {target_health})"),
            CombatEvent::ActionForfeited { name, status } => {
                format!("{name} is {} and unable to act", status.name())
            }
            CombatEvent::ConsumableUsed { name, item, healed } => {
                format!("{name} uses {item} and restores {healed} HP")
            }
            CombatEvent::StatusApplied {
                target,
                status,
                turns,
            } => format!("{target} is afflicted by {} ({turns} turns)", status.name()),
            CombatEvent::StatusDamage {
                name,
                status,
                damage,
            } => format!("{name} suffers {damage} damage from {}", status.name()),
            CombatEvent::StatusExpired { name, status } => {
                format!("{name} is no longer affected by {}", status.name())
            }
            CombatEvent::Died { name } => format!("{name} has died!"),
            CombatEvent::Revived { name, restored } => {
                format!("{name} is revived with {restored} HP!")
            }
        }
    }
}
