//! Combat resolution: damage formulas, the round engine, and the event log.

pub mod damage;
pub mod engine;
pub mod events;

pub use damage::{calculate_damage, DamageFormula};
pub use engine::{elemental_trigger_chance, resolve_combat, CombatConfig, CombatOutcome};
pub use events::CombatEvent;
