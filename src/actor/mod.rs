//! Actor model, status effects, and relationships.

pub mod relationship;
pub mod status;
pub mod types;

pub use relationship::{Relationship, RelationshipLevel, RelationshipNote};
pub use status::{StatusEffect, StatusKind};
pub use types::{
    Actor, ClassKind, ConsumableEffect, EquipSlot, Equipment, Item, Personality, PlayerData,
    StatGrowth, TimedBuff, VitalCheck, WeaponEffect,
};
