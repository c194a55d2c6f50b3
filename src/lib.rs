//! Elemental Realms - Turn-Based RPG Core Library
//!
//! Combat resolution, status effects, procedural generation, and level/rank
//! progression for a menu-driven text RPG. The core performs no I/O: callers
//! drive it with plain data and narrate the event logs it returns.

pub mod actor;
pub mod combat;
pub mod core;
pub mod gen;
pub mod progression;
