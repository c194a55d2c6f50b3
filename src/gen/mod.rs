//! Procedural generators for quests, items, enemies, and NPCs.

pub mod enemy;
pub mod item;
pub mod quest;

pub use enemy::{archetype_base_stats, generate_enemy, generate_npc};
pub use item::{generate_item, health_potion, shop_stock};
pub use quest::{estimate_success_chance, generate_quest, Quest, QuestKind, QuestRewards};
