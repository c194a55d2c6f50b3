//! The actor model: combatants (player, party NPCs, enemies), items, and
//! player-only equipment state.
//!
//! There is a single `Actor` record for every combatant; player-only state
//! (equipment, revives, rank) hangs off an optional `PlayerData`. Items are
//! value objects: they are cloned into inventories and equipment, never
//! shared between actors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::actor::relationship::Relationship;
use crate::actor::status::{StatusEffect, StatusKind};
use crate::core::constants::{
    AUTO_CONSUMABLE_THRESHOLD, DEFAULT_PLAYER_REVIVES, REVIVE_HEALTH_DIVISOR,
};
use crate::core::elements::{Alignment, Element};
use crate::gen::quest::QuestKind;
use crate::progression::Rank;

/// A probabilistic secondary effect carried by a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponEffect {
    pub kind: StatusKind,
    pub chance: f64,
}

/// A timed self-buff granted by a consumable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedBuff {
    pub kind: StatusKind,
    pub turns: u32,
}

/// Consumable payload: heal amount and/or a timed buff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumableEffect {
    pub heal: u32,
    pub buff: Option<TimedBuff>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub attack: u32,
    pub defense: u32,
    pub magic: u32,
    pub value: u32,
    /// Proc effect for weapons (e.g. Bleed, Stunned).
    pub effect: Option<WeaponEffect>,
    /// Set for consumables; passive gear leaves this empty.
    pub consumable: Option<ConsumableEffect>,
}

impl Item {
    pub fn passive(name: impl Into<String>, attack: u32, defense: u32, magic: u32, value: u32) -> Self {
        Self {
            name: name.into(),
            attack,
            defense,
            magic,
            value,
            effect: None,
            consumable: None,
        }
    }

    pub fn weapon_with_effect(
        name: impl Into<String>,
        attack: u32,
        value: u32,
        kind: StatusKind,
        chance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            attack,
            defense: 0,
            magic: 0,
            value,
            effect: Some(WeaponEffect { kind, chance }),
            consumable: None,
        }
    }

    pub fn healing(name: impl Into<String>, heal: u32, value: u32) -> Self {
        Self {
            name: name.into(),
            attack: 0,
            defense: 0,
            magic: 0,
            value,
            effect: None,
            consumable: Some(ConsumableEffect { heal, buff: None }),
        }
    }

    pub fn heal_value(&self) -> u32 {
        self.consumable.map_or(0, |c| c.heal)
    }

    pub fn is_healing_consumable(&self) -> bool {
        self.heal_value() > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Weapon,
    Armor,
    Shield,
    Accessory,
}

impl EquipSlot {
    pub const ALL: [EquipSlot; 4] = [
        EquipSlot::Weapon,
        EquipSlot::Armor,
        EquipSlot::Shield,
        EquipSlot::Accessory,
    ];
}

/// Infers the equipment slot from the item name, shop-catalog style.
/// Consumables and unrecognized names are not equippable.
pub fn determine_slot(item: &Item) -> Option<EquipSlot> {
    if item.consumable.is_some() {
        return None;
    }
    let name = item.name.to_lowercase();
    if name.contains("sword") || name.contains("wand") || name.contains("tome")
        || name.contains("hammer")
    {
        Some(EquipSlot::Weapon)
    } else if name.contains("armor") {
        Some(EquipSlot::Armor)
    } else if name.contains("shield") {
        Some(EquipSlot::Shield)
    } else if name.contains("ring") || name.contains("amulet") {
        Some(EquipSlot::Accessory)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Equipment {
    pub weapon: Option<Item>,
    pub armor: Option<Item>,
    pub shield: Option<Item>,
    pub accessory: Option<Item>,
}

impl Equipment {
    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::Armor => self.armor.as_ref(),
            EquipSlot::Shield => self.shield.as_ref(),
            EquipSlot::Accessory => self.accessory.as_ref(),
        }
    }

    /// Places `item` in `slot`, returning whatever was displaced.
    pub fn set(&mut self, slot: EquipSlot, item: Item) -> Option<Item> {
        let entry = match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Shield => &mut self.shield,
            EquipSlot::Accessory => &mut self.accessory,
        };
        entry.replace(item)
    }

    pub fn equipped(&self) -> impl Iterator<Item = &Item> {
        EquipSlot::ALL.iter().filter_map(|slot| self.get(*slot))
    }

    pub fn bonus_attack(&self) -> u32 {
        self.equipped().map(|item| item.attack).sum()
    }

    pub fn bonus_defense(&self) -> u32 {
        self.equipped().map(|item| item.defense).sum()
    }

    pub fn bonus_magic(&self) -> u32 {
        self.equipped().map(|item| item.magic).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassKind {
    Warrior,
    Mage,
    Rogue,
}

/// Per-level base stat increments, by class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatGrowth {
    pub health: u32,
    pub attack: u32,
    pub defense: u32,
    pub magic: u32,
}

impl ClassKind {
    pub fn name(self) -> &'static str {
        match self {
            ClassKind::Warrior => "Warrior",
            ClassKind::Mage => "Mage",
            ClassKind::Rogue => "Rogue",
        }
    }

    /// Starting (health, attack, defense, magic).
    pub fn base_stats(self) -> (u32, u32, u32, u32) {
        match self {
            ClassKind::Warrior => (120, 15, 10, 5),
            ClassKind::Mage => (80, 5, 5, 20),
            ClassKind::Rogue => (90, 10, 8, 12),
        }
    }

    pub fn growth(self) -> StatGrowth {
        match self {
            ClassKind::Warrior => StatGrowth {
                health: 12,
                attack: 3,
                defense: 3,
                magic: 1,
            },
            ClassKind::Mage => StatGrowth {
                health: 8,
                attack: 1,
                defense: 2,
                magic: 4,
            },
            ClassKind::Rogue => StatGrowth {
                health: 10,
                attack: 2,
                defense: 2,
                magic: 3,
            },
        }
    }
}

/// Growth applied to NPCs and enemies, which have no class.
pub const NPC_GROWTH: StatGrowth = StatGrowth {
    health: 10,
    attack: 2,
    defense: 2,
    magic: 2,
};

/// Flavor traits rolled at generation time; loyalty feeds party morale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personality {
    pub bravery: u32,
    pub loyalty: u32,
    pub greed: u32,
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            bravery: 5,
            loyalty: 5,
            greed: 5,
        }
    }
}

/// Player-only state: base stats kept apart from derived stats, the
/// equipment set, revives, and rank progression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub class: ClassKind,
    pub base_health: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    pub base_magic: u32,
    pub equipment: Equipment,
    pub revives: u32,
    pub rank: Rank,
    pub rank_progress: f64,
    pub completed_quests: u32,
}

/// Outcome of settling an actor whose health reached zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalCheck {
    Alive,
    Died,
    Revived { restored: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub element: Element,
    pub alignment: Alignment,
    pub health: u32,
    pub max_health: u32,
    pub attack: u32,
    pub defense: u32,
    pub magic_power: u32,
    pub level: u32,
    pub exp: u32,
    pub gold: u32,
    /// Cleared only when a death is settled; mid-round an actor at zero
    /// health still carries `alive = true` until `settle_health` runs.
    pub alive: bool,
    pub inventory: Vec<Item>,
    pub statuses: BTreeMap<StatusKind, StatusEffect>,
    pub relationships: BTreeMap<String, Relationship>,
    pub personality: Personality,
    pub quest_interest: BTreeMap<QuestKind, u32>,
    pub player: Option<PlayerData>,
}

impl Actor {
    pub fn new(
        name: String,
        health: u32,
        attack: u32,
        defense: u32,
        magic: u32,
        element: Element,
        alignment: Alignment,
    ) -> Self {
        Self {
            name,
            element,
            alignment,
            health,
            max_health: health,
            attack,
            defense,
            magic_power: magic,
            level: 1,
            exp: 0,
            gold: 0,
            alive: true,
            inventory: Vec::new(),
            statuses: BTreeMap::new(),
            relationships: BTreeMap::new(),
            personality: Personality::default(),
            quest_interest: BTreeMap::new(),
            player: None,
        }
    }

    /// Builds the player character from the class stat table.
    pub fn new_player(
        name: String,
        class: ClassKind,
        element: Element,
        alignment: Alignment,
    ) -> Self {
        let (health, attack, defense, magic) = class.base_stats();
        let mut actor = Actor::new(name, health, attack, defense, magic, element, alignment);
        actor.player = Some(PlayerData {
            class,
            base_health: health,
            base_attack: attack,
            base_defense: defense,
            base_magic: magic,
            equipment: Equipment::default(),
            revives: DEFAULT_PLAYER_REVIVES,
            rank: Rank::F,
            rank_progress: 0.0,
            completed_quests: 0,
        });
        actor
    }

    pub fn is_player(&self) -> bool {
        self.player.is_some()
    }

    /// Alive and standing: an actor dropped to zero health mid-round is no
    /// longer a valid target or attacker even before death is settled.
    pub fn is_alive(&self) -> bool {
        self.alive && self.health > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Restores health, clamped to max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let healed = amount.min(self.max_health.saturating_sub(self.health));
        self.health += healed;
        healed
    }

    /// Settles a zero-health actor: the player may consume a revive and
    /// return at half health; everyone else is marked dead.
    pub fn settle_health(&mut self) -> VitalCheck {
        if self.health > 0 || !self.alive {
            return VitalCheck::Alive;
        }
        if let Some(player) = self.player.as_mut() {
            if player.revives > 0 {
                player.revives -= 1;
                let restored = self.max_health / REVIVE_HEALTH_DIVISOR;
                self.health = restored.max(1);
                return VitalCheck::Revived {
                    restored: self.health,
                };
            }
        }
        self.alive = false;
        VitalCheck::Died
    }

    pub fn has_status(&self, kind: StatusKind) -> bool {
        self.statuses.contains_key(&kind)
    }

    /// Attaches an effect unless the same kind is already active.
    /// Returns whether the effect was applied.
    pub fn apply_status(&mut self, kind: StatusKind, effect: StatusEffect) -> bool {
        if self.has_status(kind) {
            return false;
        }
        self.statuses.insert(kind, effect);
        true
    }

    /// True when an active effect forbids this round's action.
    pub fn action_blocked(&self) -> Option<StatusKind> {
        self.statuses
            .keys()
            .copied()
            .find(|kind| kind.prevents_action())
    }

    /// Product of the outgoing damage multipliers of all active effects
    /// (Empowered and Cursed compose multiplicatively).
    pub fn outgoing_damage_multiplier(&self) -> f64 {
        self.statuses
            .keys()
            .map(|kind| kind.outgoing_damage_multiplier())
            .product()
    }

    /// Recomputes derived attack/defense/magic from base stats plus
    /// equipment bonuses. No-op for non-players.
    pub fn recalc_stats(&mut self) {
        if let Some(player) = self.player.as_ref() {
            self.attack = player.base_attack + player.equipment.bonus_attack();
            self.defense = player.base_defense + player.equipment.bonus_defense();
            self.magic_power = player.base_magic + player.equipment.bonus_magic();
        }
    }

    /// Equips `item` into `slot`; any displaced item goes back to the
    /// inventory. Returns false for non-players.
    pub fn equip(&mut self, item: Item, slot: EquipSlot) -> bool {
        let Some(player) = self.player.as_mut() else {
            return false;
        };
        if let Some(displaced) = player.equipment.set(slot, item) {
            self.inventory.push(displaced);
        }
        self.recalc_stats();
        true
    }

    pub fn weapon_effect(&self) -> Option<WeaponEffect> {
        self.player
            .as_ref()
            .and_then(|p| p.equipment.weapon.as_ref())
            .and_then(|w| w.effect)
    }

    /// Consumes the inventory item at `index` if it is a consumable.
    /// Returns the amount healed.
    pub fn use_consumable(&mut self, index: usize) -> Option<u32> {
        let consumable = self.inventory.get(index)?.consumable?;
        self.inventory.remove(index);
        let healed = self.heal(consumable.heal);
        if let Some(buff) = consumable.buff {
            self.apply_status(buff.kind, StatusEffect::lasting(buff.turns));
        }
        Some(healed)
    }

    /// When below the low-health threshold, drinks the first healing
    /// consumable in the inventory. Returns (item name, amount healed).
    pub fn auto_use_consumable(&mut self) -> Option<(String, u32)> {
        if self.health as f64 >= AUTO_CONSUMABLE_THRESHOLD * self.max_health as f64 {
            return None;
        }
        let index = self
            .inventory
            .iter()
            .position(|item| item.is_healing_consumable())?;
        let name = self.inventory[index].name.clone();
        let healed = self.use_consumable(index)?;
        Some((name, healed))
    }

    /// Applies a relationship change toward `other_name`.
    pub fn update_relationship(&mut self, other_name: &str, delta: i32, reason: &str) {
        self.relationships
            .entry(other_name.to_string())
            .or_default()
            .update(delta, reason);
    }
}
