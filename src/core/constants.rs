// Combat damage variance
pub const ATTACK_VARIANCE_MIN: f64 = 0.8;
pub const ATTACK_VARIANCE_MAX: f64 = 1.2;
pub const DEFENSE_VARIANCE_MIN: f64 = 0.7;
pub const DEFENSE_VARIANCE_MAX: f64 = 1.0;
pub const ELEMENT_ADVANTAGE_MULTIPLIER: f64 = 1.5;

// Status effect damage multipliers
pub const EMPOWERED_MULTIPLIER: f64 = 1.2;
pub const CURSED_MULTIPLIER: f64 = 0.5;

// Status effect application
pub const STATUS_EFFECT_TURNS: u32 = 5;
pub const STUN_TURNS: u32 = 1;
pub const PERIODIC_DAMAGE_MIN: u32 = 5;
pub const PERIODIC_DAMAGE_FRACTION: f64 = 0.05;
pub const STATUS_BASE_CHANCE: f64 = 0.10;
pub const STATUS_ATTACK_DIVISOR: f64 = 1000.0;

// Player behavior in combat
pub const AUTO_CONSUMABLE_THRESHOLD: f64 = 0.3;
pub const REVIVE_HEALTH_DIVISOR: u32 = 2;
pub const DEFAULT_PLAYER_REVIVES: u32 = 1;

// XP and leveling: threshold grows as XP_CURVE_BASE + (level - 1) * XP_CURVE_STEP
pub const XP_CURVE_BASE: u32 = 100;
pub const XP_CURVE_STEP: u32 = 20;

// Quest generation
pub const QUEST_DIFFICULTY_PER_TIER: u32 = 10;
pub const QUEST_DIFFICULTY_JITTER: i32 = 2;
pub const QUEST_EXP_PER_TIER: u32 = 50;
pub const QUEST_GOLD_PER_TIER: u32 = 25;
pub const QUEST_ITEM_REWARD_CHANCE: f64 = 0.3;

// Item generation
pub const ITEM_STAT_PER_TIER: u32 = 2;
pub const ITEM_VALUE_STAT_MULTIPLIER: u32 = 10;
pub const ITEM_VALUE_JITTER_MIN: u32 = 10;
pub const ITEM_VALUE_JITTER_MAX: u32 = 50;
pub const HEALTH_POTION_HEAL: u32 = 50;

// Enemy generation: per-stat multiplicative variance, rolled independently
pub const ENEMY_STAT_VARIANCE_MIN: f64 = 0.9;
pub const ENEMY_STAT_VARIANCE_MAX: f64 = 1.1;

// NPC generation stat ranges (inclusive)
pub const NPC_HEALTH_RANGE: (u32, u32) = (80, 120);
pub const NPC_ATTACK_RANGE: (u32, u32) = (8, 15);
pub const NPC_DEFENSE_RANGE: (u32, u32) = (5, 10);
pub const NPC_MAGIC_RANGE: (u32, u32) = (5, 15);
pub const PERSONALITY_RANGE: (u32, u32) = (1, 10);
pub const QUEST_INTEREST_RANGE: (u32, u32) = (0, 10);

// Rank progression: progress gain is difficulty * FACTOR * (1 + rank_value * BONUS)
pub const RANK_PROGRESS_DIFFICULTY_FACTOR: f64 = 10.0;
pub const RANK_PROGRESS_RANK_BONUS: f64 = 0.2;

// Relationships
pub const RELATIONSHIP_ROLLOVER: i32 = 100;
pub const SHARED_QUEST_DELTA_MIN: i32 = 10;
pub const SHARED_QUEST_DELTA_MAX: i32 = 25;

// Quest success estimation (presentation-layer helper)
pub const SUCCESS_ESTIMATE_BASE: i32 = 50;
pub const SUCCESS_ESTIMATE_LEVEL_WEIGHT: i32 = 5;
pub const SUCCESS_ESTIMATE_ATTACK_WEIGHT: i32 = 2;
pub const SUCCESS_ESTIMATE_ATTACK_PIVOT: i32 = 11;
pub const SUCCESS_ESTIMATE_MIN: i32 = 5;
pub const SUCCESS_ESTIMATE_MAX: i32 = 95;
