//! Relationship tracking between a player and NPCs.
//!
//! Progress accumulates in [-100, 100); crossing either boundary steps the
//! ordinal level by one and resets progress to zero. Every change appends
//! to the history log.

use serde::{Deserialize, Serialize};

use crate::core::constants::RELATIONSHIP_ROLLOVER;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum RelationshipLevel {
    Hated,
    Disliked,
    #[default]
    Neutral,
    Liked,
    Loved,
}

impl RelationshipLevel {
    pub fn value(self) -> i32 {
        match self {
            RelationshipLevel::Hated => -2,
            RelationshipLevel::Disliked => -1,
            RelationshipLevel::Neutral => 0,
            RelationshipLevel::Liked => 1,
            RelationshipLevel::Loved => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RelationshipLevel::Hated => "Hated",
            RelationshipLevel::Disliked => "Disliked",
            RelationshipLevel::Neutral => "Neutral",
            RelationshipLevel::Liked => "Liked",
            RelationshipLevel::Loved => "Loved",
        }
    }

    fn step_up(self) -> RelationshipLevel {
        match self {
            RelationshipLevel::Hated => RelationshipLevel::Disliked,
            RelationshipLevel::Disliked => RelationshipLevel::Neutral,
            RelationshipLevel::Neutral => RelationshipLevel::Liked,
            _ => RelationshipLevel::Loved,
        }
    }

    fn step_down(self) -> RelationshipLevel {
        match self {
            RelationshipLevel::Loved => RelationshipLevel::Liked,
            RelationshipLevel::Liked => RelationshipLevel::Neutral,
            RelationshipLevel::Neutral => RelationshipLevel::Disliked,
            _ => RelationshipLevel::Hated,
        }
    }
}

/// One append-only history entry: the reason and the signed delta applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipNote {
    pub reason: String,
    pub delta: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Relationship {
    pub level: RelationshipLevel,
    pub progress: i32,
    pub history: Vec<RelationshipNote>,
}

impl Relationship {
    /// Applies a signed progress delta and records it in the history.
    ///
    /// Reaching +100 steps the level up and resets progress; reaching -100
    /// steps it down. At Loved/Hated the level saturates and progress is
    /// pinned just inside the boundary.
    pub fn update(&mut self, delta: i32, reason: &str) {
        self.progress += delta;
        self.history.push(RelationshipNote {
            reason: reason.to_string(),
            delta,
        });
        if self.progress >= RELATIONSHIP_ROLLOVER {
            if self.level < RelationshipLevel::Loved {
                self.level = self.level.step_up();
                self.progress = 0;
            } else {
                self.progress = RELATIONSHIP_ROLLOVER - 1;
            }
        } else if self.progress <= -RELATIONSHIP_ROLLOVER {
            if self.level > RelationshipLevel::Hated {
                self.level = self.level.step_down();
                self.progress = 0;
            } else {
                self.progress = -(RELATIONSHIP_ROLLOVER - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_positive_rollover() {
        let mut rel = Relationship::default();
        rel.update(100, "saved their life");
        assert_eq!(rel.level, RelationshipLevel::Liked);
        assert_eq!(rel.progress, 0);
    }

    #[test]
    fn test_exact_negative_rollover() {
        let mut rel = Relationship::default();
        rel.update(-100, "betrayed them");
        assert_eq!(rel.level, RelationshipLevel::Disliked);
        assert_eq!(rel.progress, 0);
    }

    #[test]
    fn test_interior_progress_keeps_level() {
        let mut rel = Relationship::default();
        rel.update(99, "helped out");
        assert_eq!(rel.level, RelationshipLevel::Neutral);
        assert_eq!(rel.progress, 99);
        rel.update(-40, "argued");
        assert_eq!(rel.level, RelationshipLevel::Neutral);
        assert_eq!(rel.progress, 59);
    }

    #[test]
    fn test_level_saturates_at_loved() {
        let mut rel = Relationship {
            level: RelationshipLevel::Loved,
            progress: 50,
            history: Vec::new(),
        };
        rel.update(80, "another heroic deed");
        assert_eq!(rel.level, RelationshipLevel::Loved);
        assert_eq!(rel.progress, 99);
    }

    #[test]
    fn test_history_is_append_only() {
        let mut rel = Relationship::default();
        rel.update(10, "shared a meal");
        rel.update(-5, "minor quarrel");
        assert_eq!(rel.history.len(), 2);
        assert_eq!(rel.history[0].delta, 10);
        assert_eq!(rel.history[1].reason, "minor quarrel");
    }
}
