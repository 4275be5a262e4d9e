use crate::notice::Notice;
use serde::{Deserialize, Serialize};

/// Points earned on the level, as reported to the progression collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelReport {
    pub level: u8,
    pub avatar_points: u32,
    pub pitch_points: u32,
    pub total: u32,
    pub max: u32,
}

impl LevelReport {
    #[must_use]
    pub const fn from_verdicts(
        level: u8,
        avatar_correct: bool,
        pitch_correct: bool,
        points_per_step: u32,
    ) -> Self {
        let avatar_points = if avatar_correct { points_per_step } else { 0 };
        let pitch_points = if pitch_correct { points_per_step } else { 0 };
        Self {
            level,
            avatar_points,
            pitch_points,
            total: avatar_points + pitch_points,
            max: points_per_step * 2,
        }
    }

    #[must_use]
    pub const fn is_perfect(&self) -> bool {
        self.total == self.max
    }

    #[must_use]
    pub const fn summary(&self) -> Notice {
        Notice::LevelSummary {
            level: self.level,
            score: self.total,
            max: self.max,
        }
    }
}
