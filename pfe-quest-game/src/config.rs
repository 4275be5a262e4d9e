use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for the interview level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    #[serde(default = "LevelConfig::default_level")]
    pub level: u8,
    #[serde(default = "LevelConfig::default_next_route")]
    pub next_route: String,
    #[serde(default = "LevelConfig::default_points_per_step")]
    pub points_per_step: u32,
    #[serde(default = "LevelConfig::default_advance_delay_ms")]
    pub advance_delay_ms: u32,
    #[serde(default = "LevelConfig::default_speech_lang")]
    pub speech_lang: String,
    #[serde(default = "LevelConfig::default_speech_rate")]
    pub speech_rate: f32,
}

impl LevelConfig {
    const fn default_level() -> u8 {
        4
    }

    fn default_next_route() -> String {
        "/niveau-5".to_string()
    }

    const fn default_points_per_step() -> u32 {
        10
    }

    const fn default_advance_delay_ms() -> u32 {
        1500
    }

    fn default_speech_lang() -> String {
        "fr-FR".to_string()
    }

    const fn default_speech_rate() -> f32 {
        0.9
    }

    /// Parse a config document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.points_per_step * 2
    }

    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.advance_delay_ms))
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            next_route: Self::default_next_route(),
            points_per_step: Self::default_points_per_step(),
            advance_delay_ms: Self::default_advance_delay_ms(),
            speech_lang: Self::default_speech_lang(),
            speech_rate: Self::default_speech_rate(),
        }
    }
}
