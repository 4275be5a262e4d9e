use pfe_quest_game::LevelConfig;

/// Number of levels in the campaign, for the progress bar.
pub const CAMPAIGN_LEVELS: u8 = 6;

const LEVEL4_JSON: &str = include_str!("../static/data/level4.json");

/// Level 4 settings from the bundled asset, or the built-in defaults if the
/// asset does not parse.
#[must_use]
pub fn level_config() -> LevelConfig {
    parse_or_default(LEVEL4_JSON)
}

fn parse_or_default(json: &str) -> LevelConfig {
    LevelConfig::from_json(json).unwrap_or_else(|err| {
        log::error!("level config rejected, using defaults: {err}");
        LevelConfig::default()
    })
}
