//! Scripted playthroughs of level 4 against the in-memory collaborators.

mod harness;

pub use harness::Harness;

use anyhow::{Result, bail, ensure};
use pfe_quest_game::memory::ScriptedSpeech;
use pfe_quest_game::{LevelError, Notice, Step, canonical_blocks};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::BTreeMap;
use std::time::Duration;

/// Sessions sampled per seed by the shuffle check.
pub const SHUFFLE_SAMPLES: usize = 400;

#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    run: fn(u64) -> Result<()>,
}

impl Scenario {
    /// Play the scenario once with `seed` driving the pitch shuffle.
    pub fn run(&self, seed: u64) -> Result<()> {
        (self.run)(seed)
    }
}

static SCENARIOS: [Scenario; 6] = [
    Scenario {
        key: "perfect-run",
        description: "Correct avatar and pitch, 20 points, navigates on",
        run: perfect_run,
    },
    Scenario {
        key: "wrong-avatar",
        description: "Wrong outfit with a correct pitch scores 10",
        run: wrong_avatar,
    },
    Scenario {
        key: "missing-avatar",
        description: "Confirming without a selection is rejected",
        run: missing_avatar,
    },
    Scenario {
        key: "locked-audio",
        description: "Playback stays locked unless the pitch is correct",
        run: locked_audio,
    },
    Scenario {
        key: "teardown-before-advance",
        description: "Leaving the page cancels the pending pitch step",
        run: teardown_before_advance,
    },
    Scenario {
        key: "shuffle-uniformity",
        description: "Each block opens the board about a quarter of the time",
        run: shuffle_uniformity,
    },
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.description)).collect()
}

#[must_use]
pub fn get_scenario(key: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.key == key)
}

#[must_use]
pub fn all_keys() -> Vec<String> {
    SCENARIOS.iter().map(|s| s.key.to_string()).collect()
}

fn perfect_run(seed: u64) -> Result<()> {
    let mut h = Harness::new(seed);
    ensure!(h.pass_avatar_step("soigne")?, "soigne judged incorrect");
    h.sort_pitch()?;
    ensure!(h.session.validate_pitch()?, "sorted pitch judged incorrect");

    let report = h.session.continue_level()?;
    ensure!(report.total == 20, "expected 20 points, got {}", report.total);
    ensure!(
        h.progress.completed() == vec![(4, 20)],
        "progress recorded {:?}",
        h.progress.completed()
    );
    ensure!(
        h.navigator.paths() == vec!["/niveau-5".to_string()],
        "navigated to {:?}",
        h.navigator.paths()
    );
    Ok(())
}

fn wrong_avatar(seed: u64) -> Result<()> {
    let mut h = Harness::new(seed);
    ensure!(!h.pass_avatar_step("casual")?, "casual judged correct");
    ensure!(
        h.notifier.notices().first() == Some(&Notice::AvatarIncorrect),
        "expected an incorrect-avatar notice, got {:?}",
        h.notifier.notices()
    );
    h.sort_pitch()?;
    h.session.validate_pitch()?;
    let report = h.session.continue_level()?;
    ensure!(report.total == 10, "expected 10 points, got {}", report.total);
    Ok(())
}

fn missing_avatar(seed: u64) -> Result<()> {
    let mut h = Harness::new(seed);
    match h.session.confirm_avatar() {
        Err(LevelError::NoAvatarSelected) => {}
        other => bail!("expected NoAvatarSelected, got {other:?}"),
    }
    ensure!(
        h.notifier.notices() == vec![Notice::AvatarMissing],
        "notices {:?}",
        h.notifier.notices()
    );
    h.scheduler.advance(Duration::from_secs(5));
    ensure!(
        h.session.level().step() == Step::Avatar,
        "left the avatar step without a choice"
    );
    ensure!(h.progress.completed().is_empty(), "progress was recorded");
    Ok(())
}

fn locked_audio(seed: u64) -> Result<()> {
    let mut h = Harness::new(seed);
    h.pass_avatar_step("soigne")?;
    ensure!(
        h.session.play_audio() == Err(LevelError::PlaybackLocked),
        "audio played before validation"
    );
    h.scramble_pitch()?;
    ensure!(!h.session.validate_pitch()?, "scrambled pitch judged correct");
    ensure!(
        h.session.play_audio() == Err(LevelError::PlaybackLocked),
        "audio played after an incorrect pitch"
    );
    ensure!(h.speech.spoken().is_empty(), "speech engine was used");

    // A correct pitch on a device without speech only informs.
    let mut h = Harness::with_speech(seed, ScriptedSpeech::unavailable());
    h.pass_avatar_step("soigne")?;
    h.sort_pitch()?;
    h.session.validate_pitch()?;
    ensure!(!h.session.play_audio()?, "playback reported without an engine");
    ensure!(
        h.notifier.last() == Some(Notice::SpeechUnsupported),
        "expected the unsupported notice"
    );
    Ok(())
}

fn teardown_before_advance(seed: u64) -> Result<()> {
    let mut h = Harness::new(seed);
    h.session.select_avatar("sportif");
    h.session.confirm_avatar()?;
    h.scheduler.advance(Duration::from_millis(500));
    ensure!(h.scheduler.pending() == 1, "advance not pending");

    let Harness {
        session, scheduler, ..
    } = h;
    drop(session);
    ensure!(scheduler.pending() == 0, "advance survived teardown");
    ensure!(
        scheduler.advance(Duration::from_secs(2)) == 0,
        "a cancelled task fired"
    );
    Ok(())
}

fn shuffle_uniformity(seed: u64) -> Result<()> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut openers: BTreeMap<&'static str, usize> = BTreeMap::new();
    for _ in 0..SHUFFLE_SAMPLES {
        let h = Harness::new(rng.next_u64());
        let level = h.session.level();
        let first = level.blocks().first().map(|b| b.id);
        if let Some(id) = first {
            *openers.entry(id).or_default() += 1;
        }
    }

    let expected = SHUFFLE_SAMPLES / 4;
    let tolerance = expected / 2;
    for block in canonical_blocks(&pfe_quest_game::StudentIdentity::default()) {
        let seen = openers.get(block.id).copied().unwrap_or_default();
        ensure!(
            seen.abs_diff(expected) <= tolerance,
            "{} opened the board {seen} times out of {SHUFFLE_SAMPLES}",
            block.id
        );
    }
    log::debug!("shuffle openers for seed {seed}: {openers:?}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keys_resolve() {
        for (key, description) in list_scenarios() {
            assert!(get_scenario(key).is_some());
            assert!(!description.is_empty());
        }
        assert!(get_scenario("smoke").is_none());
        assert_eq!(all_keys().len(), 6);
    }

    #[test]
    fn every_scenario_passes_on_fixed_seeds() {
        for seed in [1, 1337, 2024] {
            for (key, _) in list_scenarios() {
                let scenario = get_scenario(key).unwrap();
                if let Err(err) = scenario.run(seed) {
                    panic!("{key} failed for seed {seed}: {err:#}");
                }
            }
        }
    }
}
