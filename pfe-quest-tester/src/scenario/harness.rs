use anyhow::{Context, Result, ensure};
use pfe_quest_game::memory::{
    ManualScheduler, MemoryProgress, RecordingNavigator, RecordingNotifier, ScriptedSpeech,
};
use pfe_quest_game::{
    CANONICAL_IDS, Collaborators, Direction, LevelConfig, LevelSession, Step, StudentInfo,
};

pub type ScriptedSession = LevelSession<
    MemoryProgress,
    RecordingNavigator,
    RecordingNotifier,
    ManualScheduler,
    ScriptedSpeech,
>;

/// A level session wired to in-memory collaborators the scenario can inspect.
pub struct Harness {
    pub session: ScriptedSession,
    pub progress: MemoryProgress,
    pub navigator: RecordingNavigator,
    pub notifier: RecordingNotifier,
    pub scheduler: ManualScheduler,
    pub speech: ScriptedSpeech,
}

impl Harness {
    pub fn new(seed: u64) -> Self {
        Self::with_speech(seed, ScriptedSpeech::available())
    }

    pub fn with_speech(seed: u64, speech: ScriptedSpeech) -> Self {
        let progress =
            MemoryProgress::with_student(StudentInfo::new("Yasmine", "Gharbi", "Informatique"));
        let navigator = RecordingNavigator::default();
        let notifier = RecordingNotifier::default();
        let scheduler = ManualScheduler::default();
        let session = LevelSession::new(
            LevelConfig::default(),
            Collaborators {
                progress: progress.clone(),
                navigator: navigator.clone(),
                notifier: notifier.clone(),
                scheduler: scheduler.clone(),
                speech: speech.clone(),
            },
            seed,
        );
        Self {
            session,
            progress,
            navigator,
            notifier,
            scheduler,
            speech,
        }
    }

    /// Select and confirm `avatar`, then let the transition delay run out.
    pub fn pass_avatar_step(&mut self, avatar: &str) -> Result<bool> {
        ensure!(self.session.select_avatar(avatar), "avatar {avatar} rejected");
        let correct = self.session.confirm_avatar()?;
        let delay = self.session.level().config().advance_delay();
        self.scheduler.advance(delay);
        ensure!(
            self.session.level().step() == Step::Pitch,
            "pitch step not reached after {delay:?}"
        );
        Ok(correct)
    }

    /// Bubble each block up to its canonical slot using only the move buttons.
    pub fn sort_pitch(&mut self) -> Result<()> {
        for (target, id) in CANONICAL_IDS.iter().enumerate() {
            let mut pos = self
                .session
                .level()
                .blocks()
                .iter()
                .position(|b| b.id == *id)
                .with_context(|| format!("block {id} missing from the board"))?;
            while pos > target {
                ensure!(
                    self.session.move_block(pos, Direction::Up),
                    "move up refused at {pos}"
                );
                pos -= 1;
            }
        }
        Ok(())
    }

    /// Leave the board in a non-canonical order.
    pub fn scramble_pitch(&mut self) -> Result<()> {
        self.sort_pitch()?;
        ensure!(
            self.session.move_block(0, Direction::Down),
            "move down refused at 0"
        );
        Ok(())
    }
}
