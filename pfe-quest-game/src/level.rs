use crate::avatars::{AvatarOption, find_avatar};
use crate::config::LevelConfig;
use crate::error::LevelError;
use crate::pitch::{Direction, PitchBlock, PitchDeck};
use crate::score::LevelReport;
use crate::speech::Utterance;
use crate::student::StudentInfo;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Sub-step currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    Avatar,
    Pitch,
}

impl Step {
    /// 1-based step number as shown to the student.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Avatar => 1,
            Self::Pitch => 2,
        }
    }
}

/// `unselected → selected(id) → validated(correct|incorrect)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarPhase {
    Unselected,
    Selected(&'static AvatarOption),
    Validated {
        choice: &'static AvatarOption,
        correct: bool,
    },
}

impl AvatarPhase {
    #[must_use]
    pub const fn choice(&self) -> Option<&'static AvatarOption> {
        match self {
            Self::Unselected => None,
            Self::Selected(choice) | Self::Validated { choice, .. } => Some(*choice),
        }
    }

    #[must_use]
    pub const fn verdict(&self) -> Option<bool> {
        match self {
            Self::Validated { correct, .. } => Some(*correct),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_validated(&self) -> bool {
        matches!(self, Self::Validated { .. })
    }
}

/// In-memory state of the interview level.
///
/// Pure state machine: no notifications, timers or I/O. Those live in
/// [`crate::session::LevelSession`].
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewLevel {
    config: LevelConfig,
    step: Step,
    avatar: AvatarPhase,
    deck: PitchDeck,
    pitch_verdict: Option<bool>,
    playing: bool,
}

impl InterviewLevel {
    pub fn new<R: Rng + ?Sized>(config: LevelConfig, student: &StudentInfo, rng: &mut R) -> Self {
        Self {
            config,
            step: Step::Avatar,
            avatar: AvatarPhase::Unselected,
            deck: PitchDeck::new(student.identity(), rng),
            pitch_verdict: None,
            playing: false,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &LevelConfig {
        &self.config
    }

    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub const fn avatar_phase(&self) -> AvatarPhase {
        self.avatar
    }

    #[must_use]
    pub const fn selected_avatar(&self) -> Option<&'static AvatarOption> {
        self.avatar.choice()
    }

    #[must_use]
    pub const fn avatar_verdict(&self) -> Option<bool> {
        self.avatar.verdict()
    }

    #[must_use]
    pub const fn deck(&self) -> &PitchDeck {
        &self.deck
    }

    #[must_use]
    pub fn blocks(&self) -> &[PitchBlock] {
        self.deck.current()
    }

    #[must_use]
    pub fn canonical_blocks(&self) -> &[PitchBlock] {
        self.deck.canonical()
    }

    #[must_use]
    pub const fn pitch_verdict(&self) -> Option<bool> {
        self.pitch_verdict
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Audio is offered only for a validated, correct pitch.
    #[must_use]
    pub const fn can_play_audio(&self) -> bool {
        matches!(self.pitch_verdict, Some(true))
    }

    #[must_use]
    pub const fn can_continue(&self) -> bool {
        self.pitch_verdict.is_some()
    }

    /// Re-derive pitch content if the student triple changed.
    ///
    /// Before validation the ordering is reshuffled; afterwards it is kept so the
    /// recorded verdict still describes what is on screen.
    pub fn refresh_student<R: Rng + ?Sized>(&mut self, student: &StudentInfo, rng: &mut R) -> bool {
        let keep_order = self.pitch_verdict.is_some();
        self.deck.rederive(student.identity(), rng, keep_order)
    }

    /// Select an avatar. Ignored once the avatar is validated or for unknown ids.
    pub fn select_avatar(&mut self, id: &str) -> bool {
        if self.avatar.is_validated() {
            return false;
        }
        match find_avatar(id) {
            Some(option) => {
                self.avatar = AvatarPhase::Selected(option);
                true
            }
            None => {
                log::warn!("ignoring unknown avatar id {id:?}");
                false
            }
        }
    }

    /// Lock the current selection and return whether it was correct.
    ///
    /// # Errors
    ///
    /// [`LevelError::NoAvatarSelected`] when nothing is selected and
    /// [`LevelError::AvatarAlreadyConfirmed`] on a repeat call. State is untouched.
    pub fn confirm_avatar(&mut self) -> Result<bool, LevelError> {
        match self.avatar {
            AvatarPhase::Unselected => Err(LevelError::NoAvatarSelected),
            AvatarPhase::Validated { .. } => Err(LevelError::AvatarAlreadyConfirmed),
            AvatarPhase::Selected(choice) => {
                let correct = choice.is_correct;
                self.avatar = AvatarPhase::Validated { choice, correct };
                log::debug!("avatar {} confirmed (correct: {correct})", choice.id);
                Ok(correct)
            }
        }
    }

    /// Advance to the pitch step. Returns `false` if already there.
    ///
    /// # Errors
    ///
    /// [`LevelError::AvatarNotConfirmed`] before the avatar is validated.
    pub fn enter_pitch_step(&mut self) -> Result<bool, LevelError> {
        if !self.avatar.is_validated() {
            return Err(LevelError::AvatarNotConfirmed);
        }
        if self.step == Step::Pitch {
            return Ok(false);
        }
        self.step = Step::Pitch;
        log::debug!("entered pitch step");
        Ok(true)
    }

    /// Swap a block with its neighbour. No-op outside the pitch step, after
    /// validation, or when the target is out of bounds.
    pub fn move_block(&mut self, index: usize, direction: Direction) -> bool {
        if self.step != Step::Pitch || self.pitch_verdict.is_some() {
            return false;
        }
        self.deck.move_block(index, direction)
    }

    /// Lock the ordering and record whether it matches the canonical order.
    /// A repeat call returns the recorded verdict unchanged.
    ///
    /// # Errors
    ///
    /// [`LevelError::WrongStep`] outside the pitch step.
    pub fn validate_pitch(&mut self) -> Result<bool, LevelError> {
        if self.step != Step::Pitch {
            return Err(LevelError::WrongStep {
                expected: Step::Pitch,
                actual: self.step,
            });
        }
        if let Some(verdict) = self.pitch_verdict {
            return Ok(verdict);
        }
        let correct = self.deck.is_canonical_order();
        self.pitch_verdict = Some(correct);
        log::debug!("pitch validated (correct: {correct})");
        Ok(correct)
    }

    /// Mark playback as started and build the utterance to dispatch.
    ///
    /// # Errors
    ///
    /// [`LevelError::PlaybackLocked`] unless the pitch was validated correct,
    /// [`LevelError::AlreadyPlaying`] while a previous utterance is running.
    pub fn begin_playback(&mut self) -> Result<Utterance, LevelError> {
        if !self.can_play_audio() {
            return Err(LevelError::PlaybackLocked);
        }
        if self.playing {
            return Err(LevelError::AlreadyPlaying);
        }
        self.playing = true;
        Ok(Utterance {
            text: self.deck.spoken_text(),
            lang: self.config.speech_lang.clone(),
            rate: self.config.speech_rate,
        })
    }

    pub fn finish_playback(&mut self) {
        self.playing = false;
    }

    /// Score for the level.
    ///
    /// # Errors
    ///
    /// [`LevelError::PitchNotValidated`] before the pitch is validated.
    pub fn report(&self) -> Result<LevelReport, LevelError> {
        let pitch_correct = self.pitch_verdict.ok_or(LevelError::PitchNotValidated)?;
        let avatar_correct = self.avatar.verdict().unwrap_or(false);
        Ok(LevelReport::from_verdicts(
            self.config.level,
            avatar_correct,
            pitch_correct,
            self.config.points_per_step,
        ))
    }
}
