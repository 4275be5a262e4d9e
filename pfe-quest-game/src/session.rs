use crate::config::LevelConfig;
use crate::error::LevelError;
use crate::level::InterviewLevel;
use crate::notice::Notice;
use crate::pitch::Direction;
use crate::schedule::Scheduler;
use crate::score::LevelReport;
use crate::speech::SpeechSynth;
use crate::{Navigator, Notifier, ProgressTracker};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

/// Everything a [`LevelSession`] talks to.
pub struct Collaborators<P, N, T, S, V> {
    pub progress: P,
    pub navigator: N,
    pub notifier: T,
    pub scheduler: S,
    pub speech: V,
}

/// An [`InterviewLevel`] bound to its collaborators.
///
/// The session owns the pending avatar→pitch advance. Dropping the session
/// drops that handle, so a torn-down page never advances.
pub struct LevelSession<P, N, T, S, V>
where
    P: ProgressTracker,
    N: Navigator,
    T: Notifier,
    S: Scheduler,
    V: SpeechSynth,
{
    level: Rc<RefCell<InterviewLevel>>,
    progress: P,
    navigator: N,
    notifier: T,
    scheduler: S,
    speech: V,
    rng: ChaCha20Rng,
    pending_advance: Option<S::Handle>,
    reported: Option<LevelReport>,
}

impl<P, N, T, S, V> LevelSession<P, N, T, S, V>
where
    P: ProgressTracker,
    N: Navigator,
    T: Notifier,
    S: Scheduler,
    V: SpeechSynth,
{
    /// Start a level; `seed` drives the pitch shuffle.
    pub fn new(config: LevelConfig, collaborators: Collaborators<P, N, T, S, V>, seed: u64) -> Self {
        let Collaborators {
            progress,
            navigator,
            notifier,
            scheduler,
            speech,
        } = collaborators;
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let student = progress.student_info();
        let level = InterviewLevel::new(config, &student, &mut rng);
        Self {
            level: Rc::new(RefCell::new(level)),
            progress,
            navigator,
            notifier,
            scheduler,
            speech,
            rng,
            pending_advance: None,
            reported: None,
        }
    }

    #[must_use]
    pub fn level(&self) -> Ref<'_, InterviewLevel> {
        self.level.borrow()
    }

    /// Owned copy of the current state, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> InterviewLevel {
        self.level.borrow().clone()
    }

    #[must_use]
    pub const fn has_pending_advance(&self) -> bool {
        self.pending_advance.is_some()
    }

    /// Pull student info again and re-derive pitch content if it changed.
    pub fn sync_student(&mut self) -> bool {
        let student = self.progress.student_info();
        self.level.borrow_mut().refresh_student(&student, &mut self.rng)
    }

    pub fn select_avatar(&mut self, id: &str) -> bool {
        self.level.borrow_mut().select_avatar(id)
    }

    /// Confirm the selected avatar, notify the verdict and schedule the pitch step.
    ///
    /// # Errors
    ///
    /// Propagates [`InterviewLevel::confirm_avatar`] failures after surfacing
    /// their notice, if any.
    pub fn confirm_avatar(&mut self) -> Result<bool, LevelError> {
        let verdict = self.level.borrow_mut().confirm_avatar();
        let correct = match verdict {
            Ok(correct) => correct,
            Err(err) => {
                log::warn!("avatar confirmation rejected: {err}");
                if let Some(notice) = err.notice() {
                    self.notifier.notify(notice);
                }
                return Err(err);
            }
        };
        self.notifier.notify(if correct {
            Notice::AvatarCorrect
        } else {
            Notice::AvatarIncorrect
        });

        let delay = self.level.borrow().config().advance_delay();
        let level: Weak<RefCell<InterviewLevel>> = Rc::downgrade(&self.level);
        let handle = self.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(level) = level.upgrade() {
                    if let Err(err) = level.borrow_mut().enter_pitch_step() {
                        log::warn!("deferred pitch step skipped: {err}");
                    }
                }
            }),
        );
        self.pending_advance = Some(handle);
        Ok(correct)
    }

    pub fn move_block(&mut self, index: usize, direction: Direction) -> bool {
        self.level.borrow_mut().move_block(index, direction)
    }

    /// Validate the ordering and notify the verdict. A repeat call returns the
    /// recorded verdict without notifying again.
    ///
    /// # Errors
    ///
    /// [`LevelError::WrongStep`] before the pitch step.
    pub fn validate_pitch(&mut self) -> Result<bool, LevelError> {
        if let Some(verdict) = self.level.borrow().pitch_verdict() {
            return Ok(verdict);
        }
        let correct = self.level.borrow_mut().validate_pitch()?;
        self.notifier.notify(if correct {
            Notice::PitchCorrect
        } else {
            Notice::PitchIncorrect
        });
        Ok(correct)
    }

    /// Read the pitch aloud.
    ///
    /// Missing speech support is not an error: it raises an informational
    /// notice and returns `Ok(false)`. Calls while audio is playing are
    /// rejected rather than queued.
    ///
    /// # Errors
    ///
    /// [`LevelError::PlaybackLocked`] unless the pitch was validated correct,
    /// [`LevelError::AlreadyPlaying`] during playback.
    pub fn play_audio(&mut self) -> Result<bool, LevelError> {
        if !self.level.borrow().can_play_audio() {
            return Err(LevelError::PlaybackLocked);
        }
        if !self.speech.is_available() {
            self.notifier.notify(Notice::SpeechUnsupported);
            return Ok(false);
        }
        let utterance = self.level.borrow_mut().begin_playback()?;

        let level = Rc::downgrade(&self.level);
        let on_settled = Box::new(move || {
            if let Some(level) = level.upgrade() {
                level.borrow_mut().finish_playback();
            }
        });
        match self.speech.speak(utterance, on_settled) {
            Ok(()) => Ok(true),
            Err(err) => {
                log::warn!("speech dispatch failed: {err}");
                self.level.borrow_mut().finish_playback();
                if let Some(notice) = err.notice() {
                    self.notifier.notify(notice);
                }
                Ok(false)
            }
        }
    }

    /// Report the score, announce it and navigate to the next level.
    /// Only the first call records anything.
    ///
    /// # Errors
    ///
    /// [`LevelError::PitchNotValidated`] before the pitch is validated.
    pub fn continue_level(&mut self) -> Result<LevelReport, LevelError> {
        if let Some(report) = self.reported {
            return Ok(report);
        }
        let (report, next_route) = {
            let level = self.level.borrow();
            (level.report()?, level.config().next_route.clone())
        };
        self.progress.complete_level(report.level, report.total);
        self.notifier.notify(report.summary());
        log::info!(
            "level {} completed with {}/{}",
            report.level,
            report.total,
            report.max
        );
        self.navigator.navigate(&next_route);
        self.reported = Some(report);
        Ok(report)
    }
}
