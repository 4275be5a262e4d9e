//! PFE Quest level engine
//!
//! Platform-agnostic logic for level 4, "L'Entretien": pick the interview
//! avatar, then put a four-block pitch back in order. This crate has no UI or
//! browser dependencies; hosts plug in through the collaborator traits below.

pub mod avatars;
pub mod config;
pub mod error;
pub mod guard;
pub mod level;
pub mod memory;
pub mod notice;
pub mod pitch;
pub mod schedule;
pub mod score;
pub mod session;
pub mod speech;
pub mod student;

// Re-export commonly used types
pub use avatars::{AvatarOption, avatars, correct_avatar, find_avatar, is_correct_avatar};
pub use config::LevelConfig;
pub use error::{LevelError, SpeechError};
pub use guard::{BackGuard, History};
pub use level::{AvatarPhase, InterviewLevel, Step};
pub use notice::{Notice, Severity};
pub use pitch::{CANONICAL_IDS, Direction, PitchBlock, PitchDeck, canonical_blocks};
pub use schedule::Scheduler;
pub use score::LevelReport;
pub use session::{Collaborators, LevelSession};
pub use speech::{SpeechSynth, Utterance};
pub use student::{StudentIdentity, StudentInfo};

/// Cross-level progression store.
/// Platform-specific implementations should provide this
pub trait ProgressTracker {
    /// Student info captured by earlier levels. Missing fields stay empty.
    fn student_info(&self) -> StudentInfo;

    /// Record the score earned on `level`.
    fn complete_level(&self, level: u8, score: u32);
}

/// Route changes requested by a level.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Transient user-facing messages.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}
