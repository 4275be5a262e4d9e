use crate::notice::Notice;
use crate::level::Step;
use thiserror::Error;

/// Rejected level operations. None of these mutate state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("no avatar selected")]
    NoAvatarSelected,
    #[error("avatar already confirmed")]
    AvatarAlreadyConfirmed,
    #[error("avatar not confirmed yet")]
    AvatarNotConfirmed,
    #[error("operation requires the {expected:?} step (currently {actual:?})")]
    WrongStep { expected: Step, actual: Step },
    #[error("pitch has not been validated")]
    PitchNotValidated,
    #[error("playback is only available for a correctly ordered pitch")]
    PlaybackLocked,
    #[error("pitch audio is already playing")]
    AlreadyPlaying,
}

impl LevelError {
    /// Notification to surface for this rejection, if the user should see one.
    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        match self {
            Self::NoAvatarSelected => Some(Notice::AvatarMissing),
            _ => None,
        }
    }
}

/// Failures reported by a speech-synthesis collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpeechError {
    #[error("speech synthesis is not available in this environment")]
    Unsupported,
    #[error("speech dispatch failed: {0}")]
    Dispatch(String),
}

impl SpeechError {
    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        match self {
            Self::Unsupported => Some(Notice::SpeechUnsupported),
            Self::Dispatch(_) => None,
        }
    }
}
