use crate::error::SpeechError;
use serde::Serialize;

/// A single text-to-speech request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Utterance {
    pub text: String,
    /// BCP 47 tag, e.g. `fr-FR`.
    pub lang: String,
    /// Multiplier on the engine's default speaking rate.
    pub rate: f32,
}

/// Environment-provided speech synthesis.
pub trait SpeechSynth {
    /// Whether the host exposes a speech engine at all.
    fn is_available(&self) -> bool;

    /// Queue `utterance`. `on_settled` must run exactly once, when playback
    /// ends or errors.
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::Unsupported`] when no engine exists, or
    /// [`SpeechError::Dispatch`] when the engine refused the request. In both
    /// cases `on_settled` is not called.
    fn speak(&self, utterance: Utterance, on_settled: Box<dyn FnOnce()>)
    -> Result<(), SpeechError>;
}
