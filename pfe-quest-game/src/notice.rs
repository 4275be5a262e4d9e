use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

/// User-facing notifications raised by the level.
///
/// Front ends localize through [`Notice::key`] and [`Notice::args`];
/// [`Notice::default_text`] is the French copy used when no bundle is at hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    AvatarMissing,
    AvatarCorrect,
    AvatarIncorrect,
    PitchCorrect,
    PitchIncorrect,
    SpeechUnsupported,
    BackBlocked,
    LevelSummary { level: u8, score: u32, max: u32 },
}

impl Notice {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::AvatarCorrect | Self::PitchCorrect => Severity::Success,
            Self::AvatarMissing | Self::AvatarIncorrect | Self::PitchIncorrect => Severity::Error,
            Self::BackBlocked => Severity::Warning,
            Self::SpeechUnsupported => Severity::Info,
            Self::LevelSummary { score, max, .. } => {
                if *score == *max {
                    Severity::Success
                } else {
                    Severity::Warning
                }
            }
        }
    }

    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::AvatarMissing => "notice.avatar_missing",
            Self::AvatarCorrect => "notice.avatar_correct",
            Self::AvatarIncorrect => "notice.avatar_incorrect",
            Self::PitchCorrect => "notice.pitch_correct",
            Self::PitchIncorrect => "notice.pitch_incorrect",
            Self::SpeechUnsupported => "notice.speech_unsupported",
            Self::BackBlocked => "notice.back_blocked",
            Self::LevelSummary { score, max, .. } => {
                if *score == *max {
                    "notice.level_perfect"
                } else {
                    "notice.level_partial"
                }
            }
        }
    }

    /// Interpolation arguments for [`Notice::key`].
    #[must_use]
    pub fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::LevelSummary { level, score, max } => vec![
                ("level", level.to_string()),
                ("score", score.to_string()),
                ("max", max.to_string()),
            ],
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn default_text(&self) -> String {
        match self {
            Self::AvatarMissing => "Veuillez sélectionner un avatar".to_string(),
            Self::AvatarCorrect => "Excellent choix ! +10 points".to_string(),
            Self::AvatarIncorrect => {
                "Cette tenue n'est pas appropriée. La bonne réponse vous est affichée.".to_string()
            }
            Self::PitchCorrect => {
                "Excellent ! Votre pitch est parfaitement structuré ! +10 points".to_string()
            }
            Self::PitchIncorrect => {
                "L'ordre n'est pas optimal. La bonne réponse vous est affichée.".to_string()
            }
            Self::SpeechUnsupported => {
                "La lecture audio n'est pas prise en charge sur cet appareil.".to_string()
            }
            Self::BackBlocked => "Vous ne pouvez pas revenir en arrière pendant le jeu".to_string(),
            Self::LevelSummary { level, score, max } => {
                if score == max {
                    format!("Excellent ! Vous avez obtenu {score}/{max} points au niveau {level}.")
                } else {
                    format!("Vous avez obtenu {score}/{max} points au niveau {level}.")
                }
            }
        }
    }
}
