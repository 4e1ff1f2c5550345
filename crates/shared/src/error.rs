use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    UnknownCommand,
    SoundUnavailable,
    InvalidSetting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("unknown command '{0}' (type 'help' for the list)")]
    UnknownCommand(String),
    #[error("sound cue '{cue}' unavailable: {reason}")]
    SoundUnavailable { cue: String, reason: String },
    #[error("invalid setting {key}={value}: {reason}")]
    InvalidSetting {
        key: String,
        value: String,
        reason: String,
    },
}

impl HostError {
    pub fn sound_unavailable(cue: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SoundUnavailable {
            cue: cue.into(),
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownCommand(_) => ErrorCode::UnknownCommand,
            Self::SoundUnavailable { .. } => ErrorCode::SoundUnavailable,
            Self::InvalidSetting { .. } => ErrorCode::InvalidSetting,
        }
    }
}
