//! Error types raised by repository implementations.

use roster_core::{CharacterId, ErrorSeverity, GameError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("character {0} not found")]
    NotFound(CharacterId),

    #[error("character repository lock was poisoned")]
    LockPoisoned,
}

impl GameError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) => ErrorSeverity::Validation,
            Self::LockPoisoned => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "REPOSITORY_NOT_FOUND",
            Self::LockPoisoned => "REPOSITORY_LOCK_POISONED",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
