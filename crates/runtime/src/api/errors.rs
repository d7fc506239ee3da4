//! Unified error types surfaced by the runtime API.
//!
//! Wraps repository failures so front-ends can bubble them up with
//! consistent context and decide, through [`GameError::severity`], whether to
//! keep the session going.
use roster_core::{CharacterId, ErrorSeverity, GameError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// The missing id, if this is a lookup failure.
    pub fn not_found_id(&self) -> Option<CharacterId> {
        match self {
            Self::Repository(RepositoryError::NotFound(id)) => Some(*id),
            Self::Repository(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.not_found_id().is_some()
    }
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Repository(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Repository(err) => err.error_code(),
        }
    }
}
