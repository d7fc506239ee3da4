//! Common error infrastructure for roster-core.
//!
//! Domain errors live next to the layer that raises them (the record store
//! reports `NotFound`); this module only provides the classification shared by
//! every layer so callers can decide whether to carry on or abort.

/// Severity level of an error, used to pick a recovery strategy.
///
/// - **Recoverable**: temporary conditions that may succeed on retry
/// - **Validation**: the request referenced something that does not exist or is invalid
/// - **Internal**: unexpected state inconsistencies that require investigation
/// - **Fatal**: the store can no longer be trusted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    Recoverable,

    /// Validation error - invalid request, should not retry without changes.
    ///
    /// Examples: unknown character id
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - state corrupted, cannot continue.
    ///
    /// Examples: poisoned store lock
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the caller may keep going after reporting the error.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all roster errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and assertions in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_do_not_stop_the_caller() {
        assert!(ErrorSeverity::Validation.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_internal());
    }

    #[test]
    fn fatal_errors_are_internal() {
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(!ErrorSeverity::Fatal.is_recoverable());
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
