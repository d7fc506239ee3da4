//! Input processing for the CLI client.
//!
//! This module owns line reading and number parsing so the rest of the
//! application never touches raw input. End of input is reported as `None`
//! at every prompt; callers treat it as a request to quit.

use roster_core::CharacterId;

pub mod console;
pub use console::Console;

/// Re-prompt shown after a line that is not a number.
pub const INVALID_NUMBER_PROMPT: &str = "Please enter a valid number: ";

/// Parse a whole line as a signed integer, ignoring surrounding whitespace.
pub fn parse_number(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// Map a typed number onto a character id.
///
/// Negative or oversized numbers cannot name a character and yield `None`.
pub fn to_character_id(number: i64) -> Option<CharacterId> {
    u32::try_from(number).ok().map(CharacterId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_with_whitespace() {
        assert_eq!(parse_number(" 42 \n"), Some(42));
        assert_eq!(parse_number("-3"), Some(-3));
    }

    #[test]
    fn rejects_non_numbers() {
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("4 5"), None);
        assert_eq!(parse_number("2.5"), None);
    }

    #[test]
    fn ids_must_fit_u32() {
        assert_eq!(to_character_id(7), Some(CharacterId(7)));
        assert_eq!(to_character_id(-1), None);
        assert_eq!(to_character_id(i64::from(u32::MAX) + 1), None);
    }
}
