//! Character records and the rules that derive their stats.
//!
//! - [`CharacterClass`]: closed archetype set with a case-insensitive parse
//! - [`Level`]: level newtype clamped to the configured bounds
//! - [`CharacterStats`]: health/attack/defense as a pure function of class and level
//! - [`CharacterRecord`]: the stored record, keeping stats in sync with its source fields

mod class;
mod level;
mod record;
mod stats;

pub use class::CharacterClass;
pub use level::Level;
pub use record::{CharacterId, CharacterRecord, CharacterUpdate};
pub use stats::CharacterStats;
