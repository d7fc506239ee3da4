use std::fmt;

use crate::config::RosterConfig;

/// Character level, always within [`RosterConfig::MIN_LEVEL`, `RosterConfig::MAX_LEVEL`].
///
/// Deserialization goes through [`Level::new`], so stored data is clamped too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "i64")
)]
pub struct Level(u8);

impl Level {
    pub const MIN: Self = Self(RosterConfig::MIN_LEVEL);
    pub const MAX: Self = Self(RosterConfig::MAX_LEVEL);

    /// Build a level from raw input, clamping out-of-range values.
    pub fn new(raw: i64) -> Self {
        let clamped = raw.clamp(
            i64::from(RosterConfig::MIN_LEVEL),
            i64::from(RosterConfig::MAX_LEVEL),
        );
        Self(clamped as u8)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<i64> for Level {
    fn from(raw: i64) -> Self {
        Self::new(raw)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
