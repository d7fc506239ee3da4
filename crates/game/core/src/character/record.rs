use std::fmt;

use super::class::CharacterClass;
use super::level::Level;
use super::stats::CharacterStats;

/// Unique identifier for a character record.
///
/// Handed out by the store, strictly increasing, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u32);

impl CharacterId {
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The identifier that follows this one.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A character as held by the record store.
///
/// The derived stats are private: the only way to change them is to change
/// the class or level, which recomputes them on the spot. Deserialized
/// records ignore any stored stats and derive them again.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RecordRepr")
)]
pub struct CharacterRecord {
    id: CharacterId,
    name: String,
    class: CharacterClass,
    level: Level,
    stats: CharacterStats,
}

impl CharacterRecord {
    /// Name given to characters created with a blank name.
    pub const DEFAULT_NAME: &'static str = "Unnamed";

    pub fn new(id: CharacterId, name: &str, class: CharacterClass, level: Level) -> Self {
        let stats = CharacterStats::derive(&class, level);
        Self {
            id,
            name: normalize_name(name).unwrap_or_else(|| Self::DEFAULT_NAME.to_owned()),
            class,
            level,
            stats,
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> &CharacterClass {
        &self.class
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn stats(&self) -> CharacterStats {
        self.stats
    }

    pub fn health(&self) -> i32 {
        self.stats.health
    }

    pub fn attack(&self) -> i32 {
        self.stats.attack
    }

    pub fn defense(&self) -> i32 {
        self.stats.defense
    }

    /// Rename the character. Blank names are ignored.
    pub fn rename(&mut self, name: &str) {
        if let Some(name) = normalize_name(name) {
            self.name = name;
        }
    }

    pub fn set_class(&mut self, class: CharacterClass) {
        self.class = class;
        self.recompute();
    }

    pub fn set_level(&mut self, level: Level) {
        self.level = level;
        self.recompute();
    }

    /// Apply a partial update.
    ///
    /// Stats are recomputed once, and only when class or level was touched.
    pub fn apply(&mut self, update: &CharacterUpdate) {
        if let Some(name) = &update.name {
            self.rename(name);
        }

        let mut touched = false;
        if let Some(class) = &update.class {
            self.class = class.clone();
            touched = true;
        }
        if let Some(level) = update.level {
            self.level = Level::new(level);
            touched = true;
        }

        if touched {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        self.stats = CharacterStats::derive(&self.class, self.level);
    }
}

/// Stored shape of a record; stats are not trusted on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RecordRepr {
    id: CharacterId,
    name: String,
    class: CharacterClass,
    level: Level,
}

#[cfg(feature = "serde")]
impl From<RecordRepr> for CharacterRecord {
    fn from(repr: RecordRepr) -> Self {
        Self::new(repr.id, &repr.name, repr.class, repr.level)
    }
}

/// Partial update for a character record.
///
/// Unset fields are left alone. The level is carried raw so the clamp happens
/// in one place, when the update is applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterUpdate {
    pub name: Option<String>,
    pub class: Option<CharacterClass>,
    pub level: Option<i64>,
}

impl CharacterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: CharacterClass) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    /// Returns true if applying this update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.class.is_none() && self.level.is_none()
    }
}

fn normalize_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arthas() -> CharacterRecord {
        CharacterRecord::new(
            CharacterId(1),
            "Arthas",
            CharacterClass::Warrior,
            Level::new(5),
        )
    }

    #[test]
    fn new_record_derives_stats() {
        let record = arthas();
        assert_eq!(record.health(), 175);
        assert_eq!(record.attack(), 45);
        assert_eq!(record.defense(), 35);
    }

    #[test]
    fn name_only_update_keeps_everything_else() {
        let mut record = arthas();
        let before = record.clone();

        record.apply(&CharacterUpdate::new().name("Uther"));

        assert_eq!(record.name(), "Uther");
        assert_eq!(record.class(), before.class());
        assert_eq!(record.level(), before.level());
        assert_eq!(record.stats(), before.stats());
    }

    #[test]
    fn class_and_level_updates_recompute_stats() {
        let mut record = arthas();

        record.apply(&CharacterUpdate::new().class(CharacterClass::Mage).level(25));

        assert_eq!(record.level().get(), 20);
        assert_eq!(
            record.stats(),
            CharacterStats::derive(&CharacterClass::Mage, Level::MAX)
        );

        record.set_level(Level::new(-3));
        assert_eq!(record.level().get(), 1);
        assert_eq!(record.health(), 80);
    }

    #[test]
    fn blank_names_are_normalized() {
        let record = CharacterRecord::new(CharacterId(9), "   ", CharacterClass::Rogue, Level::MIN);
        assert_eq!(record.name(), CharacterRecord::DEFAULT_NAME);

        let mut record = arthas();
        record.rename("  ");
        assert_eq!(record.name(), "Arthas");
        record.rename("  Varian ");
        assert_eq!(record.name(), "Varian");
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut record = arthas();
        let before = record.clone();
        let update = CharacterUpdate::new();

        assert!(update.is_empty());
        record.apply(&update);
        assert_eq!(record, before);
    }
}
