//! Derived combat statistics.
//!
//! Health, attack, and defense are pure functions of class and level. They
//! are never stored on their own: a record recomputes them every time its
//! class or level changes.
//!
//! ```text
//! stat = base + per_level × level
//! ```
//!
//! | class   | health  | attack | defense |
//! |---------|---------|--------|---------|
//! | warrior | 100+15L | 20+5L  | 15+4L   |
//! | mage    | 70+10L  | 30+7L  | 8+2L    |
//! | rogue   | 80+12L  | 25+6L  | 10+3L   |
//! | healer  | 90+13L  | 15+3L  | 12+3L   |
//! | other   | 85+11L  | 18+4L  | 12+3L   |

use super::class::CharacterClass;
use super::level::Level;

/// Linear growth curve for one stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct StatCurve {
    base: i32,
    per_level: i32,
}

impl StatCurve {
    const fn new(base: i32, per_level: i32) -> Self {
        Self { base, per_level }
    }

    const fn at(self, level: i32) -> i32 {
        self.base + self.per_level * level
    }
}

/// Growth curves for a whole archetype.
#[derive(Clone, Copy, Debug)]
struct ClassProfile {
    health: StatCurve,
    attack: StatCurve,
    defense: StatCurve,
}

impl ClassProfile {
    const WARRIOR: Self = Self {
        health: StatCurve::new(100, 15),
        attack: StatCurve::new(20, 5),
        defense: StatCurve::new(15, 4),
    };
    const MAGE: Self = Self {
        health: StatCurve::new(70, 10),
        attack: StatCurve::new(30, 7),
        defense: StatCurve::new(8, 2),
    };
    const ROGUE: Self = Self {
        health: StatCurve::new(80, 12),
        attack: StatCurve::new(25, 6),
        defense: StatCurve::new(10, 3),
    };
    const HEALER: Self = Self {
        health: StatCurve::new(90, 13),
        attack: StatCurve::new(15, 3),
        defense: StatCurve::new(12, 3),
    };
    const FALLBACK: Self = Self {
        health: StatCurve::new(85, 11),
        attack: StatCurve::new(18, 4),
        defense: StatCurve::new(12, 3),
    };

    fn for_class(class: &CharacterClass) -> Self {
        match class {
            CharacterClass::Warrior => Self::WARRIOR,
            CharacterClass::Mage => Self::MAGE,
            CharacterClass::Rogue => Self::ROGUE,
            CharacterClass::Healer => Self::HEALER,
            CharacterClass::Other(_) => Self::FALLBACK,
        }
    }
}

/// Health, attack, and defense for a class at a level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStats {
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl CharacterStats {
    /// Compute the stats for `class` at `level`.
    pub fn derive(class: &CharacterClass, level: Level) -> Self {
        let profile = ClassProfile::for_class(class);
        let level = i32::from(level.get());

        Self {
            health: profile.health.at(level),
            attack: profile.attack.at(level),
            defense: profile.defense.at(level),
        }
    }

    /// Sum of all three stats, shown on the character profile.
    pub fn power_score(&self) -> i32 {
        self.health + self.attack + self.defense
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(class: &str, level: i64) -> CharacterStats {
        CharacterStats::derive(&CharacterClass::parse(class), Level::new(level))
    }

    fn expected(class: &str, level: i32) -> (i32, i32, i32) {
        match class {
            "warrior" => (100 + 15 * level, 20 + 5 * level, 15 + 4 * level),
            "mage" => (70 + 10 * level, 30 + 7 * level, 8 + 2 * level),
            "rogue" => (80 + 12 * level, 25 + 6 * level, 10 + 3 * level),
            "healer" => (90 + 13 * level, 15 + 3 * level, 12 + 3 * level),
            _ => (85 + 11 * level, 18 + 4 * level, 12 + 3 * level),
        }
    }

    #[test]
    fn every_class_and_level_matches_the_table() {
        for class in ["warrior", "mage", "rogue", "healer", "bard"] {
            for level in 1..=20 {
                let got = stats(class, i64::from(level));
                assert_eq!(
                    (got.health, got.attack, got.defense),
                    expected(class, level),
                    "{class} at level {level}"
                );
            }
        }
    }

    #[test]
    fn unrecognized_classes_use_the_fallback_row_in_any_case() {
        for label in ["Paladin", "PALADIN", "", "warriors", "other"] {
            assert_eq!(stats(label, 20), CharacterStats {
                health: 305,
                attack: 98,
                defense: 72,
            });
        }
    }

    #[test]
    fn class_lookup_is_case_insensitive() {
        assert_eq!(stats("WARRIOR", 5), stats("warrior", 5));
        assert_eq!(stats("Mage", 10), stats("mAGE", 10));
    }

    #[test]
    fn spot_values() {
        assert_eq!(stats("warrior", 5), CharacterStats {
            health: 175,
            attack: 45,
            defense: 35,
        });
        assert_eq!(stats("mage", 10), CharacterStats {
            health: 170,
            attack: 100,
            defense: 28,
        });
        assert_eq!(stats("rogue", 7).power_score(), 164 + 67 + 31);
    }
}
