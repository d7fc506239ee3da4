//! Character archetypes.

use std::fmt;

use strum::EnumString;

/// Closed set of character archetypes.
///
/// Parsing is case-insensitive. Anything that is not one of the four named
/// archetypes lands in [`CharacterClass::Other`], which keeps the caller's
/// label for display and uses the fallback stat curve.
#[derive(Clone, Debug, PartialEq, Eq, Hash, EnumString)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Healer,
    /// Unrecognized class label, kept verbatim.
    #[strum(default)]
    Other(String),
}

impl CharacterClass {
    /// The named archetypes, in menu order.
    pub const ARCHETYPES: [CharacterClass; 4] = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Rogue,
        CharacterClass::Healer,
    ];

    /// Parse a user-supplied class label.
    ///
    /// Surrounding whitespace is ignored. Never fails.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        trimmed
            .parse()
            .unwrap_or_else(|_| Self::Other(trimmed.to_owned()))
    }

    /// Returns true for one of the four named archetypes.
    pub fn is_archetype(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Display label: the archetype name, or the caller's text for `Other`.
    pub fn label(&self) -> &str {
        match self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Rogue => "Rogue",
            Self::Healer => "Healer",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for CharacterClass {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(CharacterClass::parse("warrior"), CharacterClass::Warrior);
        assert_eq!(CharacterClass::parse("MAGE"), CharacterClass::Mage);
        assert_eq!(CharacterClass::parse("  RoGuE "), CharacterClass::Rogue);
        assert_eq!(CharacterClass::parse("Healer"), CharacterClass::Healer);
    }

    #[test]
    fn unknown_labels_fall_back_to_other() {
        let class = CharacterClass::parse("Paladin");
        assert_eq!(class, CharacterClass::Other("Paladin".to_owned()));
        assert!(!class.is_archetype());
        assert_eq!(class.to_string(), "Paladin");
    }

    #[test]
    fn try_from_str_matches_archetypes_only() {
        assert_eq!(
            CharacterClass::try_from("ROGUE").unwrap(),
            CharacterClass::Rogue
        );
        assert_eq!(
            CharacterClass::try_from("Bard").unwrap(),
            CharacterClass::Other("Bard".to_owned())
        );
        assert_eq!(
            CharacterClass::from(String::from(" healer ")),
            CharacterClass::Healer
        );
    }

    #[test]
    fn archetypes_display_canonical_names() {
        let labels: Vec<String> = CharacterClass::ARCHETYPES
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(labels, ["Warrior", "Mage", "Rogue", "Healer"]);
        assert_eq!(CharacterClass::parse("wArRiOr").to_string(), "Warrior");
    }
}
