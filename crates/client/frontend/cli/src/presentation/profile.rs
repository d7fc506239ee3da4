use std::io::{self, Write};

use roster_core::CharacterRecord;

use super::Theme;

/// Full profile of one character, power score included.
pub fn write_profile(
    out: &mut impl Write,
    theme: &Theme,
    record: &CharacterRecord,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", theme.heading("--- Character Profile ---"))?;
    writeln!(out, "ID: {}", record.id())?;
    writeln!(out, "Name: {}", record.name())?;
    writeln!(out, "Class: {}", record.class())?;
    writeln!(out, "Level: {}", record.level())?;
    writeln!(out, "Health: {}", record.health())?;
    writeln!(out, "Attack: {}", record.attack())?;
    writeln!(out, "Defense: {}", record.defense())?;
    writeln!(out, "Power Score: {}", record.stats().power_score())
}

/// One-line summary shown before an update.
pub fn summary_line(record: &CharacterRecord) -> String {
    format!(
        "Current: {} | {} | Level {}",
        record.name(),
        record.class(),
        record.level()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{CharacterClass, CharacterId, Level};

    #[test]
    fn profile_lists_every_field() {
        let record = CharacterRecord::new(
            CharacterId(2),
            "Gandalf",
            CharacterClass::Mage,
            Level::new(10),
        );
        let mut out = Vec::new();

        write_profile(&mut out, &Theme::plain(), &record).unwrap();

        let text = String::from_utf8(out).unwrap();
        for line in [
            "ID: 2",
            "Name: Gandalf",
            "Class: Mage",
            "Level: 10",
            "Health: 170",
            "Attack: 100",
            "Defense: 28",
            "Power Score: 298",
        ] {
            assert!(text.contains(line), "missing {line:?} in {text}");
        }
    }

    #[test]
    fn summary_shows_name_class_and_level() {
        let record = CharacterRecord::new(
            CharacterId(3),
            "Shadow",
            CharacterClass::Rogue,
            Level::new(7),
        );
        assert_eq!(summary_line(&record), "Current: Shadow | Rogue | Level 7");
    }
}
