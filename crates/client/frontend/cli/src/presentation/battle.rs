//! Battle narration.
//!
//! Turns a finished [`BattleReport`] back into the round-by-round story:
//! the banner, each hit, the health line after a full round, and the winner.

use std::io::{self, Write};

use roster_core::{BattleReport, Fighter};

use super::Theme;

const BANNER_WIDTH: usize = 40;

pub fn write_battle(
    out: &mut impl Write,
    theme: &Theme,
    first: &Fighter,
    second: &Fighter,
    report: &BattleReport,
) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{}",
        theme.heading(&format!("   {} VS {}", first.name, second.name))
    )?;
    writeln!(out, "{rule}")?;

    for round in &report.rounds {
        writeln!(out)?;
        writeln!(out, "Round {}:", round.round)?;
        writeln!(
            out,
            "{} deals {} damage!",
            first.name,
            theme.damage(&round.first_damage.to_string())
        )?;

        // A finishing blow from the first fighter ends the round early.
        let Some(counter) = round.second_damage else {
            continue;
        };
        writeln!(
            out,
            "{} deals {} damage!",
            second.name,
            theme.damage(&counter.to_string())
        )?;
        writeln!(
            out,
            "{}: {} HP | {}: {} HP",
            first.name,
            theme.health(round.first_health, first.health),
            second.name,
            theme.health(round.second_health, second.health)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{}",
        theme.winner(&format!("    WINNER: {}!", report.winner_name))
    )?;
    writeln!(out, "{rule}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{ScriptedRng, battle};

    fn render(first: &Fighter, second: &Fighter, report: &BattleReport) -> String {
        let mut out = Vec::new();
        write_battle(&mut out, &Theme::plain(), first, second, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn narrates_every_round_and_the_winner() {
        let arthas = Fighter::new("Arthas", 175, 45, 35);
        let gandalf = Fighter::new("Gandalf", 170, 100, 28);
        let report = battle(&arthas, &gandalf, &mut ScriptedRng::zeros());

        let text = render(&arthas, &gandalf, &report);

        assert!(text.contains("   Arthas VS Gandalf"));
        assert!(text.contains("Round 1:\nArthas deals 31 damage!\nGandalf deals 83 damage!"));
        assert!(text.contains("Arthas: 92 HP | Gandalf: 139 HP"));
        assert!(text.contains("Arthas: 0 HP | Gandalf: 77 HP"));
        assert!(text.contains("    WINNER: Gandalf!"));
        assert!(!text.contains("Round 4:"));
    }

    #[test]
    fn finishing_blow_has_no_counter_or_health_line() {
        let giant = Fighter::new("Giant", 400, 120, 95);
        let squire = Fighter::new("Squire", 50, 18, 15);
        let report = battle(&giant, &squire, &mut ScriptedRng::zeros());

        let text = render(&giant, &squire, &report);

        assert!(text.contains("Round 1:\nGiant deals 113 damage!\n\n"));
        assert!(!text.contains("Squire deals"));
        assert!(!text.contains(" HP |"));
        assert!(text.contains("WINNER: Giant!"));
    }
}
