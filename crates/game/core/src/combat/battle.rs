//! Turn-based duel between two fighter snapshots.
//!
//! Each round the first fighter strikes; if the second is still standing it
//! strikes back. The loop ends as soon as either working health reaches zero.
//! The store is never touched: fighters are copies of a record's stats.

use std::fmt;

use crate::character::CharacterRecord;
use crate::env::RngOracle;

use super::damage::{apply_damage, calculate_damage, displayed_health, roll_bonus};

/// Battle-time snapshot of a character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub name: String,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
}

impl Fighter {
    pub fn new(name: impl Into<String>, health: i32, attack: i32, defense: i32) -> Self {
        Self {
            name: name.into(),
            health,
            attack,
            defense,
        }
    }
}

impl From<&CharacterRecord> for Fighter {
    fn from(record: &CharacterRecord) -> Self {
        Self::new(
            record.name(),
            record.health(),
            record.attack(),
            record.defense(),
        )
    }
}

/// Which fighter of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// Strikes first every round.
    First,
    /// Strikes back only while still standing.
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Side::First => "first",
            Side::Second => "second",
        };
        f.write_str(label)
    }
}

/// One round of the battle log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundLog {
    /// 1-based round number.
    pub round: u32,
    /// Damage dealt by the first fighter.
    pub first_damage: i32,
    /// Damage dealt by the second fighter; `None` when the first fighter's
    /// hit ended the battle before the counter-attack.
    pub second_damage: Option<i32>,
    /// First fighter's health after the round, clamped at zero.
    pub first_health: i32,
    /// Second fighter's health after the round, clamped at zero.
    pub second_health: i32,
}

impl RoundLog {
    /// Returns true if this round ended the battle.
    pub fn is_final(&self) -> bool {
        self.first_health == 0 || self.second_health == 0
    }
}

/// Outcome of a battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleReport {
    pub winner: Side,
    pub winner_name: String,
    pub rounds: Vec<RoundLog>,
    /// Working health at the end, clamped at zero.
    pub first_health: i32,
    pub second_health: i32,
}

impl BattleReport {
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// The fighter that lost.
    pub fn loser<'a>(&self, first: &'a Fighter, second: &'a Fighter) -> &'a Fighter {
        match self.winner {
            Side::First => second,
            Side::Second => first,
        }
    }
}

/// Simulate a battle between two fighters.
///
/// # Algorithm
///
/// ```text
/// while first.hp > 0 && second.hp > 0:
///     second.hp -= damage(first -> second)
///     if second.hp <= 0: break            // first wins, no counter
///     first.hp  -= damage(second -> first)
/// winner = first if first.hp > 0 else second
/// ```
///
/// Damage is `max(1, attack - defense/2 + roll)` with `roll` drawn from `rng`
/// in `[0, 9]`, first fighter's roll before the second's. If a fighter enters
/// with no health no round is played.
pub fn battle(
    first: &Fighter,
    second: &Fighter,
    rng: &mut (impl RngOracle + ?Sized),
) -> BattleReport {
    let mut first_hp = first.health;
    let mut second_hp = second.health;
    let mut rounds = Vec::new();
    let mut round = 1;

    while first_hp > 0 && second_hp > 0 {
        let first_damage = calculate_damage(first, second, roll_bonus(rng));
        second_hp = apply_damage(second_hp, first_damage);

        if second_hp <= 0 {
            rounds.push(RoundLog {
                round,
                first_damage,
                second_damage: None,
                first_health: displayed_health(first_hp),
                second_health: displayed_health(second_hp),
            });
            break;
        }

        let second_damage = calculate_damage(second, first, roll_bonus(rng));
        first_hp = apply_damage(first_hp, second_damage);

        rounds.push(RoundLog {
            round,
            first_damage,
            second_damage: Some(second_damage),
            first_health: displayed_health(first_hp),
            second_health: displayed_health(second_hp),
        });
        round += 1;
    }

    let (winner, winner_name) = if first_hp > 0 {
        (Side::First, first.name.clone())
    } else {
        (Side::Second, second.name.clone())
    };

    BattleReport {
        winner,
        winner_name,
        rounds,
        first_health: displayed_health(first_hp),
        second_health: displayed_health(second_hp),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{CharacterClass, CharacterId, Level};
    use crate::env::{PcgRng, ScriptedRng};

    fn record(name: &str, class: CharacterClass, level: i64) -> CharacterRecord {
        CharacterRecord::new(CharacterId(1), name, class, Level::new(level))
    }

    #[test]
    fn zero_rolls_follow_the_hand_computed_trace() {
        let arthas = Fighter::from(&record("Arthas", CharacterClass::Warrior, 5));
        let gandalf = Fighter::from(&record("Gandalf", CharacterClass::Mage, 10));
        let mut rng = ScriptedRng::zeros();

        let report = battle(&arthas, &gandalf, &mut rng);

        // Arthas: 175 hp, 45 atk, 35 def. Gandalf: 170 hp, 100 atk, 28 def.
        // Arthas hits for 45 - 14 = 31, Gandalf for 100 - 17 = 83.
        let trace: Vec<_> = report
            .rounds
            .iter()
            .map(|r| (r.round, r.first_damage, r.second_damage, r.first_health, r.second_health))
            .collect();
        assert_eq!(trace, vec![
            (1, 31, Some(83), 92, 139),
            (2, 31, Some(83), 9, 108),
            (3, 31, Some(83), 0, 77),
        ]);
        assert_eq!(report.winner, Side::Second);
        assert_eq!(report.winner_name, "Gandalf");
        assert_eq!(report.first_health, 0);
        assert_eq!(report.second_health, 77);
        assert_eq!(rng.draws(), 6);
    }

    #[test]
    fn first_fighter_wins_without_counter_when_the_hit_is_lethal() {
        let striker = Fighter::new("Striker", 10, 50, 0);
        let victim = Fighter::new("Victim", 20, 500, 0);

        let report = battle(&striker, &victim, &mut ScriptedRng::zeros());

        assert_eq!(report.winner, Side::First);
        assert_eq!(report.round_count(), 1);
        let last = report.rounds[0];
        assert_eq!(last.second_damage, None);
        assert_eq!(last.first_health, 10);
        assert_eq!(last.second_health, 0);
        assert!(last.is_final());
        assert_eq!(report.loser(&striker, &victim).name, "Victim");
    }

    #[test]
    fn rolls_are_drawn_first_fighter_then_second() {
        let first = Fighter::new("A", 1000, 10, 0);
        let second = Fighter::new("B", 1000, 10, 0);
        let mut rng = ScriptedRng::new(vec![9, 0]);

        let report = battle(&first, &second, &mut rng);

        assert_eq!(report.rounds[0].first_damage, 19);
        assert_eq!(report.rounds[0].second_damage, Some(10));
        // First deals 19 per round, second 10: first wins.
        assert_eq!(report.winner, Side::First);
    }

    #[test]
    fn depleted_fighter_at_entry_loses_immediately() {
        let healthy = Fighter::new("Healthy", 50, 10, 10);
        let fallen = Fighter::new("Fallen", 0, 10, 10);
        let mut rng = ScriptedRng::zeros();

        let report = battle(&fallen, &healthy, &mut rng);
        assert_eq!(report.winner, Side::Second);
        assert_eq!(report.winner_name, "Healthy");
        assert!(report.rounds.is_empty());

        let report = battle(&healthy, &fallen, &mut rng);
        assert_eq!(report.winner, Side::First);
        assert!(report.rounds.is_empty());
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn both_depleted_goes_to_the_second_fighter() {
        let a = Fighter::new("A", -5, 10, 10);
        let b = Fighter::new("B", 0, 10, 10);
        let report = battle(&a, &b, &mut ScriptedRng::zeros());
        assert_eq!(report.winner, Side::Second);
        assert!(report.rounds.is_empty());
    }

    #[test]
    fn minimum_damage_still_terminates() {
        let wall = Fighter::new("Wall", 30, 1, 1_000);
        let other = Fighter::new("Other Wall", 30, 1, 1_000);

        let report = battle(&wall, &other, &mut ScriptedRng::zeros());

        assert_eq!(report.winner, Side::First);
        assert_eq!(report.round_count(), 30);
        assert!(report.rounds.iter().all(|r| r.first_damage == 1));
    }

    #[test]
    fn fighter_can_face_a_copy_of_itself() {
        let shadow = Fighter::from(&record("Shadow", CharacterClass::Rogue, 7));
        let report = battle(&shadow, &shadow.clone(), &mut PcgRng::new(3));
        assert_eq!(report.winner_name, "Shadow");
        assert!(report.rounds.last().is_some_and(RoundLog::is_final));
    }

    #[test]
    fn same_seed_replays_the_same_battle() {
        let a = Fighter::from(&record("Arthas", CharacterClass::Warrior, 5));
        let b = Fighter::from(&record("Gandalf", CharacterClass::Mage, 10));

        let first = battle(&a, &b, &mut PcgRng::new(99));
        let second = battle(&a, &b, &mut PcgRng::new(99));
        assert_eq!(first, second);
    }
}
