//! Combat resolution system.
//!
//! Pure functions over fighter snapshots. All randomness comes in through an
//! [`RngOracle`](crate::env::RngOracle), so a battle is fully determined by
//! the two fighters and the roll sequence.
//!
//! # Core Functions
//!
//! - `battle`: full duel, returns winner and round log
//! - `calculate_damage`: one hit, attack vs halved defense plus roll
//! - `apply_damage`: working health reduction

pub mod battle;
pub mod damage;

pub use battle::{BattleReport, Fighter, RoundLog, Side, battle};
pub use damage::{apply_damage, calculate_damage, displayed_health, roll_bonus};
