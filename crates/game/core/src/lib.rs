//! Deterministic roster rules shared by the runtime and the front-end.
//!
//! `roster-core` defines the canonical character model (archetypes, levels,
//! derived stats, records) and the battle engine. Everything here is pure:
//! no I/O, no globals, and randomness only through an injected
//! [`env::RngOracle`].
pub mod character;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;

pub use character::{
    CharacterClass, CharacterId, CharacterRecord, CharacterStats, CharacterUpdate, Level,
};
pub use combat::{BattleReport, Fighter, RoundLog, Side, battle};
pub use config::RosterConfig;
pub use env::{PcgRng, RngOracle, ScriptedRng};
pub use error::{ErrorSeverity, GameError};
