//! Runtime for the character roster.
//!
//! This crate wires the pure rules of `roster-core` to an owning record
//! store. Consumers embed [`Roster`] to create, read, update, and delete
//! characters and to stage battles between them.
//!
//! Modules are organized by responsibility:
//! - [`roster`] hosts the facade and its builder
//! - [`api`] exposes the error types downstream clients handle
//! - [`repository`] provides the record store contract and its in-memory implementation
//! - [`config`] loads runtime settings from the environment
pub mod api;
pub mod config;
pub mod repository;
pub mod roster;

pub use api::{Result, RuntimeError};
pub use config::RuntimeConfig;
pub use repository::{CharacterRepository, InMemoryCharacterRepo, RepositoryError};
pub use roster::{MIN_FIGHTERS, Matchup, Roster, RosterBuilder, RosterSetup, STARTER_PARTY};
