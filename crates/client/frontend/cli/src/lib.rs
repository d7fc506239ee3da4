//! Text menu front-end for the character roster.
//!
//! This crate provides the line-oriented menu that drives a
//! [`roster_runtime::Roster`]: create, list, view, update, delete, and
//! battle.
//!
//! # Architecture
//!
//! CliApp is a thin driver that:
//! - Owns the roster and the battle RNG handed over by the runtime builder
//! - Reads prompts through a generic [`input::Console`], so stdin/stdout and
//!   in-memory buffers behave the same
//! - Renders through [`presentation`], never formatting inside the loop itself

mod app;
mod config;
pub mod input;
pub mod logging;
pub mod menu;
pub mod presentation;

pub use app::CliApp;
pub use config::{CliConfig, UiConfig};
