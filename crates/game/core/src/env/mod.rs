//! Environment collaborators injected into otherwise pure game logic.
mod rng;

pub use rng::{PcgRng, RngOracle, ScriptedRng};
