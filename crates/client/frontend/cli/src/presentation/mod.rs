//! Rendering for the text menu.
//!
//! Everything here writes into a caller-supplied `Write`; nothing reads input
//! or touches the roster.

mod battle;
mod profile;
mod table;
mod theme;

pub use battle::write_battle;
pub use profile::{summary_line, write_profile};
pub use table::CharacterTable;
pub use theme::Theme;
