//! Repository layer for character records.
//!
//! Repositories own the data that CHANGES while the program runs: the
//! character records and the id counter. Derived stats and battle rules live
//! in `roster-core`, not here.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryCharacterRepo;
pub use traits::CharacterRepository;
