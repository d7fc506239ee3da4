//! In-memory repository implementations.

mod characters;

pub use characters::InMemoryCharacterRepo;
