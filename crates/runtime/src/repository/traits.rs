//! Repository contract for the character record store.

use roster_core::{CharacterClass, CharacterId, CharacterRecord, CharacterUpdate, Level};

use super::error::{RepositoryError, Result};

/// Owning store of character records.
///
/// Implementations assign identifiers starting at
/// [`RosterConfig::FIRST_ID`](roster_core::RosterConfig::FIRST_ID), strictly
/// increasing and never reused, even after a record is removed. Every method
/// is a critical section: an id is allocated and its record inserted under the
/// same lock.
pub trait CharacterRepository: Send + Sync {
    /// Insert a new record and return it with its freshly assigned id.
    fn insert(&self, name: &str, class: CharacterClass, level: Level) -> Result<CharacterRecord>;

    /// Look a record up by id.
    fn get(&self, id: CharacterId) -> Result<CharacterRecord>;

    /// All current records, ordered by ascending id.
    fn list(&self) -> Result<Vec<CharacterRecord>>;

    /// Apply a partial update and return the updated record.
    fn update(&self, id: CharacterId, update: &CharacterUpdate) -> Result<CharacterRecord>;

    /// Remove a record and return it.
    fn remove(&self, id: CharacterId) -> Result<CharacterRecord>;

    /// Number of records currently held.
    fn len(&self) -> Result<usize>;

    /// Check if a record exists.
    ///
    /// Only `NotFound` means absent; any other failure is returned.
    fn exists(&self, id: CharacterId) -> Result<bool> {
        match self.get(id) {
            Ok(_) => Ok(true),
            Err(RepositoryError::NotFound(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
