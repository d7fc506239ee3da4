//! In-memory CharacterRepository implementation.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use roster_core::{
    CharacterClass, CharacterId, CharacterRecord, CharacterUpdate, Level, RosterConfig,
};

use crate::repository::{CharacterRepository, RepositoryError, Result};

/// Records plus the id counter, guarded together so allocation and insert
/// happen in one critical section.
#[derive(Debug)]
struct RecordTable {
    next_id: CharacterId,
    records: HashMap<CharacterId, CharacterRecord>,
}

/// In-memory implementation of CharacterRepository.
///
/// Nothing survives the process; this is the only store the roster needs.
#[derive(Debug)]
pub struct InMemoryCharacterRepo {
    inner: RwLock<RecordTable>,
}

impl InMemoryCharacterRepo {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RecordTable {
                next_id: CharacterId(RosterConfig::FIRST_ID),
                records: HashMap::new(),
            }),
        }
    }

    /// Identifier the next insert will receive.
    pub fn peek_next_id(&self) -> Result<CharacterId> {
        Ok(self.read()?.next_id)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, RecordTable>> {
        self.inner.read().map_err(|_| RepositoryError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, RecordTable>> {
        self.inner.write().map_err(|_| RepositoryError::LockPoisoned)
    }
}

impl Default for InMemoryCharacterRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRepository for InMemoryCharacterRepo {
    fn insert(&self, name: &str, class: CharacterClass, level: Level) -> Result<CharacterRecord> {
        let mut table = self.write()?;

        let id = table.next_id;
        table.next_id = id.next();

        let record = CharacterRecord::new(id, name, class, level);
        table.records.insert(id, record.clone());
        Ok(record)
    }

    fn get(&self, id: CharacterId) -> Result<CharacterRecord> {
        let table = self.read()?;
        table
            .records
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<CharacterRecord>> {
        let table = self.read()?;
        let mut records: Vec<CharacterRecord> = table.records.values().cloned().collect();
        records.sort_unstable_by_key(CharacterRecord::id);
        Ok(records)
    }

    fn update(&self, id: CharacterId, update: &CharacterUpdate) -> Result<CharacterRecord> {
        let mut table = self.write()?;
        let record = table
            .records
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        record.apply(update);
        Ok(record.clone())
    }

    fn remove(&self, id: CharacterId) -> Result<CharacterRecord> {
        let mut table = self.write()?;
        table
            .records
            .remove(&id)
            .ok_or(RepositoryError::NotFound(id))
    }

    fn len(&self) -> Result<usize> {
        Ok(self.read()?.records.len())
    }

    fn exists(&self, id: CharacterId) -> Result<bool> {
        Ok(self.read()?.records.contains_key(&id))
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use super::*;

    fn poison(repo: &InMemoryCharacterRepo) {
        let _ = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = repo.inner.write().unwrap();
            panic!("writer died holding the lock");
        }));
    }

    #[test]
    fn exists_distinguishes_absent_from_present() {
        let repo = InMemoryCharacterRepo::new();
        let record = repo
            .insert("Arthas", CharacterClass::Warrior, Level::new(5))
            .unwrap();

        assert_eq!(repo.exists(record.id()), Ok(true));
        assert_eq!(repo.exists(CharacterId(99)), Ok(false));
    }

    #[test]
    fn poisoned_lock_is_reported_not_hidden() {
        let repo = InMemoryCharacterRepo::new();
        poison(&repo);

        assert_eq!(repo.exists(CharacterId(1)), Err(RepositoryError::LockPoisoned));
        assert_eq!(repo.get(CharacterId(1)), Err(RepositoryError::LockPoisoned));
        assert_eq!(
            repo.insert("Late", CharacterClass::Mage, Level::MIN),
            Err(RepositoryError::LockPoisoned)
        );
    }

    #[test]
    fn ids_survive_removal() {
        let repo = InMemoryCharacterRepo::new();
        let first = repo
            .insert("First", CharacterClass::Rogue, Level::MIN)
            .unwrap();
        repo.remove(first.id()).unwrap();

        assert_eq!(repo.peek_next_id().unwrap(), CharacterId(2));
    }
}
