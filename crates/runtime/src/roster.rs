//! Roster facade over the record store and the battle engine.
//!
//! [`Roster`] is the single entry point front-ends talk to: the five record
//! operations plus `battle`. It owns its repository explicitly; there is no
//! global state.

use roster_core::{
    BattleReport, CharacterClass, CharacterId, CharacterRecord, CharacterUpdate, Fighter, Level,
    PcgRng, RngOracle, Side, battle,
};

use crate::api::Result;
use crate::config::RuntimeConfig;
use crate::repository::{CharacterRepository, InMemoryCharacterRepo};

/// Starter party added when seeding is enabled: (name, class, level).
pub const STARTER_PARTY: [(&str, CharacterClass, i64); 3] = [
    ("Arthas", CharacterClass::Warrior, 5),
    ("Gandalf", CharacterClass::Mage, 10),
    ("Shadow", CharacterClass::Rogue, 7),
];

/// Fewest records a roster must hold before a battle makes sense.
pub const MIN_FIGHTERS: usize = 2;

/// Character roster backed by a [`CharacterRepository`].
pub struct Roster<R = InMemoryCharacterRepo> {
    repo: R,
}

impl Roster {
    /// Create an empty roster backed by memory.
    pub fn new() -> Self {
        Self::with_repository(InMemoryCharacterRepo::new())
    }

    /// Create a new roster builder
    pub fn builder() -> RosterBuilder {
        RosterBuilder::new()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CharacterRepository> Roster<R> {
    pub fn with_repository(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Create a character and return its id.
    ///
    /// The level is clamped and an unknown class falls back to the default
    /// stat curve; neither is an error.
    pub fn create(&self, name: &str, class: CharacterClass, level: i64) -> Result<CharacterId> {
        let record = self.repo.insert(name, class, Level::new(level))?;

        tracing::info!(
            id = %record.id(),
            name = record.name(),
            class = %record.class(),
            level = %record.level(),
            "character created"
        );
        Ok(record.id())
    }

    /// All characters, ordered by id. Empty when the roster is empty.
    pub fn list(&self) -> Result<Vec<CharacterRecord>> {
        let records = self.repo.list()?;
        tracing::debug!(count = records.len(), "listed characters");
        Ok(records)
    }

    pub fn get(&self, id: CharacterId) -> Result<CharacterRecord> {
        tracing::debug!(%id, "looking up character");
        self.repo
            .get(id)
            .inspect_err(|err| tracing::warn!(%id, %err, "lookup failed"))
            .map_err(Into::into)
    }

    /// Apply a partial update; stats follow class and level.
    pub fn update(&self, id: CharacterId, update: &CharacterUpdate) -> Result<CharacterRecord> {
        let record = self
            .repo
            .update(id, update)
            .inspect_err(|err| tracing::warn!(%id, %err, "update failed"))?;

        tracing::info!(
            %id,
            name = record.name(),
            class = %record.class(),
            level = %record.level(),
            health = record.health(),
            "character updated"
        );
        Ok(record)
    }

    /// Remove a character for good. Its id is never handed out again.
    pub fn delete(&self, id: CharacterId) -> Result<CharacterRecord> {
        let record = self
            .repo
            .remove(id)
            .inspect_err(|err| tracing::warn!(%id, %err, "delete failed"))?;

        tracing::info!(%id, name = record.name(), "character deleted");
        Ok(record)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.repo.len()?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.repo.is_empty()?)
    }

    /// Returns true once the roster holds enough characters for a battle.
    pub fn can_battle(&self) -> Result<bool> {
        Ok(self.len()? >= MIN_FIGHTERS)
    }

    /// Battle two stored characters.
    ///
    /// Each record is looked up once and copied into a fighter snapshot; the
    /// store is not modified. The same id may be given twice.
    pub fn battle(
        &self,
        first: CharacterId,
        second: CharacterId,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Result<Matchup> {
        let first = Fighter::from(&self.get(first)?);
        let second = Fighter::from(&self.get(second)?);

        let report = battle(&first, &second, rng);

        for round in &report.rounds {
            tracing::debug!(
                round = round.round,
                first_damage = round.first_damage,
                second_damage = ?round.second_damage,
                first_health = round.first_health,
                second_health = round.second_health,
                "battle round"
            );
        }
        tracing::info!(
            first = %first.name,
            second = %second.name,
            winner = %report.winner_name,
            rounds = report.round_count(),
            "battle finished"
        );
        Ok(Matchup {
            first,
            second,
            report,
        })
    }

    /// Add the starter party and return the new ids in order.
    pub fn seed_starters(&self) -> Result<Vec<CharacterId>> {
        STARTER_PARTY
            .into_iter()
            .map(|(name, class, level)| self.create(name, class, level))
            .collect()
    }
}

/// A finished battle together with the snapshots that fought it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matchup {
    pub first: Fighter,
    pub second: Fighter,
    pub report: BattleReport,
}

impl Matchup {
    /// The fighter that won.
    pub fn winner(&self) -> &Fighter {
        match self.report.winner {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }
}

/// Builder for [`Roster`] with environment-driven configuration.
pub struct RosterBuilder {
    config: RuntimeConfig,
}

impl RosterBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
        }
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the roster and the battle RNG.
    pub fn build(self) -> Result<RosterSetup> {
        let roster = Roster::new();

        if self.config.seed_starters {
            let ids = roster.seed_starters()?;
            tracing::debug!(count = ids.len(), "starter party seeded");
        }

        let seed = self.config.rng_seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, "battle rng seeded");

        Ok(RosterSetup {
            config: self.config,
            roster,
            rng: PcgRng::new(seed),
        })
    }
}

/// Everything a front-end needs to run a session.
pub struct RosterSetup {
    pub config: RuntimeConfig,
    pub roster: Roster,
    pub rng: PcgRng,
}
