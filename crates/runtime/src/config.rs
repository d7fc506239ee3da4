//! Runtime configuration structures and loaders.
use std::env;

/// Configuration used to bootstrap a roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Pre-populate the store with the starter party.
    pub seed_starters: bool,
    /// Fixed battle RNG seed; `None` draws one from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed_starters: true,
            rng_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROSTER_SEED_STARTERS` - Add the starter party on startup (default: true)
    /// - `ROSTER_RNG_SEED` - Battle RNG seed for reproducible fights (default: random)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env_bool("ROSTER_SEED_STARTERS") {
            config.seed_starters = seed;
        }

        config.rng_seed = read_env::<u64>("ROSTER_RNG_SEED");

        config
    }

    #[must_use]
    pub fn with_seed_starters(mut self, seed_starters: bool) -> Self {
        self.seed_starters = seed_starters;
        self
    }

    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
