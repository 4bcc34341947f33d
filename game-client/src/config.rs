use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use game_persistence::{DEFAULT_STORAGE_KEY, JsonFileStore};

use crate::catalog::CatalogError;
use crate::pokeapi::{DEFAULT_BASE_URL, PokeApiClient};

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_base_url: String,
    pub catalog_timeout_seconds: u64,
    /// Size of the catalog range used by limit selection and the Pokédex.
    pub catalog_list_limit: u32,
    pub stats_directory: PathBuf,
    pub stats_storage_key: String,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `new` reads the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            catalog_base_url: lookup("CATALOG_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            catalog_timeout_seconds: parsed(&lookup, "CATALOG_TIMEOUT_SECONDS", 10),
            catalog_list_limit: parsed(&lookup, "CATALOG_LIST_LIMIT", 1302),
            stats_directory: lookup("STATS_DIRECTORY")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),
            stats_storage_key: lookup("STATS_STORAGE_KEY")
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
        }
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog_timeout_seconds)
    }

    pub fn catalog_client(&self) -> Result<PokeApiClient, CatalogError> {
        PokeApiClient::new(self.catalog_base_url.clone(), self.catalog_timeout())
    }

    pub fn stats_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.stats_directory, &self.stats_storage_key)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid {} '{}', using the default", key, raw);
            default
        }),
        None => default,
    }
}
