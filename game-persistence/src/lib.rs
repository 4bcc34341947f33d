pub mod file_store;
pub mod memory_store;
pub mod stored_stats;

pub use file_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use stored_stats::StoredStats;

use game_types::{GameError, PlayerStats};

/// Storage key used when the embedding layer does not pick one.
pub const DEFAULT_STORAGE_KEY: &str = "pendu_pokemon_stats";

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Stored stats are corrupted: {0}")]
    Corrupted(String),
}

impl From<PersistenceError> for GameError {
    fn from(err: PersistenceError) -> Self {
        GameError::PersistenceUnavailable {
            message: err.to_string(),
        }
    }
}

/// A single-record blob store for player statistics.
///
/// Writes complete (or fail) before returning. There is only ever one writer,
/// so the last write wins.
pub trait StatsStore: Send {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<PlayerStats>, PersistenceError>;
    fn save(&self, stats: &PlayerStats) -> Result<(), PersistenceError>;
    /// Remove the record entirely. Clearing an empty store is not an error.
    fn clear(&self) -> Result<(), PersistenceError>;
}

impl<T: StatsStore + Sync> StatsStore for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<PlayerStats>, PersistenceError> {
        (**self).load()
    }

    fn save(&self, stats: &PlayerStats) -> Result<(), PersistenceError> {
        (**self).save(stats)
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        (**self).clear()
    }
}
