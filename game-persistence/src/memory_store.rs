use std::sync::Mutex;

use crate::stored_stats::{decode, encode};
use crate::{PersistenceError, StatsStore};
use game_types::PlayerStats;

/// Keeps the encoded blob in memory. Used for tests and for sessions that
/// have no writable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with a raw blob, which need not be valid.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
            unavailable: false,
        }
    }

    /// A store that rejects every operation.
    pub fn unavailable() -> Self {
        Self {
            blob: Mutex::new(None),
            unavailable: true,
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.blob.lock().ok().and_then(|blob| blob.clone())
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, PersistenceError> {
        if self.unavailable {
            return Err(PersistenceError::Unavailable(
                "memory store disabled".to_string(),
            ));
        }
        self.blob
            .lock()
            .map_err(|_| PersistenceError::Unavailable("memory store poisoned".to_string()))
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Result<Option<PlayerStats>, PersistenceError> {
        match self.slot()?.as_deref() {
            Some(blob) => decode(blob).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, stats: &PlayerStats) -> Result<(), PersistenceError> {
        let blob = encode(stats)?;
        *self.slot()? = Some(blob);
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        *self.slot()? = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_loads_nothing() {
        let store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();
        let mut stats = PlayerStats::default();
        stats.games_played = 2;
        stats.games_won = 2;

        store.save(&stats).unwrap();
        assert_eq!(store.load().unwrap(), Some(stats));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_unavailable_store() {
        let store = MemoryStore::unavailable();
        assert!(matches!(store.load(), Err(PersistenceError::Unavailable(_))));
        assert!(matches!(
            store.save(&PlayerStats::default()),
            Err(PersistenceError::Unavailable(_))
        ));
        assert!(matches!(store.clear(), Err(PersistenceError::Unavailable(_))));
    }
}
