use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::stored_stats::{decode, encode};
use crate::{PersistenceError, StatsStore};
use game_types::PlayerStats;

/// Stores the stats blob as `<directory>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(directory: P, key: &str) -> Self {
        Self {
            path: directory.as_ref().join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> Result<Option<PlayerStats>, PersistenceError> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PersistenceError::Unavailable(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };
        decode(&blob).map(Some)
    }

    fn save(&self, stats: &PlayerStats) -> Result<(), PersistenceError> {
        let blob = encode(stats)?;
        let unavailable = |e: std::io::Error| {
            PersistenceError::Unavailable(format!("failed to write {}: {}", self.path.display(), e))
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(unavailable)?;
        }

        // Write beside the target and rename so a crash never leaves half a blob.
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, blob).map_err(unavailable)?;
        fs::rename(&staging, &self.path).map_err(unavailable)?;

        debug!("Saved player stats to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistenceError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::Unavailable(format!(
                "failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
