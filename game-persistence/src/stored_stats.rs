use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::PersistenceError;
use game_types::PlayerStats;

/// On-disk shape of [`PlayerStats`].
///
/// The discovered sets travel as plain string sequences and are rebuilt into
/// sets on the way back in. Field names match the blobs written by the web
/// version of the game, including its legacy set keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredStats {
    pub level: u32,
    #[serde(rename = "currentXP")]
    pub current_xp: u32,
    #[serde(rename = "totalXP")]
    pub total_xp: u32,
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub win_streak: u32,
    pub best_win_streak: u32,
    #[serde(alias = "pokemonFound")]
    pub discovered_entities: Vec<String>,
    #[serde(alias = "typesCompleted")]
    pub discovered_categories: Vec<String>,
}

impl From<&PlayerStats> for StoredStats {
    fn from(stats: &PlayerStats) -> Self {
        Self {
            level: stats.level,
            current_xp: stats.current_xp_in_level,
            total_xp: stats.total_xp,
            games_played: stats.games_played,
            games_won: stats.games_won,
            games_lost: stats.games_lost,
            win_streak: stats.win_streak,
            best_win_streak: stats.best_win_streak,
            discovered_entities: stats.discovered_entities.iter().cloned().collect(),
            discovered_categories: stats.discovered_categories.iter().cloned().collect(),
        }
    }
}

impl From<StoredStats> for PlayerStats {
    fn from(stored: StoredStats) -> Self {
        PlayerStats {
            total_xp: stored.total_xp,
            level: stored.level,
            current_xp_in_level: stored.current_xp,
            games_played: stored.games_played,
            games_won: stored.games_won,
            games_lost: stored.games_lost,
            win_streak: stored.win_streak,
            best_win_streak: stored.best_win_streak,
            discovered_entities: into_key_set(stored.discovered_entities),
            discovered_categories: into_key_set(stored.discovered_categories),
        }
    }
}

fn into_key_set(keys: Vec<String>) -> BTreeSet<String> {
    keys.into_iter()
        .map(|key| key.trim().to_lowercase())
        .filter(|key| !key.is_empty())
        .collect()
}

pub fn encode(stats: &PlayerStats) -> Result<String, PersistenceError> {
    serde_json::to_string(&StoredStats::from(stats))
        .map_err(|e| PersistenceError::Unavailable(format!("failed to encode stats: {}", e)))
}

pub fn decode(blob: &str) -> Result<PlayerStats, PersistenceError> {
    let stored: StoredStats =
        serde_json::from_str(blob).map_err(|e| PersistenceError::Corrupted(e.to_string()))?;
    Ok(stored.into())
}
