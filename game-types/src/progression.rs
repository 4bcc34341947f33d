use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named level band. Thresholds are inclusive lower bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelTier {
    pub level: u32,
    pub display_name: &'static str,
    pub xp_threshold: u32,
    pub color: &'static str,
}

pub static LEVEL_TIERS: [LevelTier; 10] = [
    LevelTier { level: 1, display_name: "Débutant", xp_threshold: 0, color: "#94a3b8" },
    LevelTier { level: 2, display_name: "Apprenti", xp_threshold: 100, color: "#60a5fa" },
    LevelTier { level: 3, display_name: "Dresseur", xp_threshold: 300, color: "#34d399" },
    LevelTier { level: 4, display_name: "Expert", xp_threshold: 600, color: "#fbbf24" },
    LevelTier { level: 5, display_name: "Maître", xp_threshold: 1000, color: "#f87171" },
    LevelTier { level: 6, display_name: "Légende", xp_threshold: 1500, color: "#a78bfa" },
    LevelTier { level: 7, display_name: "Champion", xp_threshold: 2200, color: "#ec4899" },
    LevelTier { level: 8, display_name: "Élite", xp_threshold: 3000, color: "#06b6d4" },
    LevelTier { level: 9, display_name: "Mythique", xp_threshold: 4000, color: "#f59e0b" },
    LevelTier { level: 10, display_name: "Immortel", xp_threshold: 5000, color: "#ef4444" },
];

/// Durable player statistics.
///
/// `level` and `current_xp_in_level` are derived from `total_xp`; whoever
/// loads a stored copy must recompute them rather than trust them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayerStats {
    pub total_xp: u32,
    pub level: u32,
    pub current_xp_in_level: u32,
    pub games_played: u32,
    pub games_won: u32,
    pub games_lost: u32,
    pub win_streak: u32,
    pub best_win_streak: u32,
    /// Lower-cased entity names.
    pub discovered_entities: BTreeSet<String>,
    /// Lower-cased category names.
    pub discovered_categories: BTreeSet<String>,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            total_xp: 0,
            level: 1,
            current_xp_in_level: 0,
            games_played: 0,
            games_won: 0,
            games_lost: 0,
            win_streak: 0,
            best_win_streak: 0,
            discovered_entities: BTreeSet::new(),
            discovered_categories: BTreeSet::new(),
        }
    }
}

impl PlayerStats {
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.games_won) / f64::from(self.games_played) * 100.0
    }
}

/// What a single recorded outcome was worth, for the end-of-round modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct XpAward {
    pub xp_gained: u32,
    pub previous_level: u32,
    pub new_level: u32,
    pub leveled_up: bool,
}
