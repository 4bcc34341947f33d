//! The progression engine: durable player statistics fed by round outcomes.

use game_persistence::{PersistenceError, StatsStore};
use game_types::{GameError, LevelTier, PlayerStats, RoundOutcome, XpAward};
use tracing::{info, warn};

use crate::{ScoringEngine, levels};

/// Recompute the level fields from `total_xp`, whatever they said before.
pub fn heal(mut stats: PlayerStats) -> PlayerStats {
    stats.level = levels::level_for_xp(stats.total_xp);
    stats.current_xp_in_level = levels::xp_into_level(stats.total_xp, stats.level);
    stats
}

/// Fold one outcome into the stats.
pub fn apply_outcome(stats: &PlayerStats, outcome: &RoundOutcome) -> (PlayerStats, XpAward) {
    let xp_gained = ScoringEngine::xp_for_outcome(outcome);
    let previous_level = stats.level;

    let mut next = stats.clone();
    next.total_xp = stats.total_xp.saturating_add(xp_gained);
    next = heal(next);

    next.games_played += 1;
    if outcome.won {
        next.games_won += 1;
        next.win_streak += 1;
    } else {
        next.games_lost += 1;
        next.win_streak = 0;
    }
    next.best_win_streak = next.best_win_streak.max(next.win_streak);

    next.discovered_entities.insert(outcome.entity_name.to_lowercase());
    if let Some(category) = outcome.entity_category.as_deref() {
        next.discovered_categories.insert(category.to_lowercase());
    }

    let award = XpAward {
        xp_gained,
        previous_level,
        new_level: next.level,
        leveled_up: next.level > previous_level,
    };
    (next, award)
}

pub struct ProgressionEngine {
    stats: PlayerStats,
    store: Box<dyn StatsStore>,
    persistent: bool,
    storage_error: Option<GameError>,
}

impl ProgressionEngine {
    /// Load stats from `store`. Missing or corrupted records start from the
    /// defaults; an unreachable store leaves the session in memory only.
    pub fn load(store: impl StatsStore + 'static) -> Self {
        let mut engine = Self {
            stats: PlayerStats::default(),
            store: Box::new(store),
            persistent: true,
            storage_error: None,
        };

        match engine.store.load() {
            Ok(Some(stored)) => {
                let healed = heal(stored.clone());
                if healed.level != stored.level
                    || healed.current_xp_in_level != stored.current_xp_in_level
                {
                    warn!(
                        "Stored level {} did not match {} xp, recomputed as level {}",
                        stored.level, stored.total_xp, healed.level
                    );
                }
                engine.stats = healed;
            }
            Ok(None) => {}
            Err(PersistenceError::Corrupted(reason)) => {
                warn!("Ignoring corrupted player stats: {}", reason);
            }
            Err(err) => engine.degrade(err),
        }

        info!(
            "Player stats loaded: level {}, {} xp, {} games",
            engine.stats.level, engine.stats.total_xp, engine.stats.games_played
        );
        engine
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Whether changes still reach the store.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn storage_error(&self) -> Option<&GameError> {
        self.storage_error.as_ref()
    }

    pub fn record_outcome(&mut self, outcome: &RoundOutcome) -> XpAward {
        let (next, award) = apply_outcome(&self.stats, outcome);
        self.stats = next;
        self.persist();

        info!(
            "Recorded {} of {}: +{} xp, {} total",
            if outcome.won { "win" } else { "loss" },
            outcome.entity_name,
            award.xp_gained,
            self.stats.total_xp
        );
        if award.leveled_up {
            info!(
                "Level up: {} -> {} ({})",
                award.previous_level,
                award.new_level,
                self.current_tier().display_name
            );
        }
        award
    }

    /// Back to defaults, removing the stored record entirely.
    ///
    /// The clear is attempted even after an earlier write failure, so an old
    /// record cannot come back on the next load.
    pub fn reset_stats(&mut self) {
        self.stats = PlayerStats::default();
        if let Err(err) = self.store.clear() {
            self.degrade(err);
        }
        info!("Player stats reset");
    }

    pub fn current_tier(&self) -> &'static LevelTier {
        levels::tier_for_level(self.stats.level).unwrap_or_else(|| levels::tier_for_xp(0))
    }

    pub fn next_tier(&self) -> Option<&'static LevelTier> {
        levels::next_tier(self.stats.level)
    }

    pub fn progress_percent(&self) -> f64 {
        levels::progress_percent(self.stats.level, self.stats.current_xp_in_level)
    }

    fn persist(&mut self) {
        if !self.persistent {
            return;
        }
        if let Err(err) = self.store.save(&self.stats) {
            self.degrade(err);
        }
    }

    fn degrade(&mut self, err: PersistenceError) {
        warn!("Player stats storage unavailable, keeping stats in memory: {}", err);
        self.persistent = false;
        self.storage_error = Some(err.into());
    }
}

impl std::fmt::Debug for ProgressionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressionEngine")
            .field("stats", &self.stats)
            .field("persistent", &self.persistent)
            .finish()
    }
}
