use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

pub type RoundId = Uuid;

/// Lives granted at the start of every round.
pub const INITIAL_LIVES: u32 = 7;

/// The creature being guessed, as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Entity {
    pub name: String,
    pub category: Option<String>,
    pub image_url: Option<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>, category: Option<String>) -> Self {
        Self {
            name: name.into(),
            category,
            image_url: None,
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RoundStatus {
    #[default]
    Idle,
    Playing,
    Won,
    Lost,
}

impl RoundStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundStatus::Won | RoundStatus::Lost)
    }
}

/// Everything the UI needs to draw one round. Owned by the round engine and
/// only ever replaced wholesale by a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundState {
    pub round_id: Option<RoundId>,
    pub entity: Option<Entity>,
    /// Canonical upper-case word; `None` while idle.
    pub secret_word: Option<String>,
    pub guessed_correct: BTreeSet<char>,
    pub guessed_incorrect: BTreeSet<char>,
    pub used_letters: BTreeSet<char>,
    pub lives: u32,
    pub status: RoundStatus,
    pub round_score: u32,
    pub cumulative_score: u32,
    pub combo: u32,
    pub last_score_delta: u32,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            round_id: None,
            entity: None,
            secret_word: None,
            guessed_correct: BTreeSet::new(),
            guessed_incorrect: BTreeSet::new(),
            used_letters: BTreeSet::new(),
            lives: INITIAL_LIVES,
            status: RoundStatus::Idle,
            round_score: 0,
            cumulative_score: 0,
            combo: 0,
            last_score_delta: 0,
        }
    }
}

impl RoundState {
    pub fn is_playing(&self) -> bool {
        self.status == RoundStatus::Playing
    }
}

/// Result of a finished round, the only input the progression engine accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundOutcome {
    pub round_id: RoundId,
    pub won: bool,
    pub entity_name: String,
    pub entity_category: Option<String>,
    pub lives_remaining: u32,
    pub occurred_at: String, // ISO 8601 string
}
