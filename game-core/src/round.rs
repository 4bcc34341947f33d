//! The round engine: one guessing round from entity selection to win/loss.
//!
//! Transitions are plain functions from a state to its successor. The
//! [`RoundEngine`] wrapper swaps in the successor only once it is complete.

use std::collections::BTreeSet;

use chrono::Utc;
use game_types::{
    Entity, GameError, INITIAL_LIVES, RoundId, RoundOutcome, RoundState, RoundStatus,
};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::ScoringEngine;
use crate::word_validation::{MASK_GLYPH, canonical_secret, needs_guess, normalize_letter};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("Invalid entity: {0}")]
    InvalidEntity(String),
}

impl From<RoundError> for GameError {
    fn from(err: RoundError) -> Self {
        match err {
            RoundError::InvalidEntity(reason) => GameError::InvalidEntity { reason },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundAction {
    SelectEntity { round_id: RoundId, entity: Entity },
    GuessLetter(char),
    NextRound,
    Restart,
}

/// What a transition did, for feedback and notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum RoundTransition {
    /// Nothing changed: the round is not playing, the input is not a letter,
    /// or the letter was already used.
    Ignored,
    Started,
    Revealed { letter: char, points: u32 },
    Missed { letter: char, lives_remaining: u32 },
    Won { letter: char, points: u32, bonus: u32 },
    Lost { letter: char },
    Reset,
}

impl RoundTransition {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RoundTransition::Won { .. } | RoundTransition::Lost { .. })
    }
}

pub fn reduce(
    state: &RoundState,
    action: RoundAction,
) -> Result<(RoundState, RoundTransition), RoundError> {
    match action {
        RoundAction::SelectEntity { round_id, entity } => {
            start_round(state, round_id, entity).map(|next| (next, RoundTransition::Started))
        }
        RoundAction::GuessLetter(ch) => Ok(guess(state, ch)),
        RoundAction::NextRound => Ok((next_round(state), RoundTransition::Reset)),
        RoundAction::Restart => Ok((RoundState::default(), RoundTransition::Reset)),
    }
}

/// Fresh round for `entity`. Only the cumulative score is carried over.
pub fn start_round(
    state: &RoundState,
    round_id: RoundId,
    entity: Entity,
) -> Result<RoundState, RoundError> {
    let secret = canonical_secret(&entity.name)?;

    Ok(RoundState {
        round_id: Some(round_id),
        entity: Some(entity),
        secret_word: Some(secret),
        status: RoundStatus::Playing,
        cumulative_score: state.cumulative_score,
        ..RoundState::default()
    })
}

pub fn guess(state: &RoundState, ch: char) -> (RoundState, RoundTransition) {
    let ignored = || (state.clone(), RoundTransition::Ignored);

    if state.status != RoundStatus::Playing {
        return ignored();
    }
    let Some(letter) = normalize_letter(ch) else {
        return ignored();
    };
    if state.used_letters.contains(&letter) {
        return ignored();
    }
    let Some(secret) = state.secret_word.as_deref() else {
        return ignored();
    };

    let mut next = state.clone();
    next.used_letters.insert(letter);

    if !secret.contains(letter) {
        next.guessed_incorrect.insert(letter);
        next.lives = next.lives.saturating_sub(1);
        next.combo = 0;
        next.last_score_delta = 0;

        if next.lives == 0 {
            next.status = RoundStatus::Lost;
            return (next, RoundTransition::Lost { letter });
        }
        let lives_remaining = next.lives;
        return (next, RoundTransition::Missed { letter, lives_remaining });
    }

    next.guessed_correct.insert(letter);
    next.combo += 1;
    let points = ScoringEngine::letter_points(next.combo, secret.chars().count());
    next.round_score += points;
    next.cumulative_score += points;
    next.last_score_delta = points;

    if !is_solved(secret, &next.guessed_correct) {
        return (next, RoundTransition::Revealed { letter, points });
    }

    let bonus = ScoringEngine::win_bonus(next.lives, next.combo);
    next.round_score += bonus;
    next.cumulative_score += bonus;
    if bonus > 0 {
        next.last_score_delta = bonus;
    }
    next.status = RoundStatus::Won;
    (next, RoundTransition::Won { letter, points, bonus })
}

/// Back to idle, keeping the session's cumulative score.
pub fn next_round(state: &RoundState) -> RoundState {
    RoundState {
        cumulative_score: state.cumulative_score,
        ..RoundState::default()
    }
}

pub fn is_solved(secret: &str, guessed_correct: &BTreeSet<char>) -> bool {
    secret
        .chars()
        .filter(|ch| needs_guess(*ch))
        .all(|ch| guessed_correct.contains(&ch))
}

/// The secret word as the player sees it, one space between characters.
pub fn masked_word(state: &RoundState) -> String {
    let Some(secret) = state.secret_word.as_deref() else {
        return String::new();
    };

    secret
        .chars()
        .map(|ch| {
            if !needs_guess(ch) || state.guessed_correct.contains(&ch) {
                ch
            } else {
                MASK_GLYPH
            }
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Default)]
pub struct RoundEngine {
    state: RoundState,
    finished_at: Option<String>,
}

impl RoundEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn status(&self) -> RoundStatus {
        self.state.status
    }

    pub fn dispatch(&mut self, action: RoundAction) -> Result<RoundTransition, RoundError> {
        let (next, transition) = reduce(&self.state, action)?;
        self.apply(next, transition);
        Ok(transition)
    }

    pub fn select_entity(&mut self, entity: Entity) -> Result<RoundId, RoundError> {
        let round_id = Uuid::new_v4();
        self.dispatch(RoundAction::SelectEntity { round_id, entity })?;
        Ok(round_id)
    }

    pub fn guess_letter(&mut self, ch: char) -> RoundTransition {
        let (next, transition) = guess(&self.state, ch);
        self.apply(next, transition);
        transition
    }

    pub fn next_round(&mut self) {
        let next = next_round(&self.state);
        self.apply(next, RoundTransition::Reset);
    }

    pub fn restart(&mut self) {
        self.apply(RoundState::default(), RoundTransition::Reset);
    }

    pub fn masked_word(&self) -> String {
        masked_word(&self.state)
    }

    /// The finished round's result; `None` until the round is won or lost.
    /// Polling repeatedly returns the same outcome.
    pub fn outcome(&self) -> Option<RoundOutcome> {
        if !self.state.status.is_terminal() {
            return None;
        }
        let round_id = self.state.round_id?;
        let entity = self.state.entity.as_ref()?;

        Some(RoundOutcome {
            round_id,
            won: self.state.status == RoundStatus::Won,
            entity_name: entity.name.clone(),
            entity_category: entity.category.clone(),
            lives_remaining: self.state.lives,
            occurred_at: self
                .finished_at
                .clone()
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
        })
    }

    fn apply(&mut self, next: RoundState, transition: RoundTransition) {
        match transition {
            RoundTransition::Ignored => return,
            RoundTransition::Started => {
                self.finished_at = None;
                info!(
                    "Round {:?} started ({} characters, {} lives)",
                    next.round_id,
                    next.secret_word.as_deref().map_or(0, |w| w.chars().count()),
                    INITIAL_LIVES
                );
            }
            RoundTransition::Revealed { letter, points } => {
                debug!("Letter {} revealed for {} points (combo {})", letter, points, next.combo);
            }
            RoundTransition::Missed { letter, lives_remaining } => {
                debug!("Letter {} missed, {} lives left", letter, lives_remaining);
            }
            RoundTransition::Won { bonus, .. } => {
                self.finished_at = Some(Utc::now().to_rfc3339());
                info!(
                    "Round {:?} won with {} lives, bonus {}, round score {}",
                    next.round_id, next.lives, bonus, next.round_score
                );
            }
            RoundTransition::Lost { .. } => {
                self.finished_at = Some(Utc::now().to_rfc3339());
                info!("Round {:?} lost", next.round_id);
            }
            RoundTransition::Reset => {
                self.finished_at = None;
            }
        }
        self.state = next;
    }
}
