//! Composition of the round and progression engines.
//!
//! The engines never call each other. A session feeds each finished round's
//! outcome to the progression engine exactly once, keyed by the round id, no
//! matter how often the terminal state is observed.

use game_types::{Entity, GameError, RoundId, RoundOutcome, RoundState, XpAward};
use tracing::debug;

use crate::{
    ProgressionEngine, RoundEngine, RoundEvent, RoundEventBus, RoundEventHandler, RoundTransition,
};

/// The effect of one letter on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub transition: RoundTransition,
    /// Set when this guess finished the round and its outcome was recorded.
    pub award: Option<XpAward>,
}

#[derive(Debug)]
pub struct GameSession {
    round: RoundEngine,
    progression: ProgressionEngine,
    event_bus: RoundEventBus,
    recorded_round: Option<RoundId>,
}

impl GameSession {
    pub fn new(progression: ProgressionEngine) -> Self {
        Self {
            round: RoundEngine::new(),
            progression,
            event_bus: RoundEventBus::new(),
            recorded_round: None,
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn RoundEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    pub fn round(&self) -> &RoundEngine {
        &self.round
    }

    pub fn round_state(&self) -> &RoundState {
        self.round.state()
    }

    pub fn progression(&self) -> &ProgressionEngine {
        &self.progression
    }

    pub fn masked_word(&self) -> String {
        self.round.masked_word()
    }

    /// Start a round on `entity`, abandoning any round still in play.
    pub fn start_round(&mut self, entity: Entity) -> Result<RoundId, GameError> {
        self.settle();
        let round_id = self.round.select_entity(entity)?;
        let word_length = self
            .round
            .state()
            .secret_word
            .as_deref()
            .map_or(0, |word| word.chars().count());
        self.event_bus.publish(RoundEvent::RoundStarted {
            round_id,
            word_length,
        });
        Ok(round_id)
    }

    pub fn guess_letter(&mut self, ch: char) -> GuessReport {
        let transition = self.round.guess_letter(ch);
        let Some(round_id) = self.round.state().round_id else {
            return GuessReport { transition, award: None };
        };

        match transition {
            RoundTransition::Revealed { letter, points } => {
                self.event_bus.publish(RoundEvent::LetterRevealed {
                    round_id,
                    letter,
                    points,
                });
            }
            RoundTransition::Missed {
                letter,
                lives_remaining,
            } => {
                self.event_bus.publish(RoundEvent::LetterMissed {
                    round_id,
                    letter,
                    lives_remaining,
                });
            }
            RoundTransition::Won { bonus, .. } => {
                if let Some(outcome) = self.round.outcome() {
                    self.event_bus.publish(RoundEvent::RoundWon { outcome, bonus });
                }
            }
            RoundTransition::Lost { .. } => {
                if let Some(outcome) = self.round.outcome() {
                    self.event_bus.publish(RoundEvent::RoundLost { outcome });
                }
            }
            RoundTransition::Ignored | RoundTransition::Started | RoundTransition::Reset => {}
        }

        let award = if transition.is_terminal() {
            self.settle()
        } else {
            None
        };
        GuessReport { transition, award }
    }

    /// Record the current round's outcome if it is finished and not yet
    /// recorded. Safe to call any number of times.
    pub fn settle(&mut self) -> Option<XpAward> {
        let outcome = self.round.outcome()?;
        if self.recorded_round == Some(outcome.round_id) {
            debug!("Outcome of round {} already recorded", outcome.round_id);
            return None;
        }
        Some(self.record(&outcome))
    }

    /// Idle again for the next entity; the session score is kept.
    pub fn next_round(&mut self) {
        self.settle();
        self.round.next_round();
    }

    /// Full reset of the session, score included. Player stats are kept.
    pub fn restart(&mut self) {
        self.settle();
        self.round.restart();
    }

    pub fn reset_stats(&mut self) {
        self.progression.reset_stats();
        self.event_bus.publish(RoundEvent::StatsReset);
    }

    fn record(&mut self, outcome: &RoundOutcome) -> XpAward {
        self.recorded_round = Some(outcome.round_id);
        let award = self.progression.record_outcome(outcome);
        self.event_bus.publish(RoundEvent::OutcomeRecorded {
            round_id: outcome.round_id,
            award,
        });
        award
    }
}
