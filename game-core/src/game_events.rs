use game_types::{RoundId, RoundOutcome, XpAward};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RoundEvent {
    RoundStarted {
        round_id: RoundId,
        word_length: usize,
    },
    LetterRevealed {
        round_id: RoundId,
        letter: char,
        points: u32,
    },
    LetterMissed {
        round_id: RoundId,
        letter: char,
        lives_remaining: u32,
    },
    RoundWon {
        outcome: RoundOutcome,
        bonus: u32,
    },
    RoundLost {
        outcome: RoundOutcome,
    },
    OutcomeRecorded {
        round_id: RoundId,
        award: XpAward,
    },
    StatsReset,
}

impl RoundEvent {
    pub fn round_id(&self) -> Option<RoundId> {
        match self {
            RoundEvent::RoundStarted { round_id, .. } => Some(*round_id),
            RoundEvent::LetterRevealed { round_id, .. } => Some(*round_id),
            RoundEvent::LetterMissed { round_id, .. } => Some(*round_id),
            RoundEvent::RoundWon { outcome, .. } => Some(outcome.round_id),
            RoundEvent::RoundLost { outcome } => Some(outcome.round_id),
            RoundEvent::OutcomeRecorded { round_id, .. } => Some(*round_id),
            RoundEvent::StatsReset => None,
        }
    }
}

/// Event handler trait for reacting to round events
pub trait RoundEventHandler: Send {
    fn handle_event(&mut self, event: RoundEvent);
}

/// Simple event bus for distributing round events
pub struct RoundEventBus {
    handlers: Vec<Box<dyn RoundEventHandler>>,
}

impl RoundEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn RoundEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: RoundEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl std::fmt::Debug for RoundEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundEventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

impl Default for RoundEventBus {
    fn default() -> Self {
        Self::new()
    }
}
