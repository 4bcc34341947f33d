#![allow(dead_code)]

use game_core::{GameSession, ProgressionEngine, RoundEvent, RoundEventHandler};
use game_persistence::MemoryStore;
use game_types::Entity;
use std::sync::{Arc, Mutex};

pub fn entity(name: &str, category: Option<&str>) -> Entity {
    Entity::new(name, category.map(String::from))
}

pub fn mew() -> Entity {
    entity("Mew", Some("psychic"))
}

/// A session over a shared in-memory store, so tests can reload from it.
pub fn create_test_session() -> (GameSession, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let session = GameSession::new(ProgressionEngine::load(store.clone()));
    (session, store)
}

/// Guess every letter of `word` in order.
pub fn guess_word(session: &mut GameSession, word: &str) {
    for ch in word.chars() {
        session.guess_letter(ch);
    }
}

/// Play `entity` to a win by guessing its letters.
pub fn win_round(session: &mut GameSession, entity: Entity) {
    let name = entity.name.clone();
    session.start_round(entity).expect("entity should be playable");
    guess_word(session, &name);
}

/// Play `entity` to a loss with letters absent from its name.
pub fn lose_round(session: &mut GameSession, entity: Entity) {
    let name = entity.name.to_uppercase();
    session.start_round(entity).expect("entity should be playable");
    for ch in ('A'..='Z').filter(|ch| !name.contains(*ch)) {
        if !session.round_state().is_playing() {
            break;
        }
        session.guess_letter(ch);
    }
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<RoundEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<RoundEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn count_matching(&self, check_fn: impl Fn(&RoundEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| check_fn(e)).count()
    }
}

impl RoundEventHandler for EventCollector {
    fn handle_event(&mut self, event: RoundEvent) {
        self.events.lock().unwrap().push(event);
    }
}
