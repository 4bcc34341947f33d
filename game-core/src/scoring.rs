use game_types::RoundOutcome;

pub struct ScoringEngine;

impl ScoringEngine {
    const BASE_LETTER_POINTS: u32 = 10;

    /// Points for a correct letter. `combo` already counts this letter.
    pub fn letter_points(combo: u32, word_length: usize) -> u32 {
        let length_bonus = (word_length / 3) as u32 * 5;
        (Self::BASE_LETTER_POINTS + length_bonus) * combo.max(1)
    }

    /// One-off bonus on winning, using the combo of the final guess.
    pub fn win_bonus(lives: u32, combo: u32) -> u32 {
        lives * 50 + combo * 20
    }

    /// Longer names are harder to find
    pub fn length_bonus(name: &str) -> u32 {
        match name.chars().count() {
            len if len > 10 => 20,
            len if len > 7 => 10,
            _ => 0,
        }
    }

    /// Experience earned by a finished round
    pub fn xp_for_outcome(outcome: &RoundOutcome) -> u32 {
        if outcome.won {
            50 + outcome.lives_remaining * 5 + Self::length_bonus(&outcome.entity_name)
        } else {
            10
        }
    }
}
