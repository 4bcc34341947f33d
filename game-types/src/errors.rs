use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Errors surfaced to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum GameError {
    #[error("Invalid entity: {reason}")]
    InvalidEntity { reason: String },
    #[error("Catalog fetch failed: {message}")]
    FetchFailed { message: String },
    #[error("Stats storage unavailable: {message}")]
    PersistenceUnavailable { message: String },
}

impl GameError {
    /// Whether the UI should offer a retry affordance.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GameError::FetchFailed { .. })
    }
}
