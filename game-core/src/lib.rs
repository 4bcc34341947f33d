pub mod game_events;
pub mod levels;
pub mod progression;
pub mod round;
pub mod scoring;
pub mod session;
pub mod word_validation;

// Re-export main components
pub use game_events::*;
pub use progression::*;
pub use round::*;
pub use scoring::*;
pub use session::*;
pub use word_validation::*;
