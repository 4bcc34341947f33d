pub mod catalog;
pub mod errors;
pub mod progression;
pub mod round;

// Re-export all types
pub use catalog::*;
pub use errors::*;
pub use progression::*;
pub use round::*;
