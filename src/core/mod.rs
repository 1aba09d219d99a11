//! Core business logic modules

pub mod suggestion;

// Re-export commonly used types
pub use suggestion::{suggest, suggest_for, Suggestion, WIN_MARGIN};
