//! Game rules: answer validation and round transitions.
//!
//! The transitions call into the question generator and the validator but
//! never into whatever presents the game.

pub mod engine;
pub mod validator;

pub use engine::SubmitOutcome;
pub use validator::{is_acceptable_text, validate, validate_choice, validate_text};
