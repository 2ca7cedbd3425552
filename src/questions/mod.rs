//! Arithmetic questions: operations, difficulty tiers, generation.
//!
//! Every tier and operation is statically defined, so generation has no
//! error path.

pub mod difficulty;
pub mod generator;
pub mod operation;
pub mod question;

pub use difficulty::{suggest_difficulty, Difficulty, DifficultyProfile};
pub use generator::QuestionGenerator;
pub use operation::Operation;
pub use question::{Question, QuestionId};
