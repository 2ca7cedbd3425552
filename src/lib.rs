//! # math-tug
//!
//! Game engine for a two-player, same-device arithmetic "tug of war".
//! Each player answers their own question; a correct answer pulls the rope
//! one step toward that player, and the first to pull it to the win
//! threshold wins.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine owns all game state and exposes
//!    intents (start, type, submit, select, advance, reset, restart). A UI
//!    reads state snapshots back; the engine never calls out.
//!
//! 2. **Deterministic**: Questions come from a seeded ChaCha8 stream and
//!    time is a logical clock, so whole sessions replay exactly.
//!
//! 3. **No-ops Over Errors**: Intents that do not apply leave the state
//!    untouched. Only configuration can fail.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration, live game state
//! - `questions`: operations, difficulty tiers, question generation
//! - `rules`: answer validation and round transitions
//! - `session`: session handle and the automatic round-advance timer

pub mod core;
pub mod questions;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    AnswerMode, ConfigError, GameConfig, GameRng, GameState, GameStatus, MatchSummary,
    PendingInput, Player, Side, Sides, Submission, Verdict,
};

pub use crate::questions::{
    suggest_difficulty, Difficulty, DifficultyProfile, Operation, Question, QuestionGenerator,
    QuestionId,
};

pub use crate::rules::SubmitOutcome;

pub use crate::session::{AdvanceTimer, GameSession};
