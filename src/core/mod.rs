//! Core types: sides, RNG, configuration, live game state.

pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{AnswerMode, ConfigError, GameConfig, WIN_THRESHOLD_RANGE};
pub use player::{Side, Sides};
pub use rng::GameRng;
pub use state::{GameState, GameStatus, MatchSummary, PendingInput, Player, Submission, Verdict};
