//! Session management.
//!
//! A `GameSession` is the explicit owner of one game at a time. The
//! presentation layer dispatches intents into it and reads the resulting
//! state back; the session never calls out.

mod game_session;
pub mod timer;

pub use game_session::GameSession;
pub use timer::AdvanceTimer;
