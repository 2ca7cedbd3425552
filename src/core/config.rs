//! Game configuration.
//!
//! A `GameConfig` is supplied once at setup and retained by the session so
//! "play again" can rebuild an identical game. Every field has a default,
//! so partial TOML files are accepted:
//!
//! ```toml
//! player_left_name = "Ada"
//! difficulty = "hard"
//! win_threshold = 7
//! answer_mode = "multiple_choice"
//! ```

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::questions::Difficulty;

/// Supported win thresholds (rope steps from centre to victory).
pub const WIN_THRESHOLD_RANGE: RangeInclusive<u32> = 3..=10;

const DEFAULT_LEFT_NAME: &str = "Player 1";
const DEFAULT_RIGHT_NAME: &str = "Player 2";

/// How players answer questions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerMode {
    /// Players type the answer.
    #[default]
    FreeText,
    /// Players pick one of three options.
    MultipleChoice,
}

/// Configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Win threshold outside `WIN_THRESHOLD_RANGE`.
    #[display("win threshold {threshold} is outside the supported range 3..=10")]
    WinThreshold { threshold: u32 },
    /// Auto-advance delay of zero.
    #[display("advance delay must be greater than zero")]
    AdvanceDelay,
    /// Config file could not be read.
    #[display("failed to read config file: {message}")]
    Read { message: String },
    /// Config text is not valid TOML for this schema.
    #[display("failed to parse config: {message}")]
    Parse { message: String },
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Display name of the left player.
    pub player_left_name: String,

    /// Display name of the right player.
    pub player_right_name: String,

    /// Difficulty tier for every generated question.
    pub difficulty: Difficulty,

    /// Rope steps needed to win.
    pub win_threshold: u32,

    /// Free-text or multiple-choice answering.
    pub answer_mode: AnswerMode,

    /// Pause between a scored round and the next question pair.
    pub advance_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_left_name: DEFAULT_LEFT_NAME.to_string(),
            player_right_name: DEFAULT_RIGHT_NAME.to_string(),
            difficulty: Difficulty::Easy,
            win_threshold: 5,
            answer_mode: AnswerMode::FreeText,
            advance_delay_ms: 1000,
        }
    }
}

impl GameConfig {
    /// Create a configuration with default settings and the given names.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            player_left_name: left.into(),
            player_right_name: right.into(),
            ..Self::default()
        }
    }

    /// Set the difficulty tier.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the win threshold.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set the answer mode.
    #[must_use]
    pub fn with_answer_mode(mut self, mode: AnswerMode) -> Self {
        self.answer_mode = mode;
        self
    }

    /// Set the auto-advance delay.
    ///
    /// Stored in whole milliseconds; a partial millisecond rounds up, so
    /// only `Duration::ZERO` fails validation.
    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        let partial = u128::from(delay.subsec_nanos() % 1_000_000 != 0);
        self.advance_delay_ms = u64::try_from(delay.as_millis() + partial).unwrap_or(u64::MAX);
        self
    }

    /// Auto-advance delay as a `Duration`.
    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    /// Left player's name, falling back to "Player 1" when blank.
    #[must_use]
    pub fn left_name(&self) -> &str {
        non_blank(&self.player_left_name, DEFAULT_LEFT_NAME)
    }

    /// Right player's name, falling back to "Player 2" when blank.
    #[must_use]
    pub fn right_name(&self) -> &str {
        non_blank(&self.player_right_name, DEFAULT_RIGHT_NAME)
    }

    /// Check the numeric settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !WIN_THRESHOLD_RANGE.contains(&self.win_threshold) {
            return Err(ConfigError::WinThreshold {
                threshold: self.win_threshold,
            });
        }
        if self.advance_delay_ms == 0 {
            return Err(ConfigError::AdvanceDelay);
        }
        Ok(())
    }

    /// Parse and validate a configuration from TOML text.
    #[instrument(skip(text))]
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        debug!(
            difficulty = ?config.difficulty,
            win_threshold = config.win_threshold,
            "Parsed game config"
        );
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Read {
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(
            left = config.left_name(),
            right = config.right_name(),
            "Config loaded successfully"
        );
        Ok(config)
    }
}

fn non_blank<'a>(name: &'a str, fallback: &'a str) -> &'a str {
    if name.trim().is_empty() {
        fallback
    } else {
        name
    }
}
