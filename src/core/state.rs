//! Live game state.
//!
//! ## Player
//!
//! Per-side progress: score, streak, the current question and whatever
//! the player has typed or selected so far.
//!
//! ## GameState
//!
//! The one live state of a session: both players, rope position, status,
//! winner and round bookkeeping. It is only mutated through the round
//! transitions in `rules::engine`; readers get snapshots through the
//! accessors here (or serde).

use serde::{Deserialize, Serialize};

use super::config::{AnswerMode, GameConfig};
use super::player::{Side, Sides};
use crate::questions::{suggest_difficulty, Difficulty, Question};

/// Lifecycle status of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Created, waiting for an explicit start.
    #[default]
    Waiting,
    /// Rounds in progress.
    Playing,
    /// The rope reached a threshold. Terminal.
    Finished,
}

/// Correctness of a player's latest judged submission this round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Nothing judged yet this round.
    #[default]
    Unknown,
    Correct,
    Incorrect,
}

/// What a player has entered but not yet had judged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum PendingInput {
    /// Free-text mode: the raw text typed so far.
    Text(String),
    /// Multiple-choice mode: the selected option, if any.
    Choice(Option<u32>),
}

impl PendingInput {
    /// Empty input for the given mode.
    #[must_use]
    pub fn empty(mode: AnswerMode) -> Self {
        match mode {
            AnswerMode::FreeText => PendingInput::Text(String::new()),
            AnswerMode::MultipleChoice => PendingInput::Choice(None),
        }
    }

    /// Nothing typed or selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            PendingInput::Text(text) => text.is_empty(),
            PendingInput::Choice(choice) => choice.is_none(),
        }
    }

    /// Mode this input belongs to.
    #[must_use]
    pub fn mode(&self) -> AnswerMode {
        match self {
            PendingInput::Text(_) => AnswerMode::FreeText,
            PendingInput::Choice(_) => AnswerMode::MultipleChoice,
        }
    }
}

/// Intent payload for updating a player's pending input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Submission {
    Text(String),
    Choice(u32),
}

impl Submission {
    /// Mode this payload belongs to.
    #[must_use]
    pub fn mode(&self) -> AnswerMode {
        match self {
            Submission::Text(_) => AnswerMode::FreeText,
            Submission::Choice(_) => AnswerMode::MultipleChoice,
        }
    }
}

/// One of the two players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub(crate) id: Side,
    pub(crate) name: String,
    pub(crate) score: u32,
    pub(crate) current_question: Option<Question>,
    pub(crate) input: PendingInput,
    pub(crate) verdict: Verdict,
    pub(crate) streak: u32,
    pub(crate) attempts: u32,
}

impl Player {
    /// A zeroed player with no question.
    #[must_use]
    pub fn new(id: Side, name: impl Into<String>, mode: AnswerMode) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            current_question: None,
            input: PendingInput::empty(mode),
            verdict: Verdict::Unknown,
            streak: 0,
            attempts: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> Side {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rounds won.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    #[must_use]
    pub fn input(&self) -> &PendingInput {
        &self.input
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Consecutive correct answers.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Judged submissions, right or wrong.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Fraction of judged submissions that were correct, 0 with none.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            f64::from(self.score) / f64::from(self.attempts)
        }
    }

    /// Adaptive tier suggestion from this player's performance.
    #[must_use]
    pub fn suggested_difficulty(&self, current: Difficulty) -> Difficulty {
        suggest_difficulty(current, self.streak, self.score, self.attempts)
    }

    /// Install a new question and clear per-round input.
    pub(crate) fn begin_round(&mut self, question: Question, mode: AnswerMode) {
        self.current_question = Some(question);
        self.input = PendingInput::empty(mode);
        self.verdict = Verdict::Unknown;
    }
}

/// Result summary of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub winner: Side,
    pub winner_name: String,
    pub winner_score: u32,
    pub rounds_played: u32,
    /// Absolute score difference.
    pub margin: u32,
}

/// The live state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) players: Sides<Player>,
    pub(crate) rope_position: i32,
    pub(crate) win_threshold: u32,
    pub(crate) status: GameStatus,
    pub(crate) winner: Option<Side>,
    pub(crate) difficulty: Difficulty,
    pub(crate) answer_mode: AnswerMode,
    pub(crate) round_number: u32,
    pub(crate) round_locked: bool,
}

impl GameState {
    /// A fresh `Waiting` game: zeroed players, centred rope, round 0.
    ///
    /// The config is expected to be validated; blank names fall back to
    /// the defaults.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mode = config.answer_mode;
        Self {
            players: Sides {
                left: Player::new(Side::Left, config.left_name(), mode),
                right: Player::new(Side::Right, config.right_name(), mode),
            },
            rope_position: 0,
            win_threshold: config.win_threshold,
            status: GameStatus::Waiting,
            winner: None,
            difficulty: config.difficulty,
            answer_mode: mode,
            round_number: 0,
            round_locked: false,
        }
    }

    #[must_use]
    pub fn player(&self, side: Side) -> &Player {
        &self.players[side]
    }

    #[must_use]
    pub fn players(&self) -> &Sides<Player> {
        &self.players
    }

    /// Negative favours left, positive favours right.
    #[must_use]
    pub fn rope_position(&self) -> i32 {
        self.rope_position
    }

    #[must_use]
    pub fn win_threshold(&self) -> u32 {
        self.win_threshold
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn answer_mode(&self) -> AnswerMode {
        self.answer_mode
    }

    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    /// True between a scoring answer and the next question pair.
    #[must_use]
    pub fn round_locked(&self) -> bool {
        self.round_locked
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Rope offset from centre as a percentage of half the track,
    /// in `[-50, 50]`.
    #[must_use]
    pub fn rope_offset_percent(&self) -> f64 {
        f64::from(self.rope_position) / f64::from(self.win_threshold) * 50.0
    }

    /// Side that would win at `position`, if any.
    #[must_use]
    pub(crate) fn winner_at(&self, position: i32) -> Option<Side> {
        let (position, threshold) = (i64::from(position), i64::from(self.win_threshold));
        if position <= -threshold {
            Some(Side::Left)
        } else if position >= threshold {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Final result, once the game is finished.
    #[must_use]
    pub fn summary(&self) -> Option<MatchSummary> {
        let winner = self.winner.filter(|_| self.is_finished())?;
        let champion = &self.players[winner];
        Some(MatchSummary {
            winner,
            winner_name: champion.name.clone(),
            winner_score: champion.score,
            rounds_played: self.round_number,
            margin: self.players.left.score.abs_diff(self.players.right.score),
        })
    }
}
