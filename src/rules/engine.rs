//! Round transitions.
//!
//! ```text
//! Waiting --start--> Playing(unlocked)
//! Playing(unlocked) --wrong answer--> Playing(unlocked)
//! Playing(unlocked) --correct, no win--> Playing(locked)
//! Playing(unlocked) --correct, win--> Finished(locked)
//! Playing(locked) --advance_round--> Playing(unlocked)
//! ```
//!
//! Every transition is a synchronous read-modify-write on one `GameState`.
//! Calls that do not apply in the current state leave it untouched and
//! report that through their return value.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::validator;
use crate::core::{GameState, GameStatus, PendingInput, Side, Submission, Verdict};
use crate::questions::QuestionGenerator;

/// Result of judging a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Not judged; the state is unchanged.
    Ignored,
    /// Wrong answer: streak reset, round still open.
    Incorrect,
    /// Correct answer: round locked, rope moved.
    Scored {
        rope_position: i32,
        winner: Option<Side>,
    },
}

impl SubmitOutcome {
    /// Did this submission win the round?
    #[must_use]
    pub fn is_scored(self) -> bool {
        matches!(self, SubmitOutcome::Scored { .. })
    }
}

impl GameState {
    /// Begin play: first question pair, round 1.
    ///
    /// Returns `false` unless the game is waiting.
    pub fn start(&mut self, questions: &mut QuestionGenerator) -> bool {
        if self.status != GameStatus::Waiting {
            trace!(status = ?self.status, "Ignoring start");
            return false;
        }

        self.deal(questions);
        self.status = GameStatus::Playing;
        self.round_number = 1;
        self.round_locked = false;

        info!(difficulty = %self.difficulty, threshold = self.win_threshold, "Game started");
        true
    }

    /// Replace a player's pending input without judging it.
    ///
    /// Ignored outside play, for payloads of the other answer mode, for
    /// free text that is not an optional minus followed by digits, and for
    /// choices that are not among the current options.
    pub fn update_submission(&mut self, side: Side, submission: Submission) -> bool {
        if self.status != GameStatus::Playing || submission.mode() != self.answer_mode {
            trace!(%side, "Ignoring input update");
            return false;
        }

        let player = &mut self.players[side];
        match submission {
            Submission::Text(text) => {
                if !validator::is_acceptable_text(&text) {
                    trace!(%side, "Rejecting malformed input");
                    return false;
                }
                player.input = PendingInput::Text(text);
            }
            Submission::Choice(option) => {
                let offered = player
                    .current_question
                    .as_ref()
                    .is_some_and(|q| q.has_option(option));
                if !offered {
                    trace!(%side, option, "Rejecting unknown option");
                    return false;
                }
                player.input = PendingInput::Choice(Some(option));
            }
        }
        true
    }

    /// Judge a player's pending input against their current question.
    ///
    /// The first correct answer of a round scores and locks the round, so
    /// a later correct answer from the other player is ignored.
    pub fn submit(&mut self, side: Side) -> SubmitOutcome {
        if self.status != GameStatus::Playing || self.round_locked {
            trace!(%side, status = ?self.status, locked = self.round_locked, "Ignoring submit");
            return SubmitOutcome::Ignored;
        }

        let player = &self.players[side];
        let Some(question) = player.current_question.as_ref() else {
            return SubmitOutcome::Ignored;
        };
        if player.input.is_empty() {
            return SubmitOutcome::Ignored;
        }

        if !validator::validate(question, &player.input) {
            let player = &mut self.players[side];
            player.verdict = Verdict::Incorrect;
            player.streak = 0;
            player.attempts += 1;
            debug!(%side, round = self.round_number, "Wrong answer");
            return SubmitOutcome::Incorrect;
        }

        let position = self.rope_position.saturating_add(side.pull());
        let winner = self.winner_at(position);

        self.round_locked = true;
        self.rope_position = position;
        if winner.is_some() {
            self.status = GameStatus::Finished;
            self.winner = winner;
        }

        let player = &mut self.players[side];
        player.verdict = Verdict::Correct;
        player.score += 1;
        player.streak += 1;
        player.attempts += 1;

        info!(
            %side,
            round = self.round_number,
            rope = position,
            score = player.score,
            "Round won"
        );
        if let Some(winner) = winner {
            info!(%winner, rounds = self.round_number, "Game finished");
        }

        SubmitOutcome::Scored {
            rope_position: position,
            winner,
        }
    }

    /// Select an option and submit it in one step (multiple-choice only).
    pub fn select_option(&mut self, side: Side, option: u32) -> SubmitOutcome {
        if self.round_locked || !self.update_submission(side, Submission::Choice(option)) {
            return SubmitOutcome::Ignored;
        }
        self.submit(side)
    }

    /// Deal the next question pair and unlock the round.
    ///
    /// Returns `false` once the game is finished.
    pub fn advance_round(&mut self, questions: &mut QuestionGenerator) -> bool {
        if self.status == GameStatus::Finished {
            trace!("Ignoring advance on finished game");
            return false;
        }

        self.deal(questions);
        self.round_number += 1;
        self.round_locked = false;

        debug!(round = self.round_number, "Advanced round");
        true
    }

    fn deal(&mut self, questions: &mut QuestionGenerator) {
        let mode = self.answer_mode;
        let (left, right) = questions.generate_pair(self.difficulty, mode);
        self.players.left.begin_round(left, mode);
        self.players.right.begin_round(right, mode);
    }
}
