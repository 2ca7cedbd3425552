//! Session handle: the live game (or none) plus everything needed to drive it.

use std::time::Duration;
use tracing::{debug, info, instrument, trace};

use super::timer::AdvanceTimer;
use crate::core::{ConfigError, GameConfig, GameRng, GameState, GameStatus, Side, Submission};
use crate::questions::QuestionGenerator;
use crate::rules::SubmitOutcome;

/// Owns one session's game state and drives it.
///
/// Holds at most one live `GameState`, the last accepted `GameConfig` (for
/// `restart`), the question generator, a logical clock, and the pending
/// automatic round advance.
///
/// ```
/// use math_tug::{GameConfig, GameSession, GameStatus, Side, Submission};
/// use std::time::Duration;
///
/// let mut session = GameSession::seeded(7);
/// session.initialize(GameConfig::new("Ada", "Grace")).unwrap();
/// session.start();
///
/// let answer = session.state().unwrap().player(Side::Left)
///     .current_question().unwrap().answer();
/// session.update_submission(Side::Left, Submission::Text(answer.to_string()));
/// assert!(session.submit(Side::Left).is_scored());
///
/// // The next question pair arrives after the advance delay.
/// assert!(session.tick(Duration::from_secs(1)));
/// assert_eq!(session.state().unwrap().round_number(), 2);
/// # assert_eq!(session.state().unwrap().status(), GameStatus::Playing);
/// ```
#[derive(Debug)]
pub struct GameSession {
    state: Option<GameState>,
    config: GameConfig,
    questions: QuestionGenerator,
    timer: AdvanceTimer,
    clock: Duration,
}

impl GameSession {
    /// A session with no game, drawing questions from `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            state: None,
            config: GameConfig::default(),
            questions: QuestionGenerator::new(rng),
            timer: AdvanceTimer::new(),
            clock: Duration::ZERO,
        }
    }

    /// A reproducible session.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// A session seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// The live game, if any.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// The retained configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Logical time elapsed in this session.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Time until the pending automatic advance, if one is scheduled.
    #[must_use]
    pub fn pending_advance(&self) -> Option<Duration> {
        self.timer.remaining(self.clock)
    }

    /// Replace the live game with a fresh `Waiting` one built from `config`.
    ///
    /// The config is retained for `restart` only if it is valid; on error
    /// the session is left as it was.
    #[instrument(skip(self, config), fields(difficulty = %config.difficulty, threshold = config.win_threshold))]
    pub fn initialize(&mut self, config: GameConfig) -> Result<&GameState, ConfigError> {
        config.validate()?;
        self.cancel_advance();
        self.config = config;
        info!(
            left = self.config.left_name(),
            right = self.config.right_name(),
            mode = ?self.config.answer_mode,
            "Game initialized"
        );
        Ok(&*self.state.insert(GameState::new(&self.config)))
    }

    /// Start the waiting game. No-op without a live game.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> bool {
        match self.state.as_mut() {
            Some(state) => state.start(&mut self.questions),
            None => {
                trace!("No live game to start");
                false
            }
        }
    }

    /// Replace a player's pending input.
    pub fn update_submission(&mut self, side: Side, submission: Submission) -> bool {
        self.state
            .as_mut()
            .is_some_and(|state| state.update_submission(side, submission))
    }

    /// Judge a player's pending input.
    #[instrument(skip(self))]
    pub fn submit(&mut self, side: Side) -> SubmitOutcome {
        let outcome = match self.state.as_mut() {
            Some(state) => state.submit(side),
            None => SubmitOutcome::Ignored,
        };
        self.after_submit(outcome);
        outcome
    }

    /// Pick an option and submit it (multiple-choice games).
    #[instrument(skip(self))]
    pub fn select_option(&mut self, side: Side, option: u32) -> SubmitOutcome {
        let outcome = match self.state.as_mut() {
            Some(state) => state.select_option(side, option),
            None => SubmitOutcome::Ignored,
        };
        self.after_submit(outcome);
        outcome
    }

    /// Deal the next round now, cancelling any pending automatic advance.
    #[instrument(skip(self))]
    pub fn advance_round(&mut self) -> bool {
        self.cancel_advance();
        match self.state.as_mut() {
            Some(state) => state.advance_round(&mut self.questions),
            None => false,
        }
    }

    /// Discard the live game, returning to setup.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cancel_advance();
        if self.state.take().is_some() {
            info!("Game discarded");
        }
    }

    /// Rebuild a fresh `Waiting` game from the retained configuration.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> &GameState {
        self.cancel_advance();
        info!(threshold = self.config.win_threshold, "Restarting with retained config");
        self.state.insert(GameState::new(&self.config))
    }

    /// Advance the logical clock, firing the automatic advance when due.
    ///
    /// Returns `true` if a new round was dealt. A due advance is dropped if
    /// the game has since moved on (finished, reset, or a different round).
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        self.clock = self.clock.saturating_add(elapsed);

        let Some(round) = self.timer.poll(self.clock) else {
            return false;
        };

        match self.state.as_mut() {
            Some(state)
                if state.status() == GameStatus::Playing
                    && state.round_locked()
                    && state.round_number() == round =>
            {
                debug!(round, "Automatic advance");
                state.advance_round(&mut self.questions)
            }
            _ => {
                trace!(round, "Dropping stale advance");
                false
            }
        }
    }

    fn after_submit(&mut self, outcome: SubmitOutcome) {
        let SubmitOutcome::Scored { winner, .. } = outcome else {
            return;
        };
        let round = match (winner, self.state.as_ref()) {
            (None, Some(state)) => Some(state.round_number()),
            _ => None,
        };
        match round {
            Some(round) => {
                let delay = self.config.advance_delay();
                self.timer.schedule(self.clock, delay, round);
                trace!(?delay, round, "Scheduled automatic advance");
            }
            None => self.cancel_advance(),
        }
    }

    fn cancel_advance(&mut self) {
        if self.timer.cancel() {
            trace!("Cancelled pending advance");
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnswerMode;

    fn answer(session: &GameSession, side: Side) -> u32 {
        session
            .state()
            .unwrap()
            .player(side)
            .current_question()
            .unwrap()
            .answer()
    }

    fn score(session: &mut GameSession, side: Side) -> SubmitOutcome {
        let value = answer(session, side);
        session.update_submission(side, Submission::Text(value.to_string()));
        session.submit(side)
    }

    #[test]
    fn test_no_session_is_inert() {
        let mut session = GameSession::seeded(1);

        assert!(!session.start());
        assert!(!session.update_submission(Side::Left, Submission::Text("1".into())));
        assert_eq!(session.submit(Side::Left), SubmitOutcome::Ignored);
        assert_eq!(session.select_option(Side::Left, 1), SubmitOutcome::Ignored);
        assert!(!session.advance_round());
        assert!(!session.tick(Duration::from_secs(5)));
        assert!(session.state().is_none());
    }

    #[test]
    fn test_invalid_config_keeps_session() {
        let mut session = GameSession::seeded(2);
        session.initialize(GameConfig::new("A", "B").with_win_threshold(4)).unwrap();

        let err = session
            .initialize(GameConfig::default().with_win_threshold(1))
            .unwrap_err();

        assert_eq!(err, ConfigError::WinThreshold { threshold: 1 });
        assert_eq!(session.config().win_threshold, 4);
        assert_eq!(session.state().unwrap().win_threshold(), 4);
    }

    #[test]
    fn test_restart_before_initialize_uses_defaults() {
        let mut session = GameSession::seeded(3);
        let state = session.restart();

        assert_eq!(state.status(), GameStatus::Waiting);
        assert_eq!(state.win_threshold(), 5);
        assert_eq!(state.player(Side::Left).name(), "Player 1");
    }

    #[test]
    fn test_score_schedules_advance() {
        let mut session = GameSession::seeded(4);
        session
            .initialize(GameConfig::default().with_advance_delay(Duration::from_millis(1500)))
            .unwrap();
        session.start();

        assert!(score(&mut session, Side::Left).is_scored());
        assert_eq!(session.pending_advance(), Some(Duration::from_millis(1500)));

        assert!(!session.tick(Duration::from_millis(1000)));
        assert_eq!(session.pending_advance(), Some(Duration::from_millis(500)));
        assert!(session.tick(Duration::from_millis(500)));

        let state = session.state().unwrap();
        assert_eq!(state.round_number(), 2);
        assert!(!state.round_locked());
        assert_eq!(session.pending_advance(), None);
    }

    #[test]
    fn test_wrong_answer_schedules_nothing() {
        let mut session = GameSession::seeded(5);
        session.initialize(GameConfig::default()).unwrap();
        session.start();

        let wrong = answer(&session, Side::Right) + 1;
        session.update_submission(Side::Right, Submission::Text(wrong.to_string()));

        assert_eq!(session.submit(Side::Right), SubmitOutcome::Incorrect);
        assert_eq!(session.pending_advance(), None);
    }

    #[test]
    fn test_manual_advance_cancels_timer() {
        let mut session = GameSession::seeded(6);
        session.initialize(GameConfig::default()).unwrap();
        session.start();
        score(&mut session, Side::Left);

        assert!(session.advance_round());
        assert_eq!(session.pending_advance(), None);
        assert!(!session.tick(Duration::from_secs(10)));
        assert_eq!(session.state().unwrap().round_number(), 2);
    }

    #[test]
    fn test_reset_cancels_timer() {
        let mut session = GameSession::seeded(7);
        session.initialize(GameConfig::default()).unwrap();
        session.start();
        score(&mut session, Side::Left);

        session.reset();

        assert!(session.state().is_none());
        assert_eq!(session.pending_advance(), None);
        assert!(!session.tick(Duration::from_secs(10)));
    }

    #[test]
    fn test_clock_saturates() {
        let mut session = GameSession::seeded(9);
        session.initialize(GameConfig::default()).unwrap();
        session.start();
        score(&mut session, Side::Left);

        assert!(session.tick(Duration::MAX));
        assert!(!session.tick(Duration::MAX));
        assert!(!session.tick(Duration::from_nanos(1)));
        assert_eq!(session.clock(), Duration::MAX);
        assert_eq!(session.state().unwrap().round_number(), 2);

        // Scheduling at the end of time still fires.
        score(&mut session, Side::Right);
        assert_eq!(session.pending_advance(), Some(Duration::ZERO));
        assert!(session.tick(Duration::ZERO));
        assert_eq!(session.state().unwrap().round_number(), 3);
    }

    #[test]
    fn test_multiple_choice_session() {
        let mut session = GameSession::seeded(8);
        session
            .initialize(GameConfig::default().with_answer_mode(AnswerMode::MultipleChoice))
            .unwrap();
        session.start();

        let value = answer(&session, Side::Right);
        assert!(session.select_option(Side::Right, value).is_scored());
        assert!(session.pending_advance().is_some());
        assert_eq!(session.state().unwrap().rope_position(), 1);
    }
}
