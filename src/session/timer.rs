//! Cancellable one-shot timer for the automatic round advance.
//!
//! Time is logical: the owner passes the current clock reading in, so the
//! timer is deterministic and never blocks. At most one advance is pending
//! at a time; scheduling again replaces it.

use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    due: Duration,
    round: u32,
}

/// A pending "advance from round N" message.
#[derive(Clone, Debug, Default)]
pub struct AdvanceTimer {
    pending: Option<Pending>,
}

impl AdvanceTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an advance from `round` at `now + delay`, replacing any
    /// pending one. A due time past `Duration::MAX` saturates.
    pub fn schedule(&mut self, now: Duration, delay: Duration, round: u32) {
        self.pending = Some(Pending {
            due: now.saturating_add(delay),
            round,
        });
    }

    /// Drop the pending advance. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Fire the pending advance if it is due at `now`.
    ///
    /// Returns the round it was scheduled for; the timer is then empty.
    pub fn poll(&mut self, now: Duration) -> Option<u32> {
        match self.pending {
            Some(pending) if now >= pending.due => {
                self.pending = None;
                Some(pending.round)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending advance fires.
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.pending.map(|p| p.due.saturating_sub(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_fires_when_due() {
        let mut timer = AdvanceTimer::new();
        timer.schedule(Duration::ZERO, SECOND, 3);

        assert_eq!(timer.poll(Duration::from_millis(999)), None);
        assert_eq!(timer.remaining(Duration::from_millis(400)), Some(Duration::from_millis(600)));
        assert_eq!(timer.poll(SECOND), Some(3));
        assert!(!timer.is_pending());
        assert_eq!(timer.poll(SECOND * 2), None);
    }

    #[test]
    fn test_cancel() {
        let mut timer = AdvanceTimer::new();
        timer.schedule(Duration::ZERO, SECOND, 1);

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.poll(SECOND * 5), None);
    }

    #[test]
    fn test_reschedule_replaces() {
        let mut timer = AdvanceTimer::new();
        timer.schedule(Duration::ZERO, SECOND, 1);
        timer.schedule(SECOND, SECOND, 2);

        assert_eq!(timer.poll(SECOND), None);
        assert_eq!(timer.poll(SECOND * 2), Some(2));
    }

    #[test]
    fn test_due_time_saturates() {
        let mut timer = AdvanceTimer::new();
        timer.schedule(Duration::MAX, SECOND, 4);

        assert_eq!(timer.remaining(Duration::MAX), Some(Duration::ZERO));
        assert_eq!(timer.poll(Duration::MAX), Some(4));
    }
}
