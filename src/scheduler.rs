use std::time::{Duration, Instant};

/// Keeps track of when the snake should next move.
///
/// At most one tick is pending at a time.  The tick interval is read when a
/// tick is scheduled, so a change in speed applies from the tick after the
/// one already pending.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Ticker {
    next_tick: Option<Instant>,
}

impl Ticker {
    pub(crate) fn new() -> Ticker {
        Ticker::default()
    }

    /// Bring the ticker in line with the game.  If the game is running and
    /// no tick is pending, a tick is scheduled for `period` after `now`; if
    /// the game is not running, any pending tick is cancelled.
    pub(crate) fn sync(&mut self, running: bool, period: Duration, now: Instant) {
        if !running {
            self.cancel();
        } else if self.next_tick.is_none() {
            self.next_tick = Some(now + period);
        }
    }

    /// Return how long to wait from `now` until the pending tick.  Returns
    /// `None` if no tick is pending and zero if the tick is overdue.
    pub(crate) fn wait(&self, now: Instant) -> Option<Duration> {
        self.next_tick
            .map(|when| when.saturating_duration_since(now))
    }

    /// Mark the pending tick as done
    pub(crate) fn fire(&mut self) {
        self.next_tick = None;
    }

    /// Drop the pending tick, if any, so that the next call to
    /// [`Ticker::sync()`] starts a fresh one
    pub(crate) fn cancel(&mut self) {
        self.next_tick = None;
    }

    #[cfg(test)]
    pub(crate) fn pending(&self) -> bool {
        self.next_tick.is_some()
    }
}
