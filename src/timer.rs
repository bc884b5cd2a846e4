//! Repeating timer polled from the event loop.

use std::time::{Duration, Instant};

/// A stoppable repeating timer.
///
/// The timer never calls anything itself. The owner polls it and does its work
/// when a tick is due, so stopping it is all it takes to drop pending ticks.
#[derive(Debug, Clone, Default)]
pub struct RepeatingTimer {
    interval: Duration,
    next_fire: Option<Instant>,
}

impl RepeatingTimer {
    /// Create a stopped timer.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_fire: None,
        }
    }

    /// Start (or restart) the timer. The first tick is due one interval after `now`.
    pub fn start_at(&mut self, now: Instant) {
        self.next_fire = Some(now + self.interval);
    }

    /// Stop the timer. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.next_fire = None;
    }

    /// Returns `true` if a tick is due at `now` and schedules the next one.
    ///
    /// Missed ticks are not replayed: the next tick is one interval after `now`.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.next_fire {
            Some(due) if due <= now => {
                self.next_fire = Some(now + self.interval);
                true
            },
            _ => false,
        }
    }

    /// Time left until the next tick, `None` when stopped.
    pub fn time_until_next_at(&self, now: Instant) -> Option<Duration> {
        self.next_fire.map(|due| due.saturating_duration_since(now))
    }
}
