use crate::{Error, PrecisionTimer, Result, TimerPrecision};

/// A timeout guard that tracks a deadline relative to the most recent activity.
///
/// Built entirely on [`PrecisionTimer`]: the guard wraps a timer and a configured
/// duration, and derives [`expired()`][Self::expired] and
/// [`remaining()`][Self::remaining] from the timer's elapsed reading. Nothing about
/// expiry is stored; it is recomputed from the clock on every query.
///
/// # Examples
///
/// ```
/// use precision_timer::{Timeout, TimerPrecision};
///
/// let mut timeout = Timeout::new(500, TimerPrecision::Millisecond).unwrap();
///
/// assert!(!timeout.expired());
/// assert!(timeout.remaining() <= 500);
///
/// // Activity arrived; restart the countdown without touching the duration.
/// timeout.kick();
/// assert!(!timeout.expired());
/// ```
#[derive(Debug)]
pub struct Timeout {
    timer: PrecisionTimer,
    duration: u64,
}

impl Timeout {
    /// Creates a timeout guard that expires `duration` units of `precision` after
    /// construction or the most recent [`kick()`][Self::kick] /
    /// [`reset()`][Self::reset].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroTimeout`] if `duration` is zero.
    pub fn new(duration: u64, precision: TimerPrecision) -> Result<Self> {
        if duration == 0 {
            return Err(Error::ZeroTimeout);
        }

        Ok(Self {
            timer: PrecisionTimer::with_precision(precision),
            duration,
        })
    }

    /// The configured timeout duration, in the guard's precision units.
    #[must_use]
    pub fn duration(&self) -> u64 {
        self.duration
    }

    /// Whether the configured duration has elapsed since the last activity.
    pub fn expired(&mut self) -> bool {
        self.timer.elapsed() >= self.duration
    }

    /// Time left before expiry, in the guard's precision units; zero once expired.
    pub fn remaining(&mut self) -> u64 {
        self.duration.saturating_sub(self.timer.elapsed())
    }

    /// Time elapsed since construction or the last activity, in the guard's precision
    /// units.
    pub fn elapsed(&mut self) -> u64 {
        self.timer.elapsed()
    }

    /// Restarts the countdown without changing the configured duration.
    ///
    /// Call this whenever activity is observed to keep an activity-based timeout from
    /// expiring.
    pub fn kick(&mut self) {
        self.timer.reset();
    }

    /// Restarts the countdown, optionally replacing the configured duration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroTimeout`] if a new duration of zero is supplied; the guard
    /// then remains in its previous state, countdown included.
    pub fn reset(&mut self, duration: Option<u64>) -> Result<()> {
        if let Some(duration) = duration {
            if duration == 0 {
                return Err(Error::ZeroTimeout);
            }
            self.duration = duration;
        }

        self.timer.reset();
        Ok(())
    }
}
