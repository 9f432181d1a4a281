use std::fmt::Debug;
use std::time::Duration;

pub(crate) trait Platform: Debug + Send + Sync + 'static {
    type TimeSource: TimeSource;

    fn new_time_source(&self) -> Self::TimeSource;
}

/// Access to the platform's highest-resolution monotonic clock and its blocking sleep
/// primitive.
///
/// Sleeping goes through this trait as well so that delay logic can be driven
/// deterministically by mock time sources in tests.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait TimeSource: Debug + Send {
    /// Current reading of the monotonic clock, as nanoseconds since an arbitrary epoch.
    ///
    /// Successive readings never decrease. The epoch carries no wall-clock meaning.
    fn monotonic_nanos(&mut self) -> u64;

    /// Blocks the calling thread for approximately the given duration, yielding the
    /// processor to the scheduler.
    fn sleep(&mut self, duration: Duration);
}
