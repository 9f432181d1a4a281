use std::time::Duration;

use crate::pal::{Platform, PlatformFacade, TimeSource, TimeSourceFacade};

/// Default delay duration above which [`DelayStrategy::Sleep`] actually sleeps.
///
/// OS sleep granularity is scheduler-dependent and commonly around a millisecond, so
/// below this bound sleeping would overshoot by more than the requested wait itself.
/// The figure is platform-tuned rather than architectural; construct a timer via
/// [`PrecisionTimer::with_sleep_threshold`][crate::PrecisionTimer::with_sleep_threshold]
/// to override it.
pub const DEFAULT_SLEEP_THRESHOLD: Duration = Duration::from_millis(1);

/// Selects how a delay call waits out its duration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DelayStrategy {
    /// Polls the clock in a tight loop without yielding the processor.
    ///
    /// Sub-microsecond accuracy at the cost of keeping one core fully busy.
    #[default]
    Spin,

    /// Yields the processor via the OS sleep primitive for durations above the sleep
    /// threshold, then spins out the remainder.
    ///
    /// At or below the threshold this behaves exactly like [`Spin`][Self::Spin],
    /// because the sleep primitive's own overhead would exceed the requested wait.
    Sleep,
}

/// The nanosecond-domain timing core: one checkpoint, elapsed queries and delays.
///
/// All state lives in a single instance; distinct engines are fully independent.
#[derive(Debug)]
pub(crate) struct TimerEngine {
    time_source: TimeSourceFacade,
    checkpoint: u64,
    sleep_threshold_nanos: u64,
}

impl TimerEngine {
    pub(crate) fn new(pal: &PlatformFacade, sleep_threshold: Duration) -> Self {
        let mut time_source = pal.new_time_source();
        let checkpoint = time_source.monotonic_nanos();

        Self {
            time_source,
            checkpoint,
            sleep_threshold_nanos: u64::try_from(sleep_threshold.as_nanos())
                .expect("sleep threshold of centuries is not a meaningful configuration"),
        }
    }

    /// Moves the checkpoint to the current instant.
    pub(crate) fn reset(&mut self) {
        self.checkpoint = self.time_source.monotonic_nanos();
    }

    /// Nanoseconds elapsed since the checkpoint.
    ///
    /// Never mutates the checkpoint; delay bookkeeping is local to each delay call, so
    /// elapsed queries and delays cannot perturb each other.
    pub(crate) fn elapsed_ns(&mut self) -> u64 {
        self.time_source
            .monotonic_nanos()
            .saturating_sub(self.checkpoint)
    }

    /// Blocks the calling thread for at least `duration_ns` nanoseconds.
    ///
    /// The wait is measured from a locally captured start reading. With
    /// [`DelayStrategy::Sleep`] and a duration strictly above the sleep threshold, the
    /// bulk of the wait is handed to the OS and any undershoot is spun out afterwards,
    /// so the lower bound holds for both strategies.
    pub(crate) fn delay_ns(&mut self, duration_ns: u64, strategy: DelayStrategy) {
        let start = self.time_source.monotonic_nanos();

        if strategy == DelayStrategy::Sleep && duration_ns > self.sleep_threshold_nanos {
            self.time_source.sleep(Duration::from_nanos(duration_ns));
        }

        while self
            .time_source
            .monotonic_nanos()
            .saturating_sub(start)
            < duration_ns
        {}
    }
}
