use std::time::Duration;

use time_units::TimeUnit;

use crate::engine::TimerEngine;
use crate::pal::PlatformFacade;
use crate::{DEFAULT_SLEEP_THRESHOLD, DelayStrategy, Poll, TimerPrecision};

/// Time units in descending order, used to decompose elapsed time for display.
const DESCENDING_UNITS: [TimeUnit; 7] = [
    TimeUnit::Day,
    TimeUnit::Hour,
    TimeUnit::Minute,
    TimeUnit::Second,
    TimeUnit::Millisecond,
    TimeUnit::Microsecond,
    TimeUnit::Nanosecond,
];

/// A high-precision interval timer with delay, lap and polling support.
///
/// The timer tracks a single checkpoint against the platform's highest-resolution
/// monotonic clock. [`elapsed()`][Self::elapsed] reports time since the checkpoint,
/// [`reset()`][Self::reset] moves the checkpoint to now, and
/// [`delay()`][Self::delay] blocks for a requested duration using either a busy-wait
/// loop or an OS sleep (see [`DelayStrategy`]).
///
/// All durations cross the API in the timer's current [`TimerPrecision`]; internally
/// everything is tracked in nanoseconds, so changing precision or repeating operations
/// never compounds rounding error.
///
/// Each instance owns its state outright. Instances used from different threads are
/// fully independent; sharing one instance across threads requires external
/// synchronization, which is why the measuring methods take `&mut self`.
///
/// # Examples
///
/// ```
/// use precision_timer::{DelayStrategy, PrecisionTimer, TimerPrecision};
///
/// let mut timer = PrecisionTimer::with_precision(TimerPrecision::Millisecond);
///
/// timer.delay(5, DelayStrategy::Sleep);
///
/// assert!(timer.elapsed() >= 5);
/// ```
///
/// Recording laps:
///
/// ```
/// use precision_timer::{DelayStrategy, PrecisionTimer, TimerPrecision};
///
/// let mut timer = PrecisionTimer::with_precision(TimerPrecision::Microsecond);
///
/// for _ in 0..3 {
///     timer.delay(200, DelayStrategy::Spin);
///     timer.lap();
/// }
///
/// assert_eq!(timer.laps().len(), 3);
/// assert!(timer.laps().iter().all(|&lap| lap >= 200));
/// ```
#[derive(Debug)]
pub struct PrecisionTimer {
    engine: TimerEngine,
    precision: TimerPrecision,
    laps: Vec<u64>,
}

impl PrecisionTimer {
    /// Creates a timer with the default microsecond precision.
    ///
    /// The checkpoint is set to the moment of construction.
    #[must_use]
    pub fn new() -> Self {
        Self::with_precision(TimerPrecision::default())
    }

    /// Creates a timer that reports and accepts durations in the given precision.
    #[must_use]
    pub fn with_precision(precision: TimerPrecision) -> Self {
        Self::with_sleep_threshold(precision, DEFAULT_SLEEP_THRESHOLD)
    }

    /// Creates a timer with a custom sleep-eligibility threshold for
    /// [`DelayStrategy::Sleep`] delays.
    ///
    /// The default of [`DEFAULT_SLEEP_THRESHOLD`] suits common desktop and server
    /// schedulers; tighten or relax it after benchmarking on your target platform.
    #[must_use]
    pub fn with_sleep_threshold(precision: TimerPrecision, sleep_threshold: Duration) -> Self {
        Self::from_pal(&PlatformFacade::real(), precision, sleep_threshold)
    }

    pub(crate) fn from_pal(
        pal: &PlatformFacade,
        precision: TimerPrecision,
        sleep_threshold: Duration,
    ) -> Self {
        Self {
            engine: TimerEngine::new(pal, sleep_threshold),
            precision,
            laps: Vec::new(),
        }
    }

    /// The precision the timer currently reports and accepts durations in.
    #[must_use]
    pub fn precision(&self) -> TimerPrecision {
        self.precision
    }

    /// Changes the precision used for reporting and accepting durations.
    ///
    /// Takes effect immediately and does not disturb the checkpoint. String inputs are
    /// validated by parsing into [`TimerPrecision`] first; a failed parse leaves the
    /// active precision untouched:
    ///
    /// ```
    /// use precision_timer::{PrecisionTimer, TimerPrecision};
    ///
    /// let mut timer = PrecisionTimer::new();
    ///
    /// match "ms".parse::<TimerPrecision>() {
    ///     Ok(precision) => timer.set_precision(precision),
    ///     Err(_) => unreachable!(),
    /// }
    ///
    /// assert_eq!(timer.precision(), TimerPrecision::Millisecond);
    /// ```
    pub fn set_precision(&mut self, precision: TimerPrecision) {
        self.precision = precision;
    }

    /// Moves the checkpoint to the current instant.
    ///
    /// Recorded laps are unaffected; use [`clear_laps()`][Self::clear_laps] to discard
    /// them.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Time elapsed since construction or the last [`reset()`][Self::reset], whichever
    /// happened last, in the timer's current precision.
    ///
    /// Sub-precision remainder is truncated. Querying never moves the checkpoint, so
    /// repeated readings without a reset are monotonically non-decreasing.
    pub fn elapsed(&mut self) -> u64 {
        self.engine.elapsed_ns() / self.precision.as_nanos()
    }

    /// Time elapsed since the checkpoint, reported in an arbitrary unit.
    ///
    /// Useful for one-off readouts in units coarser than the timer's precision without
    /// reconfiguring the timer. Rounded per [`time_units::convert`].
    #[expect(
        clippy::cast_precision_loss,
        reason = "beyond 2^53 nanoseconds (~104 days) sub-nanosecond loss is irrelevant"
    )]
    pub fn elapsed_as(&mut self, unit: TimeUnit) -> f64 {
        time_units::convert(self.engine.elapsed_ns() as f64, TimeUnit::Nanosecond, unit)
    }

    /// Records the current elapsed time as a lap, resets the checkpoint and returns the
    /// lap duration in the timer's current precision.
    ///
    /// The read-append-reset sequence is atomic with respect to other operations on
    /// this instance because it holds exclusive access throughout.
    pub fn lap(&mut self) -> u64 {
        let duration = self.elapsed();
        self.laps.push(duration);
        self.engine.reset();
        duration
    }

    /// All recorded lap durations, oldest first.
    ///
    /// Values are in whatever precision was active when each lap was recorded.
    #[must_use]
    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    /// Discards all recorded laps.
    pub fn clear_laps(&mut self) {
        self.laps.clear();
    }

    /// Blocks the calling thread for at least `duration` units of the timer's current
    /// precision.
    ///
    /// The wait never returns early and cannot be cancelled; callers needing a
    /// cancellable wait should compose shorter delays in a loop and check a flag
    /// between them. Delays do not disturb the checkpoint.
    pub fn delay(&mut self, duration: u64, strategy: DelayStrategy) {
        self.engine
            .delay_ns(duration.saturating_mul(self.precision.as_nanos()), strategy);
    }

    /// Returns an unbounded iterator that delays `interval` (in the timer's current
    /// precision) before yielding each 1-based iteration count.
    ///
    /// Each call starts an independent count from 1; bound the iteration externally:
    ///
    /// ```
    /// use precision_timer::{DelayStrategy, PrecisionTimer, TimerPrecision};
    ///
    /// let mut timer = PrecisionTimer::with_precision(TimerPrecision::Microsecond);
    ///
    /// let counts: Vec<u64> = timer.poll(100, DelayStrategy::Spin).take(3).collect();
    /// assert_eq!(counts, vec![1, 2, 3]);
    /// ```
    pub fn poll(&mut self, interval: u64, strategy: DelayStrategy) -> Poll<'_> {
        Poll::new(self, interval, strategy)
    }

    /// Renders the current elapsed time as a human-readable string of at most
    /// `max_fields` unit segments, largest to smallest, e.g. `"2 h 30 m"` or
    /// `"1.5 ms"`.
    ///
    /// The final segment carries up to 3 decimal places of the remainder; whole values
    /// render without a fractional part. Zero elapsed renders as `0` in the timer's
    /// precision.
    #[expect(
        clippy::cast_precision_loss,
        reason = "beyond 2^53 nanoseconds (~104 days) sub-nanosecond loss is irrelevant"
    )]
    pub fn format_elapsed(&mut self, max_fields: usize) -> String {
        let mut remaining_ns = self.engine.elapsed_ns();

        if remaining_ns == 0 || max_fields == 0 {
            return format!("0 {}", self.precision);
        }

        let mut parts = Vec::new();

        for unit in DESCENDING_UNITS {
            if parts.len() >= max_fields {
                break;
            }

            let unit_ns = unit.whole_nanos();
            if remaining_ns < unit_ns {
                continue;
            }

            let is_final_segment =
                parts.len() == max_fields.saturating_sub(1) || unit == TimeUnit::Nanosecond;

            if is_final_segment {
                // The remainder is folded into the last segment as a decimal.
                let count =
                    time_units::convert(remaining_ns as f64, TimeUnit::Nanosecond, unit);
                parts.push(format!("{count} {unit}"));
                break;
            }

            let whole = remaining_ns / unit_ns;
            parts.push(format!("{whole} {unit}"));
            remaining_ns %= unit_ns;
        }

        parts.join(" ")
    }
}

impl Default for PrecisionTimer {
    fn default() -> Self {
        Self::new()
    }
}
