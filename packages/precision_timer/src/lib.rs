//! High-resolution interval timing, delays and timeout guards.
//!
//! This crate wraps the platform's highest-resolution monotonic clock behind
//! [`PrecisionTimer`], which measures elapsed intervals, records laps and blocks for
//! precise durations using either a busy-wait loop or an OS sleep (see
//! [`DelayStrategy`]). [`Timeout`] builds an activity-based deadline guard on top of
//! the timer.
//!
//! All timing state is tracked internally in nanoseconds; the [`TimerPrecision`] of a
//! timer only determines the unit in which durations cross the API.
//!
//! # Choosing a delay strategy
//!
//! - [`DelayStrategy::Spin`] polls the clock in a tight loop. Sub-microsecond accuracy,
//!   one core fully busy for the duration of the wait.
//! - [`DelayStrategy::Sleep`] hands waits longer than the sleep threshold (1 ms by
//!   default) to the OS scheduler and spins out the remainder, trading some accuracy
//!   for an idle core. Short waits spin regardless, because the sleep primitive's own
//!   granularity would dominate them.
//!
//! The precision achievable with either strategy depends on the host hardware and
//! scheduler; benchmark on the target system before relying on it (a criterion bench
//! ships with this package).
//!
//! # Example
//!
//! ```
//! use precision_timer::{DelayStrategy, PrecisionTimer, TimerPrecision};
//!
//! let mut timer = PrecisionTimer::with_precision(TimerPrecision::Microsecond);
//!
//! // Measure a unit of work.
//! timer.reset();
//! let checksum: u64 = (0..1000_u64).sum();
//! println!("summed to {checksum} in {}", timer.format_elapsed(2));
//!
//! // Pace a loop at 500 us per iteration.
//! for _ in timer.poll(500, DelayStrategy::Spin).take(3) {
//!     // ... periodic work ...
//! }
//! ```

mod pal;

mod engine;
mod error;
mod poll;
mod precision;
mod timeout;
mod timer;

pub use engine::{DEFAULT_SLEEP_THRESHOLD, DelayStrategy};
pub use error::*;
pub use poll::*;
pub use precision::*;
pub use timeout::*;
pub use timer::*;

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(PrecisionTimer: Send, Debug);
    assert_impl_all!(Timeout: Send, Debug);
    assert_impl_all!(TimerPrecision: Send, Sync, Copy, Debug);
    assert_impl_all!(DelayStrategy: Send, Sync, Copy, Debug);
}
