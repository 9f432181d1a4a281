use std::time::Duration;
use std::{io, mem, thread};

use libc::{CLOCK_MONOTONIC, timespec};

use crate::pal::{Platform, TimeSource};

/// Singleton instance of `BuildTargetPlatform`, used by public API types to hook up to
/// the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    type TimeSource = TimeSourceImpl;

    fn new_time_source(&self) -> Self::TimeSource {
        TimeSourceImpl
    }
}

/// Reads `CLOCK_MONOTONIC`, the highest-resolution steady clock POSIX offers without
/// giving up portability across Unix flavors.
#[derive(Clone, Debug)]
pub(crate) struct TimeSourceImpl;

impl TimeSource for TimeSourceImpl {
    #[expect(
        clippy::cast_sign_loss,
        reason = "never going to happen with timestamps within real-universe ranges"
    )]
    fn monotonic_nanos(&mut self) -> u64 {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut ts: timespec = unsafe { mem::zeroed() };

        // SAFETY: We are passing valid arguments, no other safety requirements.
        let result = unsafe { libc::clock_gettime(CLOCK_MONOTONIC, &raw mut ts) };

        // No monotonic clock means no meaningful timing is possible, so fail fast.
        assert!(result == 0, "{}", io::Error::last_os_error());

        (ts.tv_sec as u64) * 1_000_000_000 + (ts.tv_nsec as u64)
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readings_are_monotonic() {
        let mut time_source = TimeSourceImpl;

        let a = time_source.monotonic_nanos();
        let b = time_source.monotonic_nanos();

        assert!(b >= a);
    }

    #[test]
    fn sleep_advances_the_clock() {
        let mut time_source = TimeSourceImpl;

        let before = time_source.monotonic_nanos();
        time_source.sleep(Duration::from_millis(1));
        let after = time_source.monotonic_nanos();

        assert!(after - before >= 1_000_000);
    }
}
