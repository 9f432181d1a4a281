use std::thread;
use std::time::Duration;

use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};

use crate::pal::{Platform, TimeSource};

/// Singleton instance of `BuildTargetPlatform`, used by public API types to hook up to
/// the correct PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    type TimeSource = TimeSourceImpl;

    fn new_time_source(&self) -> Self::TimeSource {
        TimeSourceImpl::new()
    }
}

/// Reads the performance counter, the highest-resolution monotonic clock Windows offers.
///
/// The counter frequency is fixed at boot, so it is captured once at construction.
#[derive(Clone, Debug)]
pub(crate) struct TimeSourceImpl {
    counts_per_second: i64,
}

impl TimeSourceImpl {
    fn new() -> Self {
        let mut counts_per_second = 0_i64;

        // SAFETY: We are passing a valid pointer, no other safety requirements.
        unsafe { QueryPerformanceFrequency(&raw mut counts_per_second) }
            .expect("performance counter frequency is available on all supported Windows versions");

        Self { counts_per_second }
    }
}

impl TimeSource for TimeSourceImpl {
    #[expect(
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation,
        reason = "never going to happen with timestamps within real-universe ranges"
    )]
    fn monotonic_nanos(&mut self) -> u64 {
        let mut count = 0_i64;

        // SAFETY: We are passing a valid pointer, no other safety requirements.
        unsafe { QueryPerformanceCounter(&raw mut count) }
            .expect("performance counter is available on all supported Windows versions");

        // Widen before scaling so the intermediate product cannot overflow.
        ((count as u128) * 1_000_000_000 / (self.counts_per_second as u128)) as u64
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
