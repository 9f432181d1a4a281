use std::thread;
use std::time::{Duration, Instant};

use crate::pal::{Platform, TimeSource};

/// We use this under Miri because Miri cannot talk to a real OS but Rust std time still
/// works, and on targets without a dedicated PAL implementation.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

#[derive(Debug)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    type TimeSource = TimeSourceImpl;

    fn new_time_source(&self) -> Self::TimeSource {
        TimeSourceImpl {
            epoch: Instant::now(),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct TimeSourceImpl {
    epoch: Instant,
}

impl TimeSource for TimeSourceImpl {
    fn monotonic_nanos(&mut self) -> u64 {
        u64::try_from(self.epoch.elapsed().as_nanos())
            .expect("unrealistically long process lifetime, never going to happen")
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
