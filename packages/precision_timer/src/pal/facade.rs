use std::fmt::Debug;
#[cfg(test)]
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[cfg(test)]
use crate::pal::{MockPlatform, MockTimeSource};
use crate::pal::{BUILD_TARGET_PLATFORM, BuildTargetPlatform, Platform, TimeSource, TimeSourceImpl};

/// Dispatches platform calls to either the build target platform or a mock.
///
/// Whichever of the unix, windows or plain-Rust PAL implementations is compiled in
/// exports the same type names, so this facade does not need per-target variants.
#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Real(&'static BuildTargetPlatform),

    #[cfg(test)]
    Mock(Arc<MockPlatform>),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&BUILD_TARGET_PLATFORM)
    }
}

impl Platform for PlatformFacade {
    type TimeSource = TimeSourceFacade;

    fn new_time_source(&self) -> TimeSourceFacade {
        match self {
            Self::Real(p) => p.new_time_source().into(),
            #[cfg(test)]
            Self::Mock(p) => p.new_time_source().into(),
        }
    }
}

#[cfg(test)]
impl From<MockPlatform> for PlatformFacade {
    fn from(p: MockPlatform) -> Self {
        Self::Mock(Arc::new(p))
    }
}

impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(p) => p.fmt(f),
            #[cfg(test)]
            Self::Mock(p) => p.fmt(f),
        }
    }
}

#[derive(Clone)]
pub(crate) enum TimeSourceFacade {
    Real(TimeSourceImpl),

    #[cfg(test)]
    Mock(Arc<Mutex<MockTimeSource>>),
}

impl From<TimeSourceImpl> for TimeSourceFacade {
    fn from(ts: TimeSourceImpl) -> Self {
        Self::Real(ts)
    }
}

#[cfg(test)]
impl From<MockTimeSource> for TimeSourceFacade {
    fn from(ts: MockTimeSource) -> Self {
        Self::Mock(Arc::new(Mutex::new(ts)))
    }
}

impl TimeSource for TimeSourceFacade {
    fn monotonic_nanos(&mut self) -> u64 {
        match self {
            Self::Real(ts) => ts.monotonic_nanos(),
            #[cfg(test)]
            Self::Mock(ts) => ts
                .lock()
                .expect("mock time source does not support operation after panic in mock")
                .monotonic_nanos(),
        }
    }

    fn sleep(&mut self, duration: Duration) {
        match self {
            Self::Real(ts) => ts.sleep(duration),
            #[cfg(test)]
            Self::Mock(ts) => ts
                .lock()
                .expect("mock time source does not support operation after panic in mock")
                .sleep(duration),
        }
    }
}

impl Debug for TimeSourceFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(ts) => ts.fmt(f),
            #[cfg(test)]
            Self::Mock(ts) => ts.fmt(f),
        }
    }
}
