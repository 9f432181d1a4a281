use crate::{DelayStrategy, PrecisionTimer};

/// Iterator returned by [`PrecisionTimer::poll()`].
///
/// Advancing the iterator delays for the configured interval, then yields the 1-based
/// count of completed delay cycles. The sequence is unbounded; bound it externally with
/// `take()` or a `break` condition.
#[derive(Debug)]
pub struct Poll<'a> {
    timer: &'a mut PrecisionTimer,
    interval: u64,
    strategy: DelayStrategy,
    count: u64,
}

impl<'a> Poll<'a> {
    pub(crate) fn new(timer: &'a mut PrecisionTimer, interval: u64, strategy: DelayStrategy) -> Self {
        Self {
            timer,
            interval,
            strategy,
            count: 0,
        }
    }
}

impl Iterator for Poll<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        self.timer.delay(self.interval, self.strategy);
        self.count = self.count.wrapping_add(1);
        Some(self.count)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{DEFAULT_SLEEP_THRESHOLD, TimerPrecision};
    use crate::pal::{MockPlatform, MockTimeSource};
    use mockall::Sequence;

    #[test]
    fn each_advance_delays_then_counts() {
        let mut time_source = MockTimeSource::new();
        let mut seq = Sequence::new();

        // Construction checkpoint.
        time_source
            .expect_monotonic_nanos()
            .once()
            .in_sequence(&mut seq)
            .return_const(0_u64);

        // Two poll cycles of 100 ns each: start reading plus one satisfying poll.
        for cycle in 1..=2_u64 {
            let start = cycle * 1_000;

            time_source
                .expect_monotonic_nanos()
                .once()
                .in_sequence(&mut seq)
                .return_const(start);
            time_source
                .expect_monotonic_nanos()
                .once()
                .in_sequence(&mut seq)
                .return_const(start + 100);
        }

        let mut platform = MockPlatform::new();
        platform
            .expect_new_time_source()
            .once()
            .return_once(move || time_source);

        let mut timer = PrecisionTimer::from_pal(
            &platform.into(),
            TimerPrecision::Nanosecond,
            DEFAULT_SLEEP_THRESHOLD,
        );

        let counts: Vec<u64> = timer.poll(100, DelayStrategy::Spin).take(2).collect();
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn size_hint_is_unbounded() {
        let mut time_source = MockTimeSource::new();

        time_source
            .expect_monotonic_nanos()
            .once()
            .return_const(0_u64);

        let mut platform = MockPlatform::new();
        platform
            .expect_new_time_source()
            .once()
            .return_once(move || time_source);

        let mut timer = PrecisionTimer::from_pal(
            &platform.into(),
            TimerPrecision::Nanosecond,
            Duration::from_millis(1),
        );

        let poll = timer.poll(100, DelayStrategy::Spin);
        assert_eq!(poll.size_hint(), (usize::MAX, None));
    }
}
