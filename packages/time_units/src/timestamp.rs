use std::time::{SystemTime, UNIX_EPOCH};

/// Reads the system wall clock and returns the current UTC time as whole microseconds
/// since the Unix epoch.
///
/// This is the only function in the crate that performs I/O; everything else is pure.
/// The returned value is wall-clock time and is not suitable for interval measurement;
/// use a monotonic timer for that.
#[must_use]
pub fn unix_timestamp_micros() -> i64 {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system wall clock reports a time before the Unix epoch");

    i64::try_from(since_epoch.as_micros())
        .expect("system wall clock beyond the range of a 64-bit microsecond counter")
}
