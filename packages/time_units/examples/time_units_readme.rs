//! Example code for the `time_units` package.

use std::time::Duration;

use time_units::TimeUnit;

fn main() {
    // Unit conversion through the nanosecond base.
    let seconds = time_units::convert(90.0, TimeUnit::Minute, TimeUnit::Second);
    println!("90 m = {seconds} s");

    // Rates and intervals.
    let frame_interval = time_units::rate_to_interval(60.0, TimeUnit::Millisecond)
        .expect("rate is positive");
    println!("60 Hz = one frame every {frame_interval} ms");

    // Interop with std::time::Duration.
    let duration = time_units::to_duration(1.5, TimeUnit::Hour).expect("value is non-negative");
    assert_eq!(duration, Duration::from_secs(5400));
    println!("1.5 h = {duration:?}");

    // Wall-clock timestamp, in whole microseconds since the Unix epoch.
    println!("now: {} us", time_units::unix_timestamp_micros());
}
