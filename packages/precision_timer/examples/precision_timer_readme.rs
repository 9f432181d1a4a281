//! Example code for the `precision_timer` package.

use std::time::Duration;

use precision_timer::{DelayStrategy, PrecisionTimer, Timeout, TimerPrecision};

fn main() {
    // Measure elapsed time in microseconds.
    let mut timer = PrecisionTimer::with_precision(TimerPrecision::Microsecond);

    std::thread::sleep(Duration::from_millis(10));
    println!("slept for {}", timer.format_elapsed(2));

    // Record laps around repeated work.
    timer.reset();
    for _ in 0..3 {
        timer.delay(500, DelayStrategy::Spin);
        timer.lap();
    }
    println!("laps (us): {:?}", timer.laps());

    // Pace a loop at 1 ms per iteration, letting the OS scheduler run other work.
    timer.set_precision(TimerPrecision::Millisecond);
    for count in timer.poll(1, DelayStrategy::Sleep).take(5) {
        println!("tick {count}");
    }

    // Guard an operation with an activity-based timeout.
    let mut timeout = Timeout::new(250, TimerPrecision::Millisecond)
        .expect("duration is non-zero");

    while !timeout.expired() {
        // ... poll for activity; call timeout.kick() when some arrives ...
        std::thread::sleep(Duration::from_millis(50));
    }
    println!("no activity for {} ms, giving up", timeout.duration());
}
