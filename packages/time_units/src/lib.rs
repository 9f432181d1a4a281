//! Pure, stateless helpers for working with time values expressed in different units.
//!
//! All conversions go through nanoseconds as the base unit, using the factor table exposed
//! by [`TimeUnit`]. Floating-point results are rounded to 3 decimal places in the target
//! unit; integer results are rounded to the nearest whole number.
//!
//! # Example
//!
//! ```
//! use time_units::TimeUnit;
//!
//! assert_eq!(time_units::convert(1.0, TimeUnit::Day, TimeUnit::Second), 86_400.0);
//! assert_eq!(time_units::convert(1000.0, TimeUnit::Microsecond, TimeUnit::Millisecond), 1.0);
//!
//! // 30 Hz sampling corresponds to a ~33.333 ms frame interval.
//! let interval = time_units::rate_to_interval(30.0, TimeUnit::Millisecond).unwrap();
//! assert!((interval - 33.333).abs() < 0.001);
//! ```

mod convert;
mod duration;
mod error;
mod rate;
mod timestamp;
mod unit;

pub use convert::*;
pub use duration::*;
pub use error::*;
pub use rate::*;
pub use timestamp::*;
pub use unit::*;
