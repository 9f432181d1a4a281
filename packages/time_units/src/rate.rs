use crate::convert::convert_unrounded;
use crate::{Error, Result, TimeUnit};

/// Converts an event rate in Hz to the interval between events, expressed in the
/// requested unit and rounded to 3 decimal places.
///
/// # Errors
///
/// Returns [`Error::NonPositiveRate`] if the rate is zero, negative or not finite, since
/// such a rate has no defined interval.
///
/// # Example
///
/// ```
/// use time_units::TimeUnit;
///
/// let interval = time_units::rate_to_interval(1000.0, TimeUnit::Millisecond).unwrap();
/// assert_eq!(interval, 1.0);
/// ```
pub fn rate_to_interval(rate_hz: f64, to: TimeUnit) -> Result<f64> {
    if !(rate_hz.is_finite() && rate_hz > 0.0) {
        return Err(Error::NonPositiveRate { rate: rate_hz });
    }

    Ok(crate::convert(1.0 / rate_hz, TimeUnit::Second, to))
}

/// Converts the interval between events to an event rate in Hz, rounded to 3 decimal
/// places.
///
/// # Errors
///
/// Returns [`Error::NonPositiveInterval`] if the interval is zero, negative or not
/// finite, since such an interval has no defined rate.
///
/// # Example
///
/// ```
/// use time_units::TimeUnit;
///
/// let rate = time_units::interval_to_rate(1.0, TimeUnit::Millisecond).unwrap();
/// assert_eq!(rate, 1000.0);
/// ```
pub fn interval_to_rate(interval: f64, from: TimeUnit) -> Result<f64> {
    if !(interval.is_finite() && interval > 0.0) {
        return Err(Error::NonPositiveInterval { interval });
    }

    // The intermediate conversion stays unrounded so the reciprocal is computed from
    // the true interval, with rounding applied only to the final rate.
    let seconds = convert_unrounded(interval, from, TimeUnit::Second);
    Ok((1.0 / seconds * 1000.0).round() / 1000.0)
}
