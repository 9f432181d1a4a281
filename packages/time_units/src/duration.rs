use std::time::Duration;

use crate::convert::convert_unrounded;
use crate::{Error, Result, TimeUnit};

/// Converts a time value in the given unit to a [`Duration`].
///
/// # Errors
///
/// Returns [`Error::UnrepresentableDuration`] if the value is negative or not finite,
/// since a `Duration` cannot represent those.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use time_units::TimeUnit;
///
/// let duration = time_units::to_duration(1500.0, TimeUnit::Millisecond).unwrap();
/// assert_eq!(duration, Duration::from_millis(1500));
/// ```
pub fn to_duration(value: f64, from: TimeUnit) -> Result<Duration> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(Error::UnrepresentableDuration { value });
    }

    let seconds = convert_unrounded(value, from, TimeUnit::Second);
    Ok(Duration::from_secs_f64(seconds))
}

/// Converts a [`Duration`] to a time value in the given unit, rounded to 3 decimal
/// places.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use time_units::TimeUnit;
///
/// let minutes = time_units::from_duration(Duration::from_secs(90), TimeUnit::Minute);
/// assert_eq!(minutes, 1.5);
/// ```
#[must_use]
pub fn from_duration(duration: Duration, to: TimeUnit) -> f64 {
    crate::convert(duration.as_secs_f64(), TimeUnit::Second, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_unit_durations() {
        assert_eq!(
            to_duration(1.0, TimeUnit::Second).unwrap(),
            Duration::from_secs(1)
        );
        assert_eq!(
            to_duration(1000.0, TimeUnit::Millisecond).unwrap(),
            Duration::from_secs(1)
        );
        assert_eq!(
            to_duration(1.0, TimeUnit::Hour).unwrap(),
            Duration::from_secs(3600)
        );
        assert_eq!(
            to_duration(1.0, TimeUnit::Day).unwrap(),
            Duration::from_secs(86_400)
        );
        assert_eq!(
            to_duration(500_000.0, TimeUnit::Microsecond).unwrap(),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn from_duration_reports_in_requested_unit() {
        assert_eq!(from_duration(Duration::from_secs(1), TimeUnit::Second), 1.0);
        assert_eq!(
            from_duration(Duration::from_secs(1), TimeUnit::Millisecond),
            1000.0
        );
        assert_eq!(
            from_duration(Duration::from_secs(3600), TimeUnit::Minute),
            60.0
        );
    }

    #[test]
    fn duration_round_trip() {
        for unit in [
            TimeUnit::Second,
            TimeUnit::Millisecond,
            TimeUnit::Minute,
            TimeUnit::Hour,
        ] {
            let original = 42.0;
            let duration = to_duration(original, unit).unwrap();
            let recovered = from_duration(duration, unit);

            assert!((recovered - original).abs() < 0.01, "{unit}");
        }
    }

    #[test]
    fn negative_and_non_finite_values_are_rejected() {
        assert!(matches!(
            to_duration(-1.0, TimeUnit::Second),
            Err(Error::UnrepresentableDuration { .. })
        ));
        assert!(matches!(
            to_duration(f64::NAN, TimeUnit::Second),
            Err(Error::UnrepresentableDuration { .. })
        ));
        assert!(matches!(
            to_duration(f64::INFINITY, TimeUnit::Second),
            Err(Error::UnrepresentableDuration { .. })
        ));
    }
}
