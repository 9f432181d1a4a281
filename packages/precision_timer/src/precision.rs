use std::fmt::{self, Display};
use std::str::FromStr;

use time_units::TimeUnit;

use crate::Error;

/// The unit granularity in which a timer instance reports and accepts durations.
///
/// Precision only scales values at the API boundary; all internal bookkeeping stays in
/// nanoseconds so repeated operations never compound rounding error.
///
/// Parse from the conventional abbreviations (case-insensitive):
///
/// ```
/// use precision_timer::TimerPrecision;
///
/// let precision: TimerPrecision = "ms".parse().unwrap();
/// assert_eq!(precision, TimerPrecision::Millisecond);
///
/// assert!("x".parse::<TimerPrecision>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TimerPrecision {
    /// Report and accept durations in nanoseconds.
    Nanosecond,

    /// Report and accept durations in microseconds. The default.
    #[default]
    Microsecond,

    /// Report and accept durations in milliseconds.
    Millisecond,

    /// Report and accept durations in seconds.
    Second,
}

impl TimerPrecision {
    /// All supported precisions, finest to coarsest.
    pub const ALL: [Self; 4] = [
        Self::Nanosecond,
        Self::Microsecond,
        Self::Millisecond,
        Self::Second,
    ];

    /// The number of nanoseconds in one unit of this precision.
    #[must_use]
    pub const fn as_nanos(self) -> u64 {
        match self {
            Self::Nanosecond => 1,
            Self::Microsecond => 1_000,
            Self::Millisecond => 1_000_000,
            Self::Second => 1_000_000_000,
        }
    }

    /// The conventional short name of the precision, as accepted by [`FromStr`].
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Nanosecond => "ns",
            Self::Microsecond => "us",
            Self::Millisecond => "ms",
            Self::Second => "s",
        }
    }

    /// The equivalent [`TimeUnit`] for interoperating with the conversion helpers.
    #[must_use]
    pub const fn time_unit(self) -> TimeUnit {
        match self {
            Self::Nanosecond => TimeUnit::Nanosecond,
            Self::Microsecond => TimeUnit::Microsecond,
            Self::Millisecond => TimeUnit::Millisecond,
            Self::Second => TimeUnit::Second,
        }
    }
}

impl FromStr for TimerPrecision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|precision| precision.abbreviation().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnrecognizedPrecision {
                value: s.to_string(),
            })
    }
}

impl Display for TimerPrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_microsecond() {
        assert_eq!(TimerPrecision::default(), TimerPrecision::Microsecond);
    }

    #[test]
    fn parses_all_abbreviations() {
        for precision in TimerPrecision::ALL {
            assert_eq!(
                precision.abbreviation().parse::<TimerPrecision>().unwrap(),
                precision
            );
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(
            "NS".parse::<TimerPrecision>().unwrap(),
            TimerPrecision::Nanosecond
        );
        assert_eq!(
            "Us".parse::<TimerPrecision>().unwrap(),
            TimerPrecision::Microsecond
        );
    }

    #[test]
    fn unknown_precision_is_rejected_with_value() {
        let error = "x".parse::<TimerPrecision>().unwrap_err();
        assert!(matches!(error, Error::UnrecognizedPrecision { ref value } if value == "x"));
    }

    #[test]
    fn nanos_match_the_equivalent_time_unit() {
        for precision in TimerPrecision::ALL {
            assert_eq!(precision.as_nanos(), precision.time_unit().whole_nanos());
        }
    }
}
