use std::fmt::{self, Display};
use std::str::FromStr;

use crate::Error;

/// A unit of time supported by the conversion helpers.
///
/// The enum is closed; every consumption site matches exhaustively so that adding a unit
/// is a compile-time event, never a silent fallthrough.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TimeUnit {
    /// One billionth of a second.
    Nanosecond,

    /// One millionth of a second.
    Microsecond,

    /// One thousandth of a second.
    Millisecond,

    /// The SI base unit.
    Second,

    /// 60 seconds.
    Minute,

    /// 3600 seconds.
    Hour,

    /// 86400 seconds.
    Day,
}

impl TimeUnit {
    /// All supported units, smallest to largest.
    pub const ALL: [Self; 7] = [
        Self::Nanosecond,
        Self::Microsecond,
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
    ];

    /// The conversion factor of this unit, expressed as nanoseconds per unit.
    #[must_use]
    pub const fn nanos_per_unit(self) -> f64 {
        match self {
            Self::Nanosecond => 1.0,
            Self::Microsecond => 1e3,
            Self::Millisecond => 1e6,
            Self::Second => 1e9,
            Self::Minute => 6e10,
            Self::Hour => 3.6e12,
            Self::Day => 8.64e13,
        }
    }

    /// The exact number of whole nanoseconds in one of this unit.
    ///
    /// Unlike [`nanos_per_unit()`][Self::nanos_per_unit], this is usable in integer
    /// arithmetic that must not accumulate floating-point error.
    #[must_use]
    pub const fn whole_nanos(self) -> u64 {
        match self {
            Self::Nanosecond => 1,
            Self::Microsecond => 1_000,
            Self::Millisecond => 1_000_000,
            Self::Second => 1_000_000_000,
            Self::Minute => 60_000_000_000,
            Self::Hour => 3_600_000_000_000,
            Self::Day => 86_400_000_000_000,
        }
    }

    /// The conventional short name of the unit, as accepted by [`FromStr`].
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Nanosecond => "ns",
            Self::Microsecond => "us",
            Self::Millisecond => "ms",
            Self::Second => "s",
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "d",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.abbreviation().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnrecognizedUnit {
                value: s.to_string(),
            })
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}
