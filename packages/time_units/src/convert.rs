use crate::TimeUnit;

/// Converts a time value from one unit to another, rounding the result to 3 decimal
/// places in the target unit.
///
/// Converting a value to its own unit is the identity, modulo that rounding rule.
///
/// # Example
///
/// ```
/// use time_units::TimeUnit;
///
/// assert_eq!(time_units::convert(60.0, TimeUnit::Second, TimeUnit::Minute), 1.0);
/// assert_eq!(time_units::convert(1.5, TimeUnit::Millisecond, TimeUnit::Microsecond), 1500.0);
/// ```
#[must_use]
pub fn convert(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    round_to_3_decimals(convert_unrounded(value, from, to))
}

/// Converts a time value from one unit to another, rounding to the nearest whole number
/// in the target unit.
///
/// # Example
///
/// ```
/// use time_units::TimeUnit;
///
/// assert_eq!(time_units::convert_round(1.0, TimeUnit::Day, TimeUnit::Second), 86_400);
/// assert_eq!(time_units::convert_round(1499.0, TimeUnit::Microsecond, TimeUnit::Millisecond), 1);
/// ```
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "rounding to the nearest integer is the documented contract"
)]
pub fn convert_round(value: f64, from: TimeUnit, to: TimeUnit) -> i64 {
    convert_unrounded(value, from, to).round() as i64
}

/// Converts every value in a slice from one unit to another, preserving order and length.
///
/// Each element follows the same rounding rule as [`convert()`].
#[must_use]
pub fn convert_all(values: &[f64], from: TimeUnit, to: TimeUnit) -> Vec<f64> {
    values.iter().map(|&v| convert(v, from, to)).collect()
}

/// Full-precision conversion used internally so that derived computations do not
/// compound the public rounding rule.
pub(crate) fn convert_unrounded(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    value * from.nanos_per_unit() / to.nanos_per_unit()
}

fn round_to_3_decimals(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
