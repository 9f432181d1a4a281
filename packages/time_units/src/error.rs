use thiserror::Error;

/// Errors that can occur when converting time values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller supplied a unit string that is not one of the supported abbreviations.
    #[error("unrecognized time unit '{value}'; supported units are ns, us, ms, s, m, h and d")]
    UnrecognizedUnit {
        /// The string that failed to parse.
        value: String,
    },

    /// A rate of zero or less was supplied where a positive rate is required.
    ///
    /// The interval of a non-positive rate is undefined, so this is rejected instead of
    /// being returned as infinity.
    #[error("rate must be greater than zero to have a defined interval, but got {rate}")]
    NonPositiveRate {
        /// The rejected rate, in Hz.
        rate: f64,
    },

    /// An interval of zero or less was supplied where a positive interval is required.
    #[error("interval must be greater than zero to have a defined rate, but got {interval}")]
    NonPositiveInterval {
        /// The rejected interval, in the caller's units.
        interval: f64,
    },

    /// A value was supplied that cannot be expressed as a `std::time::Duration`.
    #[error("value {value} cannot be represented as a non-negative duration")]
    UnrepresentableDuration {
        /// The rejected value, in the caller's units.
        value: f64,
    },
}

/// A specialized `Result` type for time conversion operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn messages_echo_the_offending_value() {
        let error = Error::NonPositiveRate { rate: -2.5 };
        assert!(error.to_string().contains("-2.5"));

        let error = Error::UnrecognizedUnit {
            value: "week".to_string(),
        };
        assert!(error.to_string().contains("week"));
    }
}
