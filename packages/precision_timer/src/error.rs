use thiserror::Error;

/// Errors that can occur when configuring timers and timeout guards.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller supplied a precision string that is not one of the supported options.
    #[error("unrecognized timer precision '{value}'; supported precisions are ns, us, ms and s")]
    UnrecognizedPrecision {
        /// The string that failed to parse.
        value: String,
    },

    /// A timeout guard was given a duration of zero, which would be expired on arrival.
    #[error("timeout duration must be greater than zero")]
    ZeroTimeout,
}

/// A specialized `Result` type for timer operations, returning the crate's [`Error`]
/// type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
