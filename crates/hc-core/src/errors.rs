//! Error types for holcal.
//!
//! All failure modes of the workspace collapse into a single
//! `thiserror`-derived enum: calendar arithmetic out of range, malformed
//! date keys, and transport failures from the remote holiday source.

use thiserror::Error;

/// The top-level error type used throughout holcal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Date-related error (out-of-range year, invalid day of month, …).
    #[error("date error: {0}")]
    Date(String),

    /// A date key did not match the canonical `YYYY-MM-DD` shape.
    ///
    /// This is a data-contract violation, not a user-recoverable
    /// condition.
    #[error("malformed date key: {0}")]
    Format(String),

    /// The holiday data source was unreachable or returned a non-success
    /// status. `status` is the HTTP status code, or 0 when the transport
    /// itself failed before a response arrived.
    #[error("transport error (status {status}): {message}")]
    Transport {
        /// HTTP-like status code; 0 when no response was received.
        status: u16,
        /// Human-readable description of the failure.
        message: String,
    },

    /// Precondition violated (emitted by the `ensure!` macro).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout holcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hc_core::ensure;
/// fn month_index(m: u8) -> hc_core::Result<u8> {
///     ensure!(m < 12, "month index {m} out of range [0, 12)");
///     Ok(m)
/// }
/// assert!(month_index(4).is_ok());
/// assert!(month_index(12).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
