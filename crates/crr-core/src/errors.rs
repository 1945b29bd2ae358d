//! Error types for crr-rs.
//!
//! A single `thiserror`-derived enum covers every failure the pricing
//! stack can report. Preconditions on model inputs go through the
//! [`ensure!`](crate::ensure) macro, which maps to
//! [`Error::InvalidParameter`].

use thiserror::Error;

/// The top-level error type used throughout crr-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A model input is outside its admissible domain (e.g. `steps == 0`,
    /// non-positive maturity, negative volatility).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Lattice access beyond the built depth.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The number of columns in the lattice.
        size: usize,
    },

    /// Invalid argument to a pure formula (zero bump, mismatched lattices).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout crr-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use crr_core::{ensure, errors::Error};
/// fn positive(x: f64) -> crr_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidParameter(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_steps(steps: usize) -> Result<usize> {
        ensure!(steps >= 1, "steps must be >= 1, got {steps}");
        Ok(steps)
    }

    #[test]
    fn ensure_maps_to_invalid_parameter() {
        assert_eq!(check_steps(4), Ok(4));
        let err = check_steps(0).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidParameter("steps must be >= 1, got 0".into())
        );
    }

    #[test]
    fn index_out_of_range_message() {
        let err = Error::IndexOutOfRange { index: 2, size: 2 };
        assert_eq!(err.to_string(), "index (2) out of range [0, 2)");
    }
}
