//! Error types for the optional checked surfaces.
//!
//! The generator arithmetic itself never fails. These errors only come from
//! the additive APIs:
//! - `RandomizerError`: checked draws with bounds outside the `i32` range
//! - `SeedError`: parsing a textual seed specification

use thiserror::Error;

/// Errors from checked draw operations.
///
/// # Examples
/// ```
/// use randomizer_core::RandomizerError;
///
/// let err = RandomizerError::BoundOutOfRange { max: 1 << 40 };
/// assert_eq!(
///     format!("{}", err),
///     "Bound out of range: 1099511627776 does not fit in a 32-bit integer"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomizerError {
    /// The requested upper bound cannot be represented as an `i32`.
    #[error("Bound out of range: {max} does not fit in a 32-bit integer")]
    BoundOutOfRange {
        /// The rejected bound
        max: i64,
    },
}

/// Errors from parsing a seed specification.
///
/// # Examples
/// ```
/// use randomizer_core::SeedError;
///
/// let err = SeedError::Invalid("tomorrow".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid seed 'tomorrow': expected 'clock' or an integer"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The text was neither `clock` nor a decimal integer.
    #[error("Invalid seed '{0}': expected 'clock' or an integer")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_out_of_range_display() {
        let err = RandomizerError::BoundOutOfRange { max: -3_000_000_000 };
        assert!(err.to_string().contains("-3000000000"));
        assert!(err.to_string().starts_with("Bound out of range"));
    }

    #[test]
    fn test_seed_error_display() {
        let err = SeedError::Invalid(String::new());
        assert!(err.to_string().contains("expected 'clock' or an integer"));
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<RandomizerError>();
        assert_error::<SeedError>();
    }
}
