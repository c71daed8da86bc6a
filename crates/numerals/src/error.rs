//! Error types for the hesab-numerals crate.

/// Error type for all fallible operations in the hesab-numerals crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumeralsError {
    /// Returned when text cannot be read as a number.
    #[error("value is not a valid number: {input:?}")]
    NotANumber {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned for NaN or infinite amounts.
    #[error("amount must be finite, got {value}")]
    NonFinite {
        /// The non-finite value.
        value: f64,
    },

    /// Returned when a rounded amount does not fit in an `i64`.
    #[error("amount {value} is out of range for number words")]
    OutOfRange {
        /// The amount that was too large.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_not_a_number() {
        let err = NumeralsError::NotANumber {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "value is not a valid number: \"abc\"");
    }

    #[test]
    fn error_non_finite() {
        let err = NumeralsError::NonFinite { value: f64::INFINITY };
        assert_eq!(err.to_string(), "amount must be finite, got inf");
    }

    #[test]
    fn error_out_of_range() {
        let err = NumeralsError::OutOfRange { value: 1e30 };
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<NumeralsError>();
    }
}
