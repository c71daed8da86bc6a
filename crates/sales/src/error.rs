//! Error types for the hesab-sales crate.

/// Error type for all fallible operations in the hesab-sales crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SalesError {
    /// Returned when a row has no item reference.
    #[error("line has no item")]
    MissingItem,

    /// Returned when a quantity is not a positive finite number.
    #[error("quantity must be > 0, got {qty}")]
    InvalidQuantity {
        /// The rejected quantity.
        qty: f64,
    },

    /// Returned when a unit price is negative or not finite.
    #[error("unit price must be >= 0, got {unit_price}")]
    InvalidUnitPrice {
        /// The rejected unit price.
        unit_price: f64,
    },

    /// Returned when a discount or tax is negative or not finite.
    #[error("{name} must be >= 0, got {value}")]
    InvalidAdjustment {
        /// `"discount"` or `"tax"`.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Returned when the row limit is zero.
    #[error("max rows must be >= 1, got {max_rows}")]
    InvalidMaxRows {
        /// The rejected limit.
        max_rows: usize,
    },

    /// Returned when no row survives validation.
    #[error("invoice needs at least one valid line with a quantity")]
    NoValidLines,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_quantity() {
        let err = SalesError::InvalidQuantity { qty: 0.0 };
        assert_eq!(err.to_string(), "quantity must be > 0, got 0");
    }

    #[test]
    fn error_invalid_unit_price() {
        let err = SalesError::InvalidUnitPrice { unit_price: -5.0 };
        assert_eq!(err.to_string(), "unit price must be >= 0, got -5");
    }

    #[test]
    fn error_invalid_adjustment() {
        let err = SalesError::InvalidAdjustment {
            name: "discount",
            value: -1.5,
        };
        assert_eq!(err.to_string(), "discount must be >= 0, got -1.5");
    }

    #[test]
    fn error_no_valid_lines() {
        assert_eq!(
            SalesError::NoValidLines.to_string(),
            "invoice needs at least one valid line with a quantity"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SalesError>();
    }
}
