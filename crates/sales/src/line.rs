//! Sales-form rows.

use hesab_numerals::parse_amount_or;
use serde::{Deserialize, Serialize};

use crate::error::SalesError;

/// A row exactly as typed into the sales form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLine {
    /// Item code or id picked through the item search.
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub qty: String,
    #[serde(default)]
    pub unit_price: String,
}

impl RawLine {
    pub fn new(item: &str, qty: &str, unit_price: &str) -> Self {
        Self {
            item: item.to_string(),
            qty: qty.to_string(),
            unit_price: unit_price.to_string(),
        }
    }
}

/// A validated invoice line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    item: String,
    qty: f64,
    unit_price: f64,
}

impl LineItem {
    /// Creates a line.
    ///
    /// # Errors
    ///
    /// Returns [`SalesError::MissingItem`] for a blank item,
    /// [`SalesError::InvalidQuantity`] unless `qty > 0`, and
    /// [`SalesError::InvalidUnitPrice`] unless `unit_price >= 0`.
    pub fn new(item: &str, qty: f64, unit_price: f64) -> Result<Self, SalesError> {
        let item = item.trim();
        if item.is_empty() {
            return Err(SalesError::MissingItem);
        }
        if !(qty.is_finite() && qty > 0.0) {
            return Err(SalesError::InvalidQuantity { qty });
        }
        if !(unit_price.is_finite() && unit_price >= 0.0) {
            return Err(SalesError::InvalidUnitPrice { unit_price });
        }
        Ok(Self {
            item: item.to_string(),
            qty,
            unit_price,
        })
    }

    /// Parses a form row. Blank or unreadable numbers count as zero, so a
    /// row without a quantity is rejected.
    ///
    /// # Errors
    ///
    /// Same as [`LineItem::new`].
    pub fn from_raw(raw: &RawLine) -> Result<Self, SalesError> {
        Self::new(
            &raw.item,
            parse_amount_or(&raw.qty, 0.0),
            parse_amount_or(&raw.unit_price, 0.0),
        )
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn qty(&self) -> f64 {
        self.qty
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    /// `qty * unit_price`.
    pub fn line_total(&self) -> f64 {
        self.qty * self.unit_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_line() {
        let line = LineItem::new(" 1001 ", 2.0, 15_000.0).unwrap();
        assert_eq!(line.item(), "1001");
        assert_eq!(line.line_total(), 30_000.0);
    }

    #[test]
    fn free_item_is_allowed() {
        assert!(LineItem::new("1001", 1.0, 0.0).is_ok());
    }

    #[test]
    fn missing_item() {
        assert_eq!(
            LineItem::new("  ", 1.0, 1.0).unwrap_err(),
            SalesError::MissingItem
        );
    }

    #[test]
    fn zero_or_negative_quantity() {
        assert_eq!(
            LineItem::new("1001", 0.0, 1.0).unwrap_err(),
            SalesError::InvalidQuantity { qty: 0.0 }
        );
        assert!(LineItem::new("1001", -1.0, 1.0).is_err());
        assert!(LineItem::new("1001", f64::NAN, 1.0).is_err());
    }

    #[test]
    fn negative_price() {
        assert_eq!(
            LineItem::new("1001", 1.0, -10.0).unwrap_err(),
            SalesError::InvalidUnitPrice { unit_price: -10.0 }
        );
    }

    #[test]
    fn from_raw_parses_grouped_persian_numbers() {
        let line = LineItem::from_raw(&RawLine::new("1001", "۳", "۱۲,۵۰۰")).unwrap();
        assert_eq!(line.qty(), 3.0);
        assert_eq!(line.unit_price(), 12_500.0);
    }

    #[test]
    fn from_raw_blank_quantity_is_rejected() {
        assert_eq!(
            LineItem::from_raw(&RawLine::new("1001", "", "100")).unwrap_err(),
            SalesError::InvalidQuantity { qty: 0.0 }
        );
    }

    #[test]
    fn from_raw_blank_price_is_zero() {
        let line = LineItem::from_raw(&RawLine::new("1001", "1", "")).unwrap();
        assert_eq!(line.unit_price(), 0.0);
    }
}
