//! Invoice drafts built from sales-form rows.

use hesab_numerals::{NumeralsError, amount_to_toman_words};
use serde::Serialize;
use tracing::debug;

use crate::error::SalesError;
use crate::line::{LineItem, RawLine};

/// Rows the sales form accepts per invoice.
pub const DEFAULT_MAX_ROWS: usize = 15;

/// Amounts shown in the invoice footer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub total: f64,
}

/// A sales invoice being entered: validated lines plus adjustments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDraft {
    lines: Vec<LineItem>,
    discount: f64,
    tax: f64,
    rejected: usize,
}

impl InvoiceDraft {
    /// Builds a draft from form rows.
    ///
    /// Invalid rows (blank item, no quantity, negative price) are skipped.
    /// At most `max_rows` lines are kept; rows after the limit is reached are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SalesError::InvalidMaxRows`] if `max_rows` is zero and
    /// [`SalesError::NoValidLines`] if no row is valid.
    pub fn from_rows(rows: &[RawLine], max_rows: usize) -> Result<Self, SalesError> {
        if max_rows == 0 {
            return Err(SalesError::InvalidMaxRows { max_rows });
        }
        let mut lines = Vec::with_capacity(rows.len().min(max_rows));
        let mut rejected = 0;
        for (row, raw) in rows.iter().enumerate() {
            match LineItem::from_raw(raw) {
                Ok(line) => lines.push(line),
                Err(e) => {
                    debug!(row, error = %e, "skipping sales row");
                    rejected += 1;
                }
            }
            if lines.len() >= max_rows {
                break;
            }
        }
        if lines.is_empty() {
            return Err(SalesError::NoValidLines);
        }
        Ok(Self {
            lines,
            discount: 0.0,
            tax: 0.0,
            rejected,
        })
    }

    /// Sets the invoice-level discount.
    ///
    /// # Errors
    ///
    /// Returns [`SalesError::InvalidAdjustment`] for negative or non-finite values.
    pub fn with_discount(mut self, discount: f64) -> Result<Self, SalesError> {
        self.discount = check_adjustment("discount", discount)?;
        Ok(self)
    }

    /// Sets the invoice-level tax.
    ///
    /// # Errors
    ///
    /// Returns [`SalesError::InvalidAdjustment`] for negative or non-finite values.
    pub fn with_tax(mut self, tax: f64) -> Result<Self, SalesError> {
        self.tax = check_adjustment("tax", tax)?;
        Ok(self)
    }

    /// Accepted lines, in form order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Number of rows skipped as invalid.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Sum of line totals.
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// `subtotal - discount + tax`.
    pub fn total(&self) -> f64 {
        self.subtotal() - self.discount + self.tax
    }

    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals {
            subtotal: self.subtotal(),
            discount: self.discount,
            tax: self.tax,
            total: self.total(),
        }
    }

    /// The total written out in toman words, as shown under the total field.
    ///
    /// # Errors
    ///
    /// Propagates [`NumeralsError`] for totals too large to spell out.
    pub fn total_in_words(&self) -> Result<String, NumeralsError> {
        amount_to_toman_words(self.total())
    }
}

fn check_adjustment(name: &'static str, value: f64) -> Result<f64, SalesError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SalesError::InvalidAdjustment { name, value })
    }
}
