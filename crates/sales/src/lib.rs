//! # hesab-sales
//!
//! The arithmetic behind the sales form: rows typed by the user become
//! validated [`LineItem`]s, collected into an [`InvoiceDraft`] whose totals
//! and total-in-words are shown live while the form is filled in.
//!
//! ## Quick Start
//!
//! ```
//! use hesab_sales::{DEFAULT_MAX_ROWS, InvoiceDraft, RawLine};
//!
//! let rows = vec![
//!     RawLine::new("1001", "2", "15,000"),
//!     RawLine::new("", "1", "500"), // no item: skipped
//! ];
//! let draft = InvoiceDraft::from_rows(&rows, DEFAULT_MAX_ROWS).unwrap();
//! assert_eq!(draft.total(), 30_000.0);
//! assert_eq!(draft.total_in_words().unwrap(), "سی هزار تومان");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `line` | Raw form rows and validated lines |
//! | `draft` | Row filtering and invoice totals |
//! | `number` | Invoice numbering |
//! | `error` | Error types |

mod draft;
mod error;
mod line;
mod number;

pub use draft::{DEFAULT_MAX_ROWS, InvoiceDraft, InvoiceTotals};
pub use error::SalesError;
pub use line::{LineItem, RawLine};
pub use number::{LastInvoice, next_invoice_number, resolve_invoice_number};
