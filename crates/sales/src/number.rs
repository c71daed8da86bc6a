//! Invoice numbering.

use hesab_numerals::to_latin_digits;

/// The most recently stored invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastInvoice<'a> {
    /// Database id.
    pub id: i64,
    /// Invoice number as stored.
    pub number: &'a str,
}

/// Next sequential invoice number, zero-padded to eight digits.
///
/// Follows the last number when it is purely numeric, otherwise the last
/// id; `00000001` when there is no invoice yet.
pub fn next_invoice_number(last: Option<LastInvoice<'_>>) -> String {
    let Some(last) = last else {
        return format!("{:08}", 1);
    };
    let number = to_latin_digits(last.number.trim());
    let following = if !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) {
        number.parse::<u64>().ok().and_then(|n| n.checked_add(1))
    } else {
        None
    };
    match following {
        Some(next) => format!("{next:08}"),
        None => format!("{:08}", last.id.saturating_add(1)),
    }
}

/// Number to store for a new invoice.
///
/// Uses the number typed in the form, or the pre-generated Jalali reference
/// when the field was left blank. If that number is already `taken`, falls
/// back to [`next_invoice_number`].
pub fn resolve_invoice_number(
    typed: &str,
    generated: &str,
    taken: impl Fn(&str) -> bool,
    last: Option<LastInvoice<'_>>,
) -> String {
    let typed = typed.trim();
    let candidate = if typed.is_empty() { generated } else { typed };
    if taken(candidate) {
        next_invoice_number(last)
    } else {
        candidate.to_string()
    }
}
