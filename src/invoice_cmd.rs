//! Invoice command: validate a draft and compute its totals.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use hesab_calendar::{GregorianDate, jalali_reference};
use hesab_numerals::group_thousands;
use hesab_sales::{
    InvoiceDraft, InvoiceTotals, LastInvoice, LineItem, RawLine, resolve_invoice_number,
};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use crate::cli::InvoiceArgs;
use crate::config::HesabConfig;
use crate::convert::{self, DisplayOptions};

/// Prefix of generated sales invoice numbers.
const INVOICE_PREFIX: &str = "INV";

/// An invoice draft file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InvoiceToml {
    /// Invoice number; generated from the current time when omitted.
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub tax: f64,
    /// Form rows, as typed.
    #[serde(default)]
    pub lines: Vec<RawLine>,
    /// Invoices already stored, used to avoid duplicate numbers.
    #[serde(default)]
    pub existing: ExistingToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExistingToml {
    #[serde(default)]
    pub numbers: Vec<String>,
    pub last_id: Option<i64>,
    pub last_number: Option<String>,
}

/// What the command prints.
#[derive(Debug, Serialize)]
pub struct InvoiceReport {
    pub number: String,
    pub date: String,
    pub lines: Vec<LineItem>,
    pub rejected: usize,
    pub totals: InvoiceTotals,
    pub total_in_words: String,
}

pub fn run(args: InvoiceArgs, config: &HesabConfig) -> Result<()> {
    let _cmd = info_span!("invoice").entered();
    let display = convert::build_display(&config.display)?;
    let max_rows = match args.max_rows {
        Some(max_rows) => max_rows,
        None => convert::build_max_rows(&config.sales)?,
    };

    let doc = read_invoice(&args.file)?;
    let report = build_report(&doc, max_rows, Local::now().naive_local(), &display)?;
    info!(
        number = %report.number,
        lines = report.lines.len(),
        total = report.totals.total,
        "invoice draft computed"
    );

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize invoice")?;
        println!("{json}");
    } else {
        print!("{}", render_report(&report, &display));
    }
    Ok(())
}

fn read_invoice(path: &Path) -> Result<InvoiceToml> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read invoice file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse invoice file: {}", path.display()))
}

fn build_report(
    doc: &InvoiceToml,
    max_rows: usize,
    now: NaiveDateTime,
    display: &DisplayOptions,
) -> Result<InvoiceReport> {
    let draft = InvoiceDraft::from_rows(&doc.lines, max_rows)
        .context("invoice has no usable lines")?
        .with_discount(doc.discount)?
        .with_tax(doc.tax)?;
    if draft.rejected() > 0 {
        warn!(rejected = draft.rejected(), "some invoice rows were skipped");
    }

    let generated = jalali_reference(INVOICE_PREFIX, &now);
    let last = match (doc.existing.last_id, &doc.existing.last_number) {
        (Some(id), Some(number)) => Some(LastInvoice { id, number }),
        (Some(id), None) => Some(LastInvoice { id, number: "" }),
        (None, _) => None,
    };
    let number = resolve_invoice_number(
        &doc.number,
        &generated,
        |candidate| doc.existing.numbers.iter().any(|n| n == candidate),
        last,
    );

    let date = GregorianDate::from(now.date()).to_jalali();
    Ok(InvoiceReport {
        number,
        date: display.jalali(date),
        lines: draft.lines().to_vec(),
        rejected: draft.rejected(),
        totals: draft.totals(),
        total_in_words: draft
            .total_in_words()
            .context("invoice total cannot be written out")?,
    })
}

fn render_report(report: &InvoiceReport, display: &DisplayOptions) -> String {
    let amount = |value: f64| display.digits(group_thousands(value));
    let mut out = format!("Invoice {}  {}\n", report.number, report.date);
    for (i, line) in report.lines.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {}  {} x {} = {}\n",
            i + 1,
            line.item(),
            amount(line.qty()),
            amount(line.unit_price()),
            amount(line.line_total())
        ));
    }
    let totals = &report.totals;
    out.push_str(&format!("Subtotal: {}\n", amount(totals.subtotal)));
    if totals.discount > 0.0 {
        out.push_str(&format!("Discount: {}\n", amount(totals.discount)));
    }
    if totals.tax > 0.0 {
        out.push_str(&format!("Tax: {}\n", amount(totals.tax)));
    }
    out.push_str(&format!("Total: {}\n", amount(totals.total)));
    out.push_str(&format!("{}\n", report.total_in_words));
    out
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::config::DisplayToml;

    const DRAFT: &str = r#"
discount = 1000
tax = 3150

[[lines]]
item = "1001"
qty = "2"
unit_price = "15,000"

[[lines]]
item = ""
qty = "1"
unit_price = "500"

[[lines]]
item = "1003"
qty = "۱.۵"
unit_price = "4000"
"#;

    fn nowruz_morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 3, 21)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    fn latin() -> DisplayOptions {
        convert::build_display(&DisplayToml::default()).unwrap()
    }

    fn parse(text: &str) -> InvoiceToml {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        read_invoice(file.path()).unwrap()
    }

    #[test]
    fn totals_and_generated_number() {
        let report = build_report(&parse(DRAFT), 15, nowruz_morning(), &latin()).unwrap();
        assert_eq!(report.number, "INV-14020101-091500");
        assert_eq!(report.date, "1402/01/01");
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.totals.subtotal, 36_000.0);
        assert_eq!(report.totals.total, 38_150.0);
        assert_eq!(report.total_in_words, "سی و هشت هزار و صد و پنجاه تومان");
    }

    #[test]
    fn taken_number_gets_next_sequence() {
        let text = format!(
            "number = \"00000041\"\n{DRAFT}\n[existing]\nnumbers = [\"00000041\"]\nlast_id = 41\nlast_number = \"00000041\"\n"
        );
        let report = build_report(&parse(&text), 15, nowruz_morning(), &latin()).unwrap();
        assert_eq!(report.number, "00000042");
    }

    #[test]
    fn max_rows_limits_lines() {
        let report = build_report(&parse(DRAFT), 1, nowruz_morning(), &latin()).unwrap();
        assert_eq!(report.lines.len(), 1);
        assert_eq!(report.totals.subtotal, 30_000.0);
    }

    #[test]
    fn empty_draft_is_an_error() {
        let err = build_report(&parse(""), 15, nowruz_morning(), &latin()).unwrap_err();
        assert_eq!(err.to_string(), "invoice has no usable lines");
    }

    #[test]
    fn negative_discount_is_an_error() {
        let text = DRAFT.replace("discount = 1000", "discount = -1");
        assert!(build_report(&parse(&text), 15, nowruz_morning(), &latin()).is_err());
    }

    #[test]
    fn unknown_field_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"customer = \"x\"\n").unwrap();
        assert!(read_invoice(file.path()).is_err());
    }

    #[test]
    fn text_rendering() {
        let report = build_report(&parse(DRAFT), 15, nowruz_morning(), &latin()).unwrap();
        let text = render_report(&report, &latin());
        assert!(text.starts_with("Invoice INV-14020101-091500  1402/01/01\n"));
        assert!(text.contains("  1. 1001  2 x 15,000 = 30,000\n"));
        assert!(text.contains("  2. 1003  1.50 x 4,000 = 6,000\n"));
        assert!(text.contains("Total: 38,150\n"));
    }
}
