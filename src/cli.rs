use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Jalali calendar, amount and sales-form toolkit.
#[derive(Parser)]
#[command(
    name = "hesab",
    version,
    about = "Jalali dates, Persian amounts and invoice drafts"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./hesab.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert dates between the Jalali and Gregorian calendars.
    Date(DateArgs),
    /// Print the current date in both calendars as JSON.
    Now,
    /// Format amounts or write them out in Persian words.
    Amount(AmountArgs),
    /// Build search URLs or inspect saved search responses.
    Search(SearchArgs),
    /// Compute the totals of an invoice draft.
    Invoice(InvoiceArgs),
}

#[derive(clap::Args)]
pub struct DateArgs {
    #[command(subcommand)]
    pub command: DateCommand,
}

#[derive(Subcommand)]
pub enum DateCommand {
    /// Gregorian `YYYY-MM-DD` to Jalali.
    ToJalali {
        /// Gregorian date; Persian digits and `/` are accepted.
        date: String,
    },
    /// Jalali `YYYY/MM/DD` to Gregorian ISO.
    ToGregorian {
        /// Jalali date; Persian digits and `-` are accepted.
        date: String,
    },
    /// Length of a Jalali month.
    Month {
        /// Jalali year.
        year: i32,
        /// Jalali month (1..=12).
        month: u32,
    },
}

#[derive(clap::Args)]
pub struct AmountArgs {
    #[command(subcommand)]
    pub command: AmountCommand,
}

#[derive(Subcommand)]
pub enum AmountCommand {
    /// Write an amount out in toman words.
    Words {
        /// Amount; separators and Persian digits are accepted.
        amount: String,
    },
    /// Group an amount by thousands.
    Format {
        /// Amount; separators and Persian digits are accepted.
        amount: String,
    },
}

#[derive(clap::Args)]
pub struct SearchArgs {
    #[command(subcommand)]
    pub command: SearchCommand,
}

#[derive(Subcommand)]
pub enum SearchCommand {
    /// Print the search URL an autocomplete field would request.
    Url {
        /// Kind of record (item, person, invoice, receive, payment, cash, all).
        #[arg(short, long, default_value = "all")]
        kind: String,

        /// Maximum number of results (1..=50).
        #[arg(short, long)]
        limit: Option<usize>,

        /// Search term.
        term: String,
    },
    /// Decode a saved search response and print its suggestions.
    Show {
        /// Path to the JSON response body.
        file: PathBuf,

        /// Only show results of this kind.
        #[arg(short, long, default_value = "all")]
        kind: String,

        /// Maximum number of suggestions (1..=50).
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

#[derive(clap::Args)]
pub struct InvoiceArgs {
    /// Path to the invoice draft TOML file.
    pub file: PathBuf,

    /// Override `[sales].max_rows` from config.
    #[arg(long)]
    pub max_rows: Option<usize>,

    /// Print the totals as JSON.
    #[arg(long)]
    pub json: bool,
}
