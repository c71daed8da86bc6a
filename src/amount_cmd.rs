//! Amount commands: thousands grouping and toman words.

use anyhow::{Context, Result};
use hesab_numerals::{amount_to_toman_words, group_thousands, parse_amount};
use tracing::info_span;

use crate::cli::{AmountArgs, AmountCommand};
use crate::config::HesabConfig;
use crate::convert::{self, DisplayOptions};

pub fn run(args: AmountArgs, config: &HesabConfig) -> Result<()> {
    let display = convert::build_display(&config.display)?;
    let line = match args.command {
        AmountCommand::Words { amount } => {
            let _cmd = info_span!("amount_words").entered();
            words(&amount)?
        }
        AmountCommand::Format { amount } => {
            let _cmd = info_span!("amount_format").entered();
            format_amount(&amount, &display)?
        }
    };
    println!("{line}");
    Ok(())
}

fn parse(text: &str) -> Result<f64> {
    parse_amount(text).with_context(|| format!("not a number: {text:?}"))
}

fn words(text: &str) -> Result<String> {
    let amount = parse(text)?;
    amount_to_toman_words(amount).with_context(|| format!("cannot spell out {text:?}"))
}

fn format_amount(text: &str, display: &DisplayOptions) -> Result<String> {
    let amount = parse(text)?;
    Ok(display.digits(group_thousands(amount)))
}
