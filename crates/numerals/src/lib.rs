//! # hesab-numerals
//!
//! Number handling shared by the sales, receive and payment forms: Persian
//! digit rendering, lenient parsing of typed amounts, thousands grouping and
//! amounts written out in Persian words.
//!
//! ## Quick Start
//!
//! ```
//! use hesab_numerals::{amount_to_toman_words, group_thousands, parse_amount, to_persian_digits};
//!
//! let amount = parse_amount("۱,۲۵۰,۰۰۰").unwrap();
//! assert_eq!(amount, 1_250_000.0);
//! assert_eq!(group_thousands(amount), "1,250,000");
//! assert_eq!(to_persian_digits("1402"), "۱۴۰۲");
//! assert_eq!(
//!     amount_to_toman_words(amount).unwrap(),
//!     "یک میلیون و دویست و پنجاه هزار تومان"
//! );
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `digits` | Persian / Arabic-Indic / Latin digit conversion |
//! | `parse` | Lenient amount parsing for form input |
//! | `group` | Thousands-separated display formatting |
//! | `words` | Persian number words |
//! | `error` | Error types |

mod digits;
mod error;
mod group;
mod parse;
mod words;

pub use digits::{to_latin_digits, to_persian_digits};
pub use error::NumeralsError;
pub use group::{format_compact, group_thousands};
pub use parse::{parse_amount, parse_amount_or};
pub use words::{
    amount_text_to_toman_words, amount_to_toman_words, amount_to_words, number_to_words,
};
