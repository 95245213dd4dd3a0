//! Core document types, the calculation engine and amount-in-words.
//!
//! Everything here is pure: no I/O, no shared state. [`compute`] turns a
//! [`Document`] into a [`Breakdown`]; [`validate_document`] is the input
//! check callers run first.

mod builder;
mod calculation;
mod error;
pub mod format;
mod types;
mod validation;
pub mod words;

pub use builder::*;
pub use calculation::*;
pub use error::*;
pub use format::{format_date, format_inr};
pub use types::*;
pub use validation::*;
pub use words::{CURRENCY_SUFFIX, amount_in_words, integer_in_words};
