//! Display helpers for rupee amounts and dates in the en-IN convention.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as Indian rupees with lakh/crore digit grouping.
///
/// Rounds half away from zero to two decimal places. The last three
/// integer digits form one group and the rest are grouped in pairs.
///
/// ```
/// use lekha::core::format_inr;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_inr(dec!(1234567.5)), "₹12,34,567.50");
/// assert_eq!(format_inr(dec!(-999)), "-₹999.00");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let digits = rounded.abs().to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!("{sign}₹{}.{fraction}", group_indian(integer))
}

/// Insert separators into a run of ASCII digits: `1234567` → `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);

    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            out.push(',');
        }
        // ASCII digits only
        out.push(pair[0] as char);
        out.push(pair[1] as char);
    }
    out.push(',');
    out.push_str(last_three);
    out
}

/// Format a date as `05 Jan 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}
