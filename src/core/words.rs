//! Amounts in words using the Indian numbering system.
//!
//! Groups are crore (10^7), lakh (10^5), thousand (10^3) and hundred:
//! `1234567` reads "Twelve Lakh Thirty Four Thousand Five Hundred Sixty
//! Seven". Crore counts of 100 or more are themselves read with the same
//! grouping, so `10^9` is "One Hundred Crore".

use rust_decimal::Decimal;

/// Phrase appended to every amount.
pub const CURRENCY_SUFFIX: &str = "Rupees Only";

const CRORE: u128 = 10_000_000;
const LAKH: u128 = 100_000;
const THOUSAND: u128 = 1_000;
const HUNDRED: u128 = 100;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Render a currency amount in words, e.g. "One Hundred Rupees Only".
///
/// The fractional part is truncated toward zero, so paise never appear.
/// Negative amounts are prefixed with "Minus".
///
/// ```
/// use lekha::core::amount_in_words;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(amount_in_words(dec!(11800)), "Eleven Thousand Eight Hundred Rupees Only");
/// assert_eq!(amount_in_words(dec!(0)), "Zero Rupees Only");
/// ```
pub fn amount_in_words(amount: Decimal) -> String {
    let mut whole = amount.trunc();
    whole.rescale(0);
    let magnitude = whole.mantissa().unsigned_abs();

    if whole.is_sign_negative() && magnitude > 0 {
        format!("Minus {} {CURRENCY_SUFFIX}", integer_in_words(magnitude))
    } else {
        format!("{} {CURRENCY_SUFFIX}", integer_in_words(magnitude))
    }
}

/// Render a whole number in words without any currency suffix.
///
/// Zero reads "Zero".
pub fn integer_in_words(n: u128) -> String {
    if n == 0 {
        return "Zero".to_string();
    }
    let mut parts = Vec::new();
    push_groups(n, &mut parts);
    parts.join(" ")
}

fn push_groups(mut n: u128, parts: &mut Vec<&'static str>) {
    let crore = n / CRORE;
    n %= CRORE;
    let lakh = n / LAKH;
    n %= LAKH;
    let thousand = n / THOUSAND;
    n %= THOUSAND;
    let hundred = n / HUNDRED;
    n %= HUNDRED;

    if crore > 0 {
        push_groups(crore, parts);
        parts.push("Crore");
    }
    if lakh > 0 {
        push_two_digit(lakh, parts);
        parts.push("Lakh");
    }
    if thousand > 0 {
        push_two_digit(thousand, parts);
        parts.push("Thousand");
    }
    if hundred > 0 {
        parts.push(ONES[hundred as usize]);
        parts.push("Hundred");
    }
    push_two_digit(n, parts);
}

/// 0 pushes nothing; 1–99 push one or two words.
fn push_two_digit(n: u128, parts: &mut Vec<&'static str>) {
    let n = n as usize;
    match n {
        0 => {}
        1..=9 => parts.push(ONES[n]),
        10..=19 => parts.push(TEENS[n - 10]),
        _ => {
            parts.push(TENS[n / 10]);
            if n % 10 > 0 {
                parts.push(ONES[n % 10]);
            }
        }
    }
}
