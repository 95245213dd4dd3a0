//! Amount-in-words and display formatting.

use chrono::NaiveDate;
use lekha::core::*;
use rust_decimal_macros::dec;

#[test]
fn zero() {
    assert_eq!(amount_in_words(dec!(0)), "Zero Rupees Only");
    assert_eq!(amount_in_words(dec!(0.00)), "Zero Rupees Only");
}

#[test]
fn exact_hundred() {
    assert_eq!(amount_in_words(dec!(100)), "One Hundred Rupees Only");
}

#[test]
fn lakh_grouping() {
    assert_eq!(
        amount_in_words(dec!(1234567)),
        "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven Rupees Only"
    );
}

#[test]
fn crore_boundary() {
    assert_eq!(amount_in_words(dec!(10000000)), "One Crore Rupees Only");
    assert_eq!(
        amount_in_words(dec!(9999999)),
        "Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine Rupees Only"
    );
}

#[test]
fn teens_inside_groups() {
    insta::assert_snapshot!(
        amount_in_words(dec!(1115113)),
        @"Eleven Lakh Fifteen Thousand One Hundred Thirteen Rupees Only"
    );
    insta::assert_snapshot!(
        amount_in_words(dec!(19019)),
        @"Nineteen Thousand Nineteen Rupees Only"
    );
}

#[test]
fn skipped_groups_leave_no_gaps() {
    insta::assert_snapshot!(amount_in_words(dec!(10000100)), @"One Crore One Hundred Rupees Only");
    insta::assert_snapshot!(amount_in_words(dec!(100005)), @"One Lakh Five Rupees Only");
    insta::assert_snapshot!(amount_in_words(dec!(2000050)), @"Twenty Lakh Fifty Rupees Only");
}

#[test]
fn large_amounts() {
    insta::assert_snapshot!(
        amount_in_words(dec!(987654321)),
        @"Ninety Eight Crore Seventy Six Lakh Fifty Four Thousand Three Hundred Twenty One Rupees Only"
    );
    insta::assert_snapshot!(
        amount_in_words(dec!(1000000000)),
        @"One Hundred Crore Rupees Only"
    );
}

#[test]
fn paise_are_truncated() {
    assert_eq!(
        amount_in_words(dec!(11800.99)),
        "Eleven Thousand Eight Hundred Rupees Only"
    );
}

#[test]
fn negative_amounts_are_signed() {
    assert_eq!(
        amount_in_words(dec!(-2450)),
        "Minus Two Thousand Four Hundred Fifty Rupees Only"
    );
}

#[test]
fn integer_words_have_no_suffix() {
    assert_eq!(integer_in_words(0), "Zero");
    assert_eq!(integer_in_words(42), "Forty Two");
    assert!(!integer_in_words(100_000).contains(CURRENCY_SUFFIX));
}

// --- Formatting ---

#[test]
fn inr_formatting() {
    insta::assert_snapshot!(format_inr(dec!(11800)), @"₹11,800.00");
    insta::assert_snapshot!(format_inr(dec!(1234567.891)), @"₹12,34,567.89");
    insta::assert_snapshot!(format_inr(dec!(10000000)), @"₹1,00,00,000.00");
    insta::assert_snapshot!(format_inr(dec!(-1234.5)), @"-₹1,234.50");
    insta::assert_snapshot!(format_inr(dec!(0.125)), @"₹0.13");
}

#[test]
fn date_formatting() {
    let d = NaiveDate::from_ymd_opt(2025, 11, 30).unwrap();
    assert_eq!(format_date(d), "30 Nov 2025");
}
