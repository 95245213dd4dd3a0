//! Property-based tests for the calculation engine and amount-in-words.
//!
//! Run with: `cargo test --test proptest_tests`

use chrono::NaiveDate;
use lekha::core::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn build(lines: Vec<LineItem>, shipping: Decimal, charges: Vec<Decimal>, rounding: RoundingPolicy) -> Document {
    let mut builder = DocumentBuilder::new(
        DocumentType::Invoice,
        "DA-INV-PROP",
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
    )
    .company(CompanyBuilder::new("Design Arena", "Mumbai").build())
    .bill_to(BillToBuilder::new("Kunal Traders", "Pune").build())
    .shipping(shipping)
    .rounding(rounding);
    for line in lines {
        builder = builder.add_line(line);
    }
    for (i, amount) in charges.into_iter().enumerate() {
        builder = builder.add_charge(format!("Charge {}", i + 1), amount);
    }
    builder.build().unwrap()
}

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Price from -999.99 to 99999.99; negatives model credit lines.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (-99_999i64..10_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

/// Quantity 0 to 100 in steps of 0.5.
fn arb_quantity() -> impl Strategy<Value = Decimal> {
    (0u32..=200u32).prop_map(|halves| Decimal::from(halves) / dec!(2))
}

fn arb_discount() -> impl Strategy<Value = Option<Discount>> {
    prop_oneof![
        Just(None),
        (0u32..=150u32).prop_map(|p| Some(Discount::Percent(Decimal::from(p)))),
        (0i64..500_000i64).prop_map(|paise| Some(Discount::Fixed(Decimal::new(paise, 2)))),
    ]
}

fn arb_taxes() -> impl Strategy<Value = Vec<TaxComponent>> {
    prop_oneof![
        Just(vec![]),
        Just(vec![
            TaxComponent::new("CGST", dec!(9)),
            TaxComponent::new("SGST", dec!(9)),
        ]),
        Just(vec![
            TaxComponent::new("CGST", dec!(2.5)),
            TaxComponent::new("SGST", dec!(2.5)),
        ]),
        Just(vec![TaxComponent::new("IGST", dec!(28)), TaxComponent::new("Cess", dec!(12))]),
        Just(vec![TaxComponent::new("IGST", dec!(12))]),
    ]
}

fn arb_line() -> impl Strategy<Value = LineItem> {
    (arb_quantity(), arb_price(), arb_discount(), arb_taxes()).prop_map(
        |(quantity, unit_price, discount, tax)| LineItem {
            description: "Item".into(),
            hsn_sac: Some("9983".into()),
            quantity,
            unit: "pcs".into(),
            unit_price,
            discount,
            tax,
        },
    )
}

fn arb_rounding() -> impl Strategy<Value = RoundingPolicy> {
    prop_oneof![
        Just(RoundingPolicy::Nearest),
        Just(RoundingPolicy::Up),
        Just(RoundingPolicy::Down),
        Just(RoundingPolicy::None),
    ]
}

fn arb_document() -> impl Strategy<Value = Document> {
    (
        prop::collection::vec(arb_line(), 1..=6),
        (0i64..100_000i64).prop_map(|p| Decimal::new(p, 2)),
        prop::collection::vec((-10_000i64..100_000i64).prop_map(|p| Decimal::new(p, 2)), 0..=3),
        arb_rounding(),
    )
        .prop_map(|(lines, shipping, charges, rounding)| build(lines, shipping, charges, rounding))
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// compute() output always satisfies validate_breakdown().
    #[test]
    fn breakdown_is_consistent(doc in arb_document()) {
        let b = compute(&doc);
        let errors = validate_breakdown(&doc, &b);
        prop_assert!(errors.is_empty(), "arithmetic errors: {:?}", errors);
    }

    /// Lines without discount: total = subtotal + tax, tax = subtotal × Σrates / 100.
    #[test]
    fn undiscounted_line_identity(line in arb_line()) {
        let line = LineItem { discount: None, ..line };
        let calc = calculate_line(&line);
        let rates: Decimal = line.tax.iter().map(|t| t.rate).sum();
        prop_assert_eq!(calc.total, calc.subtotal + calc.tax_amount);
        prop_assert_eq!(calc.tax_amount, calc.subtotal * rates / dec!(100));
    }

    /// subtotal − total_discount + total_tax = Σ line totals.
    #[test]
    fn line_totals_sum_to_document_net(doc in arb_document()) {
        let b = compute(&doc);
        let line_sum: Decimal = b.line_items.iter().map(|l| l.total).sum();
        prop_assert_eq!(b.subtotal - b.total_discount + b.total_tax, line_sum);
        prop_assert_eq!(
            b.subtotal_before_rounding - b.shipping - b.additional_charges_total,
            line_sum
        );
    }

    /// Σ tax breakdown = Σ line tax amounts = total_tax.
    #[test]
    fn tax_breakdown_matches_line_taxes(doc in arb_document()) {
        let b = compute(&doc);
        let line_tax: Decimal = b.line_items.iter().map(|l| l.tax_amount).sum();
        prop_assert_eq!(b.tax_breakdown.total(), b.total_tax);
        prop_assert_eq!(line_tax, b.total_tax);
    }

    /// Rounding moves the total by less than one rupee, in the policy's direction.
    #[test]
    fn rounding_adjustment_follows_policy(doc in arb_document()) {
        let b = compute(&doc);
        let adj = b.rounding_adjustment;
        prop_assert_eq!(b.grand_total, b.subtotal_before_rounding + adj);
        match doc.rounding {
            RoundingPolicy::Nearest => {
                prop_assert!(adj.abs() <= dec!(0.5));
                prop_assert_eq!(b.grand_total.fract(), Decimal::ZERO);
            }
            RoundingPolicy::Up => {
                prop_assert!(adj >= Decimal::ZERO && adj < Decimal::ONE);
                prop_assert_eq!(b.grand_total.fract(), Decimal::ZERO);
            }
            RoundingPolicy::Down => {
                prop_assert!(adj <= Decimal::ZERO && adj > -Decimal::ONE);
                prop_assert_eq!(b.grand_total.fract(), Decimal::ZERO);
            }
            RoundingPolicy::None => {
                prop_assert!(adj.is_zero());
            }
        }
    }

    /// Words always describe the rounded grand total.
    #[test]
    fn words_describe_grand_total(doc in arb_document()) {
        let b = compute(&doc);
        prop_assert_eq!(&b.amount_in_words, &amount_in_words(b.grand_total));
    }

    /// Words never panic, always end with the suffix, and never contain double spaces.
    #[test]
    fn words_are_well_formed(n in any::<u64>()) {
        let words = amount_in_words(Decimal::from(n));
        prop_assert!(words.ends_with(CURRENCY_SUFFIX));
        prop_assert!(!words.contains("  "));
        prop_assert!(!words.starts_with(' '));
        prop_assert_eq!(words == "Zero Rupees Only", n == 0);
    }

    /// Fractions are truncated, never rounded.
    #[test]
    fn words_truncate_fraction(n in 0u32..1_000_000_000u32, paise in 0u32..100u32) {
        let amount = Decimal::from(n) + Decimal::new(i64::from(paise), 2);
        prop_assert_eq!(amount_in_words(amount), amount_in_words(Decimal::from(n)));
    }
}
