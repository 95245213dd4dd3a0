use rust_decimal::Decimal;
use tracing::{debug, trace};

use super::types::*;
use super::words::amount_in_words;

/// Compute the full financial breakdown of a document.
///
/// Pure and deterministic: the document is only read, and every figure is
/// recomputed on each call. Sums run in line order. Rounding touches the
/// grand total only; line figures and the tax breakdown stay unrounded.
///
/// ```
/// use lekha::core::*;
/// use rust_decimal_macros::dec;
/// # use chrono::NaiveDate;
/// # let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
///
/// let doc = DocumentBuilder::new(DocumentType::Invoice, "INV-001", date)
///     .company(CompanyBuilder::new("Design Arena", "Mumbai").build())
///     .bill_to(BillToBuilder::new("Acme Pvt Ltd", "Pune").build())
///     .add_line(LineItemBuilder::new("Logo design", dec!(2), "project", dec!(5000)).gst(dec!(18)).build())
///     .build()
///     .unwrap();
///
/// let breakdown = compute(&doc);
/// assert_eq!(breakdown.grand_total, dec!(11800));
/// assert_eq!(breakdown.amount_in_words, "Eleven Thousand Eight Hundred Rupees Only");
/// ```
///
/// # Panics
///
/// Decimal arithmetic panics on overflow. Documents accepted by
/// [`validate_document`](super::validate_document) stay far below that limit.
pub fn compute(document: &Document) -> Breakdown {
    let line_items: Vec<CalculatedLineItem> =
        document.line_items.iter().map(calculate_line).collect();

    let subtotal: Decimal = line_items.iter().map(|l| l.subtotal).sum();
    let total_discount: Decimal = line_items.iter().map(|l| l.discount_amount).sum();

    // Same terms as the per-line tax sums, regrouped by component name.
    let mut tax_breakdown = TaxBreakdown::new();
    for line in &line_items {
        let base = line.taxable_base();
        for component in &line.item.tax {
            tax_breakdown.add(&component.name, component.amount_on(base));
        }
    }
    let total_tax = tax_breakdown.total();

    let additional_charges_total: Decimal =
        document.additional_charges.iter().map(|c| c.amount).sum();

    let subtotal_before_rounding =
        subtotal - total_discount + total_tax + document.shipping + additional_charges_total;

    let grand_total = document.rounding.apply(subtotal_before_rounding);
    let rounding_adjustment = grand_total - subtotal_before_rounding;

    debug!(
        doc_no = %document.doc_no,
        lines = line_items.len(),
        %subtotal_before_rounding,
        %grand_total,
        "computed document breakdown"
    );

    Breakdown {
        line_items,
        subtotal,
        total_discount,
        tax_breakdown,
        total_tax,
        shipping: document.shipping,
        additional_charges_total,
        subtotal_before_rounding,
        rounding_adjustment,
        grand_total,
        amount_in_words: amount_in_words(grand_total),
    }
}

/// Compute subtotal, discount, tax and total for a single line.
///
/// Each tax component is applied to the same discounted base; taxes never
/// compound. A discount larger than the subtotal yields a negative base and
/// negative tax.
pub fn calculate_line(item: &LineItem) -> CalculatedLineItem {
    let subtotal = item.quantity * item.unit_price;
    let discount_amount = item
        .discount
        .map(|d| d.amount_for(subtotal))
        .unwrap_or(Decimal::ZERO);
    let taxable_base = subtotal - discount_amount;
    let tax_amount: Decimal = item.tax.iter().map(|t| t.amount_on(taxable_base)).sum();
    let total = taxable_base + tax_amount;

    trace!(
        description = %item.description,
        %subtotal,
        %discount_amount,
        %tax_amount,
        %total,
        "calculated line"
    );

    CalculatedLineItem {
        item: item.clone(),
        subtotal,
        discount_amount,
        tax_amount,
        total,
    }
}
