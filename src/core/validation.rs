use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::*;

/// Largest accepted quantity on a line.
pub const MAX_QUANTITY: Decimal = dec!(1000000000);
/// Largest accepted absolute currency amount (unit price, shipping, charge, fixed discount).
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);
/// Largest accepted percentage (tax rate or percent discount).
pub const MAX_RATE: Decimal = dec!(1000);
/// Largest accepted sum of absolute line, discount, tax, shipping and charge amounts.
pub const MAX_DOCUMENT_AMOUNT: Decimal = dec!(10000000000000);
/// Decimal places accepted on quantities.
pub const MAX_QUANTITY_SCALE: u32 = 3;
/// Decimal places accepted on currency amounts.
pub const MAX_AMOUNT_SCALE: u32 = 2;
/// Decimal places accepted on percentages.
pub const MAX_RATE_SCALE: u32 = 3;
pub const MAX_LINE_ITEMS: usize = 10_000;
pub const MAX_TAX_COMPONENTS: usize = 20;
pub const MAX_ADDITIONAL_CHARGES: usize = 1_000;

/// Validate a document before it is handed to the calculation engine.
/// Returns all validation errors found (not just the first).
///
/// Negative quantities, unit prices, discounts and shipping are accepted,
/// as are discounts larger than the line subtotal; the engine propagates
/// them. The scale and magnitude rules bound every intermediate value to
/// 28 significant digits, so [`compute`](super::compute) sums exactly.
pub fn validate_document(document: &Document) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // LK-01: Document number
    if document.doc_no.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "doc_no",
            "document number must not be empty",
            "LK-01",
        ));
    } else if document.doc_no.len() > 200 {
        errors.push(ValidationError::with_rule(
            "doc_no",
            "document number cannot exceed 200 characters",
            "LK-01",
        ));
    }

    // LK-02 / LK-03: Parties
    if document.company.name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "company.name",
            "company name must not be empty",
            "LK-02",
        ));
    }
    if document.bill_to.name.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            "bill_to.name",
            "customer name must not be empty",
            "LK-03",
        ));
    }

    // LK-04: Line count
    if document.line_items.is_empty() {
        errors.push(ValidationError::with_rule(
            "line_items",
            "document must have at least one line item",
            "LK-04",
        ));
    } else if document.line_items.len() > MAX_LINE_ITEMS {
        errors.push(ValidationError::with_rule(
            "line_items",
            format!("document cannot have more than {MAX_LINE_ITEMS} line items"),
            "LK-04",
        ));
    }

    for (i, line) in document.line_items.iter().enumerate() {
        validate_line(line, i, &mut errors);
    }

    // LK-09 / LK-10: Dates
    if let Some(due) = document.due_date.filter(|d| *d < document.doc_date) {
        errors.push(ValidationError::with_rule(
            "due_date",
            format!("due date {due} is before document date {}", document.doc_date),
            "LK-09",
        ));
    }
    if let Some(valid_until) = document.valid_until.filter(|d| *d < document.doc_date) {
        errors.push(ValidationError::with_rule(
            "valid_until",
            format!(
                "validity date {valid_until} is before document date {}",
                document.doc_date
            ),
            "LK-10",
        ));
    }

    check_magnitude(document.shipping, MAX_AMOUNT, "shipping", &mut errors);
    check_scale(document.shipping, MAX_AMOUNT_SCALE, "shipping", &mut errors);

    // LK-14: Additional charges
    if document.additional_charges.len() > MAX_ADDITIONAL_CHARGES {
        errors.push(ValidationError::with_rule(
            "additional_charges",
            format!("document cannot have more than {MAX_ADDITIONAL_CHARGES} additional charges"),
            "LK-14",
        ));
    }
    for (i, charge) in document.additional_charges.iter().enumerate() {
        let prefix = format!("additional_charges[{i}]");
        if charge.label.trim().is_empty() {
            errors.push(ValidationError::with_rule(
                format!("{prefix}.label"),
                "charge label must not be empty",
                "LK-14",
            ));
        }
        check_magnitude(charge.amount, MAX_AMOUNT, &format!("{prefix}.amount"), &mut errors);
        check_scale(charge.amount, MAX_AMOUNT_SCALE, &format!("{prefix}.amount"), &mut errors);
    }

    // LK-08: Document magnitude
    let exposure = document_exposure(document);
    if exposure.is_none_or(|total| total > MAX_DOCUMENT_AMOUNT) {
        errors.push(ValidationError::with_rule(
            "line_items",
            format!("document amounts exceed the allowed total magnitude {MAX_DOCUMENT_AMOUNT}"),
            "LK-08",
        ));
    }

    // LK-13: Payment QR needs a UPI address
    if document.outputs.show_qr
        && document
            .bank_details
            .upi_id
            .as_deref()
            .is_none_or(|id| id.trim().is_empty())
    {
        errors.push(ValidationError::with_rule(
            "bank_details.upi_id",
            "a UPI ID is required when the payment QR code is shown",
            "LK-13",
        ));
    }

    errors
}

fn validate_line(line: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("line_items[{index}]");

    if line.description.trim().is_empty() {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.description"),
            "line description must not be empty",
            "LK-05",
        ));
    }

    check_magnitude(line.quantity, MAX_QUANTITY, &format!("{prefix}.quantity"), errors);
    check_scale(line.quantity, MAX_QUANTITY_SCALE, &format!("{prefix}.quantity"), errors);
    check_magnitude(line.unit_price, MAX_AMOUNT, &format!("{prefix}.unit_price"), errors);
    check_scale(line.unit_price, MAX_AMOUNT_SCALE, &format!("{prefix}.unit_price"), errors);

    if line.tax.len() > MAX_TAX_COMPONENTS {
        errors.push(ValidationError::with_rule(
            format!("{prefix}.tax"),
            format!("a line cannot have more than {MAX_TAX_COMPONENTS} tax components"),
            "LK-07",
        ));
    }
    for (j, component) in line.tax.iter().enumerate() {
        let field = format!("{prefix}.tax[{j}]");
        if component.name.trim().is_empty() {
            errors.push(ValidationError::with_rule(
                format!("{field}.name"),
                "tax component name must not be empty",
                "LK-07",
            ));
        }
        if component.rate < Decimal::ZERO {
            errors.push(ValidationError::with_rule(
                format!("{field}.rate"),
                format!("tax rate for {} must not be negative", component.name),
                "LK-07",
            ));
        }
        check_magnitude(component.rate, MAX_RATE, &format!("{field}.rate"), errors);
        check_scale(component.rate, MAX_RATE_SCALE, &format!("{field}.rate"), errors);
    }

    if let Some(discount) = &line.discount {
        let field = format!("{prefix}.discount.value");
        let (limit, scale) = match discount {
            Discount::Percent(_) => (MAX_RATE, MAX_RATE_SCALE),
            Discount::Fixed(_) => (MAX_AMOUNT, MAX_AMOUNT_SCALE),
        };
        check_magnitude(discount.value(), limit, &field, errors);
        check_scale(discount.value(), scale, &field, errors);
    }
}

/// LK-06: inputs carry at most `max_scale` decimal places as written.
fn check_scale(value: Decimal, max_scale: u32, field: &str, errors: &mut Vec<ValidationError>) {
    if value.scale() > max_scale {
        errors.push(ValidationError::with_rule(
            field,
            format!("value {value} has more than {max_scale} decimal places"),
            "LK-06",
        ));
    }
}

/// Upper bound on the absolute value of every sum the engine forms.
/// `None` when the bound itself does not fit in a `Decimal`.
fn document_exposure(document: &Document) -> Option<Decimal> {
    let mut total = document.shipping.abs();
    for charge in &document.additional_charges {
        total = total.checked_add(charge.amount.abs())?;
    }
    for line in &document.line_items {
        total = total.checked_add(line_exposure(line)?)?;
    }
    Some(total)
}

/// `(|subtotal| + |discount|) * (1 + sum of |rates| / 100)` for one line.
fn line_exposure(line: &LineItem) -> Option<Decimal> {
    let subtotal = line.quantity.checked_mul(line.unit_price)?.abs();
    let discount = match &line.discount {
        Some(Discount::Percent(percent)) => subtotal.checked_mul(percent.abs())? / Decimal::ONE_HUNDRED,
        Some(Discount::Fixed(amount)) => amount.abs(),
        None => Decimal::ZERO,
    };
    let rates = line
        .tax
        .iter()
        .try_fold(Decimal::ZERO, |acc, component| acc.checked_add(component.rate.abs()))?;
    let factor = Decimal::ONE + rates / Decimal::ONE_HUNDRED;
    subtotal.checked_add(discount)?.checked_mul(factor)
}

/// LK-12: keeps every intermediate product well inside `Decimal::MAX`.
fn check_magnitude(value: Decimal, limit: Decimal, field: &str, errors: &mut Vec<ValidationError>) {
    if value.abs() > limit {
        errors.push(ValidationError::with_rule(
            field,
            format!("value {value} exceeds the allowed magnitude {limit}"),
            "LK-12",
        ));
    }
}

/// Check that a breakdown is arithmetically consistent with its document.
///
/// Every identity is exact for documents that pass [`validate_document`]:
/// its scale and magnitude rules keep all sums within 28 significant
/// digits, so sums over the same terms agree to the last digit.
pub fn validate_breakdown(document: &Document, breakdown: &Breakdown) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // LK-A1: One calculated line per input line
    if breakdown.line_items.len() != document.line_items.len() {
        errors.push(ValidationError::with_rule(
            "line_items",
            format!(
                "breakdown has {} lines but document has {}",
                breakdown.line_items.len(),
                document.line_items.len()
            ),
            "LK-A1",
        ));
    }

    // LK-A2: Line totals
    for (i, line) in breakdown.line_items.iter().enumerate() {
        let expected = line.subtotal - line.discount_amount + line.tax_amount;
        if line.total != expected {
            errors.push(ValidationError::with_rule(
                format!("line_items[{i}].total"),
                format!(
                    "line total {} does not match subtotal {} - discount {} + tax {}",
                    line.total, line.subtotal, line.discount_amount, line.tax_amount
                ),
                "LK-A2",
            ));
        }
    }

    // LK-A3: Subtotal and discount sums
    let line_subtotals: Decimal = breakdown.line_items.iter().map(|l| l.subtotal).sum();
    if breakdown.subtotal != line_subtotals {
        errors.push(ValidationError::with_rule(
            "subtotal",
            format!(
                "subtotal {} does not match sum of line subtotals {}",
                breakdown.subtotal, line_subtotals
            ),
            "LK-A3",
        ));
    }
    let line_discounts: Decimal = breakdown.line_items.iter().map(|l| l.discount_amount).sum();
    if breakdown.total_discount != line_discounts {
        errors.push(ValidationError::with_rule(
            "total_discount",
            format!(
                "total discount {} does not match sum of line discounts {}",
                breakdown.total_discount, line_discounts
            ),
            "LK-A3",
        ));
    }

    // LK-A4: Tax breakdown, line taxes and total tax agree
    let breakdown_tax = breakdown.tax_breakdown.total();
    let line_tax: Decimal = breakdown.line_items.iter().map(|l| l.tax_amount).sum();
    if breakdown.total_tax != breakdown_tax {
        errors.push(ValidationError::with_rule(
            "total_tax",
            format!(
                "total tax {} does not match sum of tax breakdown {}",
                breakdown.total_tax, breakdown_tax
            ),
            "LK-A4",
        ));
    }
    if breakdown.total_tax != line_tax {
        errors.push(ValidationError::with_rule(
            "total_tax",
            format!(
                "total tax {} does not match sum of line taxes {}",
                breakdown.total_tax, line_tax
            ),
            "LK-A4",
        ));
    }

    // LK-A5: Pre-rounding total
    let expected_before_rounding = breakdown.subtotal - breakdown.total_discount
        + breakdown.total_tax
        + breakdown.shipping
        + breakdown.additional_charges_total;
    if breakdown.subtotal_before_rounding != expected_before_rounding {
        errors.push(ValidationError::with_rule(
            "subtotal_before_rounding",
            format!(
                "pre-rounding total {} does not match calculation {}",
                breakdown.subtotal_before_rounding, expected_before_rounding
            ),
            "LK-A5",
        ));
    }

    // LK-A6: Rounding
    let expected_grand = document.rounding.apply(breakdown.subtotal_before_rounding);
    if breakdown.grand_total != expected_grand {
        errors.push(ValidationError::with_rule(
            "grand_total",
            format!(
                "grand total {} does not match {:?} rounding of {}",
                breakdown.grand_total, document.rounding, breakdown.subtotal_before_rounding
            ),
            "LK-A6",
        ));
    }
    if breakdown.rounding_adjustment != breakdown.grand_total - breakdown.subtotal_before_rounding {
        errors.push(ValidationError::with_rule(
            "rounding_adjustment",
            format!(
                "rounding adjustment {} does not match grand total {} - pre-rounding total {}",
                breakdown.rounding_adjustment,
                breakdown.grand_total,
                breakdown.subtotal_before_rounding
            ),
            "LK-A6",
        ));
    }

    errors
}
