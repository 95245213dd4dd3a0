//! UPI payment links.
//!
//! The payment QR printed on a document encodes a `upi://pay` URI. Only
//! the grand total and the bank details are read; line detail never
//! reaches the payment payload.

use rust_decimal::Decimal;

use crate::core::{Breakdown, Document};

/// Currency code sent in the `cu` parameter.
pub const UPI_CURRENCY: &str = "INR";

/// Build the `upi://pay` URI for a document's grand total.
///
/// Returns `None` when the document has no UPI ID.
///
/// ```
/// use lekha::core::*;
/// use lekha::upi::upi_payment_uri;
/// use rust_decimal_macros::dec;
/// # use chrono::NaiveDate;
///
/// let doc = DocumentBuilder::new(DocumentType::Invoice, "INV-9", NaiveDate::from_ymd_opt(2025, 6, 1).unwrap())
///     .company(CompanyBuilder::new("Design Arena", "Mumbai").build())
///     .bill_to(BillToBuilder::new("Acme", "Pune").build())
///     .bank_details(BankDetails { upi_id: Some("designarena@upi".into()), ..Default::default() })
///     .add_line(LineItemBuilder::new("Poster", dec!(1), "pcs", dec!(999.60)).build())
///     .build()
///     .unwrap();
///
/// let uri = upi_payment_uri(&doc, &compute(&doc)).unwrap();
/// assert_eq!(uri, "upi://pay?pa=designarena@upi&pn=Design%20Arena&am=1000&cu=INR");
/// ```
pub fn upi_payment_uri(document: &Document, breakdown: &Breakdown) -> Option<String> {
    let upi_id = document.bank_details.upi_id.as_deref()?.trim();
    if upi_id.is_empty() {
        return None;
    }
    Some(format!(
        "upi://pay?pa={}&pn={}&am={}&cu={UPI_CURRENCY}",
        upi_id,
        urlencoding::encode(&document.company.name),
        payment_amount(breakdown.grand_total),
    ))
}

/// Amount as UPI apps expect it: no trailing zeros, never `-0`.
fn payment_amount(amount: Decimal) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }
    amount.normalize().to_string()
}
