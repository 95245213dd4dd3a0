use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A billing document: invoice, quotation or bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub document_type: DocumentType,
    /// Document number, e.g. "DA-INV-2025-001".
    pub doc_no: String,
    pub doc_date: NaiveDate,
    /// Payment due date (invoices and bills).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Offer expiry (quotations).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
    /// Issuing company.
    pub company: Company,
    /// Customer.
    pub bill_to: BillTo,
    pub line_items: Vec<LineItem>,
    /// Document-level shipping, added after tax and never taxed.
    #[serde(default)]
    pub shipping: Decimal,
    /// Document-level charges, added after tax and never taxed.
    #[serde(default)]
    pub additional_charges: Vec<AdditionalCharge>,
    /// Rounding applied once to the grand total.
    #[serde(default)]
    pub rounding: RoundingPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Terms and conditions, one entry per bullet.
    #[serde(default)]
    pub terms: Vec<String>,
    pub bank_details: BankDetails,
    /// Presentation flags. Ignored by the calculation engine.
    #[serde(default)]
    pub outputs: Outputs,
}

/// Kind of billing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Invoice,
    Quotation,
    Bill,
}

impl DocumentType {
    /// Heading printed on the rendered document.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Invoice => "INVOICE",
            Self::Quotation => "QUOTATION",
            Self::Bill => "BILL",
        }
    }

    /// Parse from the lowercase wire name ("invoice", "quotation", "bill").
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "invoice" => Some(Self::Invoice),
            "quotation" => Some(Self::Quotation),
            "bill" => Some(Self::Bill),
            _ => None,
        }
    }
}

/// Issuing company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    pub address: String,
    /// GSTIN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst: Option<String>,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Customer the document is addressed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillTo {
    pub name: String,
    pub address: String,
    /// GSTIN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst: Option<String>,
    pub email: String,
    pub phone: String,
}

/// Bank account printed on the document and used for the UPI payment link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankDetails {
    pub account_name: String,
    pub bank: String,
    pub account_no: String,
    pub ifsc: String,
    /// UPI virtual payment address, e.g. "shop@upi".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
}

/// Which renderings the caller wants and what they should show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outputs {
    pub formats: Vec<OutputFormat>,
    pub show_amount_in_words: bool,
    pub show_qr: bool,
}

impl Default for Outputs {
    fn default() -> Self {
        Self {
            formats: vec![OutputFormat::PdfReady],
            show_amount_in_words: true,
            show_qr: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Markdown,
    HtmlEmail,
    PdfReady,
    Json,
}

/// One billable row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    /// HSN (goods) or SAC (services) classification code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hsn_sac: Option<String>,
    /// Quantity. Fractional quantities are allowed.
    pub quantity: Decimal,
    /// Unit label, e.g. "pcs", "hour", "project".
    pub unit: String,
    /// Price per unit. Negative prices represent credits.
    pub unit_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    /// Tax components, each applied independently to the discounted base.
    #[serde(default)]
    pub tax: Vec<TaxComponent>,
}

/// Line-level discount.
///
/// Serialized as `{"type": "percent", "value": 10}` or
/// `{"type": "fixed", "value": 250}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Discount {
    /// Percentage of the line subtotal. Values above 100 are allowed.
    Percent(Decimal),
    /// Absolute currency amount.
    Fixed(Decimal),
}

impl Discount {
    /// Discount amount for a line with the given pre-discount subtotal.
    /// Not clamped to `[0, subtotal]`.
    pub fn amount_for(&self, subtotal: Decimal) -> Decimal {
        match self {
            Self::Percent(value) => subtotal * *value / Decimal::ONE_HUNDRED,
            Self::Fixed(value) => *value,
        }
    }

    pub fn value(&self) -> Decimal {
        match self {
            Self::Percent(v) | Self::Fixed(v) => *v,
        }
    }
}

/// A named tax applied to a line, e.g. CGST 9%.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComponent {
    /// Label used to aggregate the tax across lines.
    pub name: String,
    /// Percentage rate.
    pub rate: Decimal,
}

impl TaxComponent {
    pub fn new(name: impl Into<String>, rate: Decimal) -> Self {
        Self {
            name: name.into(),
            rate,
        }
    }

    /// Tax amount on the given taxable base.
    pub fn amount_on(&self, taxable_base: Decimal) -> Decimal {
        taxable_base * self.rate / Decimal::ONE_HUNDRED
    }
}

/// Document-level charge such as packing or convenience fee. Not taxed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalCharge {
    pub label: String,
    pub amount: Decimal,
}

/// How the grand total is brought to a whole rupee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Nearest rupee, ties away from zero (1234.50 → 1235).
    #[default]
    Nearest,
    /// Ceiling.
    Up,
    /// Floor.
    Down,
    /// Leave the total as computed.
    None,
}

impl RoundingPolicy {
    /// Apply the policy to a pre-rounding total.
    pub fn apply(&self, amount: Decimal) -> Decimal {
        match self {
            Self::Nearest => amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            Self::Up => amount.ceil(),
            Self::Down => amount.floor(),
            Self::None => amount,
        }
    }
}

/// A line item together with its computed figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatedLineItem {
    #[serde(flatten)]
    pub item: LineItem,
    /// quantity × unit_price.
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    /// Sum of all tax components on the discounted base.
    pub tax_amount: Decimal,
    /// subtotal − discount_amount + tax_amount.
    pub total: Decimal,
}

impl CalculatedLineItem {
    /// Line subtotal after discount, before tax.
    pub fn taxable_base(&self) -> Decimal {
        self.subtotal - self.discount_amount
    }
}

/// Aggregated tax per component name, in first-seen order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxBreakdown {
    entries: Vec<(String, Decimal)>,
    index: HashMap<String, usize>,
}

impl TaxBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the entry for `name`, creating it at the end if new.
    pub fn add(&mut self, name: &str, amount: Decimal) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].1 += amount,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push((name.to_string(), amount));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<Decimal> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    /// Component names in first-seen order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all entries, in insertion order.
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|(_, amount)| *amount).sum()
    }
}

impl Serialize for TaxBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, amount) in &self.entries {
            map.serialize_entry(name, amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TaxBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> serde::de::Visitor<'de> for BreakdownVisitor {
            type Value = TaxBreakdown;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of tax component name to amount")
            }

            fn visit_map<A>(self, mut access: A) -> Result<TaxBreakdown, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut breakdown = TaxBreakdown::new();
                while let Some((name, amount)) = access.next_entry::<String, Decimal>()? {
                    breakdown.add(&name, amount);
                }
                Ok(breakdown)
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}

/// Full financial breakdown of a document, produced by
/// [`compute`](super::compute).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Breakdown {
    /// Per-line figures, in input order.
    pub line_items: Vec<CalculatedLineItem>,
    /// Σ line subtotals before discount.
    pub subtotal: Decimal,
    /// Σ line discounts.
    pub total_discount: Decimal,
    pub tax_breakdown: TaxBreakdown,
    /// Σ tax breakdown values.
    pub total_tax: Decimal,
    /// Passed through from the document.
    pub shipping: Decimal,
    pub additional_charges_total: Decimal,
    /// Grand total before the rounding policy is applied.
    pub subtotal_before_rounding: Decimal,
    /// grand_total − subtotal_before_rounding. Signed.
    pub rounding_adjustment: Decimal,
    pub grand_total: Decimal,
    /// Grand total in words, e.g. "Eleven Thousand Eight Hundred Rupees Only".
    pub amount_in_words: String,
}
