//! JSON export and import.
//!
//! An export is the document's own fields plus a `calculations` key holding
//! its [`Breakdown`]. Decimals are written as strings so no precision is
//! lost; on input both strings and JSON numbers are accepted.
//!
//! ```
//! use lekha::core::*;
//! use lekha::json;
//! use rust_decimal_macros::dec;
//! # use chrono::NaiveDate;
//!
//! let doc = DocumentBuilder::new(DocumentType::Bill, "B-17", NaiveDate::from_ymd_opt(2025, 5, 2).unwrap())
//!     .company(CompanyBuilder::new("Chai Point", "Bengaluru").build())
//!     .bill_to(BillToBuilder::new("Walk-in", "-").build())
//!     .add_line(LineItemBuilder::new("Masala chai", dec!(4), "cup", dec!(30)).gst(dec!(5)).build())
//!     .build()
//!     .unwrap();
//!
//! let text = json::export_json(&doc).unwrap();
//! let parsed = json::parse_export(&text).unwrap();
//! assert_eq!(parsed.calculations.grand_total, dec!(126));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Breakdown, Document, LekhaError, compute};

/// A document together with its computed breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedDocument {
    #[serde(flatten)]
    pub document: Document,
    pub calculations: Breakdown,
}

impl ExportedDocument {
    /// Compute the breakdown for `document` and bundle both.
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
            calculations: compute(document),
        }
    }
}

/// Serialize a document and its breakdown as pretty-printed JSON.
pub fn export_json(document: &Document) -> Result<String, LekhaError> {
    let export = ExportedDocument::new(document);
    let json = serde_json::to_string_pretty(&export)?;
    debug!(doc_no = %document.doc_no, bytes = json.len(), "exported document as JSON");
    Ok(json)
}

/// Parse a document from JSON.
///
/// A `calculations` key, as written by [`export_json`], is ignored; the
/// breakdown is always derived again with [`compute`].
pub fn document_from_json(json: &str) -> Result<Document, LekhaError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a full export, keeping the stored breakdown as written.
pub fn parse_export(json: &str) -> Result<ExportedDocument, LekhaError> {
    Ok(serde_json::from_str(json)?)
}
