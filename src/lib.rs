//! # lekha
//!
//! Totals for Indian billing documents (invoice, quotation, bill): line
//! discounts, GST and other named tax components, shipping, additional
//! charges, rounding to the rupee and the grand total in words using the
//! crore/lakh numbering system.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use lekha::core::*;
//! use rust_decimal_macros::dec;
//!
//! let doc = DocumentBuilder::new(DocumentType::Invoice, "DA-INV-2025-001", NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
//!     .company(CompanyBuilder::new("Design Arena", "123 Design Street, Mumbai").gst("22AAAAA0000A1Z5").build())
//!     .bill_to(BillToBuilder::new("Acme Pvt Ltd", "Pune").build())
//!     .add_line(LineItemBuilder::new("Website design", dec!(2), "project", dec!(5000))
//!         .tax("CGST", dec!(9))
//!         .tax("SGST", dec!(9))
//!         .build())
//!     .build()
//!     .unwrap();
//!
//! let breakdown = compute(&doc);
//! assert_eq!(breakdown.subtotal, dec!(10000));
//! assert_eq!(breakdown.tax_breakdown.get("CGST"), Some(dec!(900)));
//! assert_eq!(breakdown.grand_total, dec!(11800));
//! assert_eq!(breakdown.amount_in_words, "Eleven Thousand Eight Hundred Rupees Only");
//! assert!(validate_breakdown(&doc, &breakdown).is_empty());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document types, calculation engine, amount in words, validation, en-IN formatting |
//! | `json` | JSON export of document + breakdown, JSON import |
//! | `upi` | `upi://pay` payment URI for the payment QR |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "upi")]
pub mod upi;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
