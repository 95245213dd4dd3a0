use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::LekhaError;
use super::types::*;
use super::validation;

/// Builder for billing documents.
///
/// ```
/// use lekha::core::*;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let doc = DocumentBuilder::new(DocumentType::Quotation, "DA-QUO-2025-007", NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
///     .valid_until(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap())
///     .company(CompanyBuilder::new("Design Arena", "123 Design Street, Mumbai").gst("22AAAAA0000A1Z5").build())
///     .bill_to(BillToBuilder::new("Kunal Traders", "MG Road, Pune").build())
///     .add_line(LineItemBuilder::new("Brand identity", dec!(1), "project", dec!(25000))
///         .hsn_sac("9983")
///         .percent_discount(dec!(10))
///         .gst(dec!(18))
///         .build())
///     .rounding(RoundingPolicy::Nearest)
///     .build()
///     .unwrap();
///
/// assert_eq!(doc.line_items[0].tax.len(), 2);
/// ```
pub struct DocumentBuilder {
    document_type: DocumentType,
    doc_no: String,
    doc_date: NaiveDate,
    due_date: Option<NaiveDate>,
    valid_until: Option<NaiveDate>,
    company: Option<Company>,
    bill_to: Option<BillTo>,
    line_items: Vec<LineItem>,
    shipping: Decimal,
    additional_charges: Vec<AdditionalCharge>,
    rounding: RoundingPolicy,
    notes: Option<String>,
    terms: Vec<String>,
    bank_details: BankDetails,
    outputs: Outputs,
}

impl DocumentBuilder {
    pub fn new(document_type: DocumentType, doc_no: impl Into<String>, doc_date: NaiveDate) -> Self {
        Self {
            document_type,
            doc_no: doc_no.into(),
            doc_date,
            due_date: None,
            valid_until: None,
            company: None,
            bill_to: None,
            line_items: Vec::new(),
            shipping: Decimal::ZERO,
            additional_charges: Vec::new(),
            rounding: RoundingPolicy::default(),
            notes: None,
            terms: Vec::new(),
            bank_details: BankDetails::default(),
            outputs: Outputs::default(),
        }
    }

    pub fn due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn valid_until(mut self, date: NaiveDate) -> Self {
        self.valid_until = Some(date);
        self
    }

    pub fn company(mut self, company: Company) -> Self {
        self.company = Some(company);
        self
    }

    pub fn bill_to(mut self, bill_to: BillTo) -> Self {
        self.bill_to = Some(bill_to);
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.line_items.push(line);
        self
    }

    pub fn shipping(mut self, amount: Decimal) -> Self {
        self.shipping = amount;
        self
    }

    pub fn add_charge(mut self, label: impl Into<String>, amount: Decimal) -> Self {
        self.additional_charges.push(AdditionalCharge {
            label: label.into(),
            amount,
        });
        self
    }

    pub fn rounding(mut self, policy: RoundingPolicy) -> Self {
        self.rounding = policy;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.terms.push(term.into());
        self
    }

    pub fn bank_details(mut self, bank_details: BankDetails) -> Self {
        self.bank_details = bank_details;
        self
    }

    pub fn outputs(mut self, outputs: Outputs) -> Self {
        self.outputs = outputs;
        self
    }

    /// Build the document and run [`validate_document`](validation::validate_document).
    /// Returns all validation errors (not just the first).
    pub fn build(self) -> Result<Document, LekhaError> {
        let document = self.build_unchecked()?;

        let errors = validation::validate_document(&document);
        if !errors.is_empty() {
            return Err(LekhaError::from_violations(&errors));
        }

        Ok(document)
    }

    /// Build without validation, for tests or imported data.
    pub fn build_unchecked(self) -> Result<Document, LekhaError> {
        let company = self
            .company
            .ok_or_else(|| LekhaError::Builder("company is required".into()))?;
        let bill_to = self
            .bill_to
            .ok_or_else(|| LekhaError::Builder("bill-to party is required".into()))?;

        Ok(Document {
            document_type: self.document_type,
            doc_no: self.doc_no,
            doc_date: self.doc_date,
            due_date: self.due_date,
            valid_until: self.valid_until,
            company,
            bill_to,
            line_items: self.line_items,
            shipping: self.shipping,
            additional_charges: self.additional_charges,
            rounding: self.rounding,
            notes: self.notes,
            terms: self.terms,
            bank_details: self.bank_details,
            outputs: self.outputs,
        })
    }
}

/// Builder for the issuing company.
pub struct CompanyBuilder {
    name: String,
    tagline: Option<String>,
    address: String,
    gst: Option<String>,
    email: String,
    phone: String,
    website: Option<String>,
    logo_url: Option<String>,
}

impl CompanyBuilder {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tagline: None,
            address: address.into(),
            gst: None,
            email: String::new(),
            phone: String::new(),
            website: None,
            logo_url: None,
        }
    }

    pub fn tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    pub fn gst(mut self, gstin: impl Into<String>) -> Self {
        self.gst = Some(gstin.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn website(mut self, url: impl Into<String>) -> Self {
        self.website = Some(url.into());
        self
    }

    pub fn logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Some(url.into());
        self
    }

    pub fn build(self) -> Company {
        Company {
            name: self.name,
            tagline: self.tagline,
            address: self.address,
            gst: self.gst,
            email: self.email,
            phone: self.phone,
            website: self.website,
            logo_url: self.logo_url,
        }
    }
}

/// Builder for the customer.
pub struct BillToBuilder {
    name: String,
    address: String,
    gst: Option<String>,
    email: String,
    phone: String,
}

impl BillToBuilder {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            gst: None,
            email: String::new(),
            phone: String::new(),
        }
    }

    pub fn gst(mut self, gstin: impl Into<String>) -> Self {
        self.gst = Some(gstin.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn build(self) -> BillTo {
        BillTo {
            name: self.name,
            address: self.address,
            gst: self.gst,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    description: String,
    hsn_sac: Option<String>,
    quantity: Decimal,
    unit: String,
    unit_price: Decimal,
    discount: Option<Discount>,
    tax: Vec<TaxComponent>,
}

impl LineItemBuilder {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        unit_price: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            hsn_sac: None,
            quantity,
            unit: unit.into(),
            unit_price,
            discount: None,
            tax: Vec::new(),
        }
    }

    pub fn hsn_sac(mut self, code: impl Into<String>) -> Self {
        self.hsn_sac = Some(code.into());
        self
    }

    pub fn percent_discount(mut self, percent: Decimal) -> Self {
        self.discount = Some(Discount::Percent(percent));
        self
    }

    pub fn fixed_discount(mut self, amount: Decimal) -> Self {
        self.discount = Some(Discount::Fixed(amount));
        self
    }

    /// Append a named tax component.
    pub fn tax(mut self, name: impl Into<String>, rate: Decimal) -> Self {
        self.tax.push(TaxComponent::new(name, rate));
        self
    }

    /// Intra-state GST: half the rate as CGST, half as SGST.
    pub fn gst(self, rate: Decimal) -> Self {
        let half = rate / Decimal::TWO;
        self.tax("CGST", half).tax("SGST", half)
    }

    /// Inter-state GST, charged in full as IGST.
    pub fn igst(self, rate: Decimal) -> Self {
        self.tax("IGST", rate)
    }

    pub fn build(self) -> LineItem {
        LineItem {
            description: self.description,
            hsn_sac: self.hsn_sac,
            quantity: self.quantity,
            unit: self.unit,
            unit_price: self.unit_price,
            discount: self.discount,
            tax: self.tax,
        }
    }
}
