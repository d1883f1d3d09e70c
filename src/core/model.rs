//! Form data for the three document types.
//!
//! Values arrive as strings exactly as typed into the browser form; whether an
//! amount is numeric or a date parses is decided by [`crate::core::validation`],
//! not by deserialization. Each document type is its own record and
//! [`DocumentForm`] is the tagged union over them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a party is related to the person named in `relation_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// Son of
    #[default]
    SonOf,
    /// Daughter of
    DaughterOf,
    /// Wife of
    WifeOf,
    /// Husband of
    HusbandOf,
    /// Minor represented by a guardian
    GuardianOf,
}

impl RelationType {
    /// Storage key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SonOf => "son_of",
            Self::DaughterOf => "daughter_of",
            Self::WifeOf => "wife_of",
            Self::HusbandOf => "husband_of",
            Self::GuardianOf => "guardian_of",
        }
    }

    /// Word used in the Tamil deed text after the relation's name.
    #[must_use]
    pub const fn tamil(self) -> &'static str {
        match self {
            Self::SonOf => "மகன்",
            Self::DaughterOf => "மகள்",
            Self::WifeOf => "மனைவி",
            Self::HusbandOf => "கணவர்",
            Self::GuardianOf => "பாதுகாவலர்",
        }
    }
}

impl FromStr for RelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "son_of" => Ok(Self::SonOf),
            "daughter_of" => Ok(Self::DaughterOf),
            "wife_of" => Ok(Self::WifeOf),
            "husband_of" => Ok(Self::HusbandOf),
            "guardian_of" => Ok(Self::GuardianOf),
            other => Err(format!("unknown relation type '{other}'")),
        }
    }
}

/// Role a party plays in a document; the storage discriminator for `parties` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyRole {
    /// Vendor in a sale
    Seller,
    /// Purchaser in a sale
    Buyer,
    /// Mortgagor
    Borrower,
    /// Mortgagee
    Lender,
    /// Attesting witness
    Witness,
}

impl PartyRole {
    /// Storage key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seller => "seller",
            Self::Buyer => "buyer",
            Self::Borrower => "borrower",
            Self::Lender => "lender",
            Self::Witness => "witness",
        }
    }

    /// Label used to prefix validation messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Seller => "Seller",
            Self::Buyer => "Buyer",
            Self::Borrower => "Borrower",
            Self::Lender => "Lender",
            Self::Witness => "Witness",
        }
    }
}

impl FromStr for PartyRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seller" => Ok(Self::Seller),
            "buyer" => Ok(Self::Buyer),
            "borrower" => Ok(Self::Borrower),
            "lender" => Ok(Self::Lender),
            "witness" => Ok(Self::Witness),
            other => Err(format!("unknown party role '{other}'")),
        }
    }
}

/// A buyer, seller, borrower, lender or witness.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Party {
    pub name: String,
    pub age: String,
    pub relation_type: RelationType,
    pub relation_name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: String,
    pub taluk: String,
    pub district: String,
    pub pincode: String,
    pub aadhaar_number: String,
    pub phone: String,
}

/// Reference to a previously registered document in the title chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriorDocument {
    pub book_number: String,
    pub sro_office: String,
    pub year: String,
    pub document_number: String,
}

/// One row of the property schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Property {
    pub district: String,
    pub taluk: String,
    pub village: String,
    pub survey_number: String,
    pub subdivision: String,
    pub extent: String,
    pub north: String,
    pub south: String,
    pub east: String,
    pub west: String,
    /// Government guide value for the extent, used for stamp duty
    pub guide_value: String,
}

/// Who prepared the document and where it will be registered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attribution {
    pub typist_name: String,
    pub typist_office: String,
    pub sro_office: String,
}

/// Cheque or demand draft details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstrumentDetails {
    pub bank_name: String,
    pub branch: String,
    pub instrument_number: String,
    pub instrument_date: String,
}

/// Electronic transfer details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferDetails {
    pub bank_name: String,
    pub transaction_reference: String,
    pub transaction_date: String,
}

/// Payment method, each variant carrying only the fields it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Cheque(InstrumentDetails),
    DemandDraft(InstrumentDetails),
    Upi(TransferDetails),
    Neft(TransferDetails),
    Rtgs(TransferDetails),
    Imps(TransferDetails),
}

impl PaymentMethod {
    /// Storage key, identical to the JSON tag
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Cheque(_) => "cheque",
            Self::DemandDraft(_) => "demand_draft",
            Self::Upi(_) => "upi",
            Self::Neft(_) => "neft",
            Self::Rtgs(_) => "rtgs",
            Self::Imps(_) => "imps",
        }
    }

    /// Name used in validation messages and the English payment recital
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Cheque(_) => "cheque",
            Self::DemandDraft(_) => "demand draft",
            Self::Upi(_) => "UPI",
            Self::Neft(_) => "NEFT",
            Self::Rtgs(_) => "RTGS",
            Self::Imps(_) => "IMPS",
        }
    }
}

/// One itemised sale-deed payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub amount: String,
    #[serde(flatten)]
    pub method: PaymentMethod,
}

/// Fields every document type carries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentBody {
    pub document_date: String,
    /// Loan amount for a mortgage, sale consideration otherwise
    pub amount: String,
    /// Amount in words; computed when left blank
    pub amount_in_words: String,
    pub property_description: String,
    pub prior_documents: Vec<PriorDocument>,
    pub properties: Vec<Property>,
    pub witnesses: Vec<Party>,
    pub attribution: Attribution,
}

/// Mortgage deed: borrowers pledge property to lenders for a loan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MortgageDeed {
    #[serde(flatten)]
    pub body: DocumentBody,
    pub borrowers: Vec<Party>,
    pub lenders: Vec<Party>,
    /// Interest in percent per month
    pub interest_rate: String,
    pub tenure_months: String,
}

/// Agreement to sell, with an advance and a completion deadline.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleAgreement {
    #[serde(flatten)]
    pub body: DocumentBody,
    pub sellers: Vec<Party>,
    pub buyers: Vec<Party>,
    pub advance_amount: String,
    pub completion_date: String,
}

/// Absolute sale deed with itemised payments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleDeed {
    #[serde(flatten)]
    pub body: DocumentBody,
    pub sellers: Vec<Party>,
    pub buyers: Vec<Party>,
    pub payments: Vec<Payment>,
}

/// Document type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    MortgageDeed,
    SaleAgreement,
    SaleDeed,
}

impl DocumentKind {
    /// Storage key, identical to the JSON tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MortgageDeed => "mortgage_deed",
            Self::SaleAgreement => "sale_agreement",
            Self::SaleDeed => "sale_deed",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mortgage_deed" => Ok(Self::MortgageDeed),
            "sale_agreement" => Ok(Self::SaleAgreement),
            "sale_deed" => Ok(Self::SaleDeed),
            other => Err(format!("unknown document kind '{other}'")),
        }
    }
}

/// Form data for any document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentForm {
    MortgageDeed(MortgageDeed),
    SaleAgreement(SaleAgreement),
    SaleDeed(SaleDeed),
}

impl DocumentForm {
    /// Which document type this form is
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        match self {
            Self::MortgageDeed(_) => DocumentKind::MortgageDeed,
            Self::SaleAgreement(_) => DocumentKind::SaleAgreement,
            Self::SaleDeed(_) => DocumentKind::SaleDeed,
        }
    }

    /// Shared fields
    #[must_use]
    pub const fn body(&self) -> &DocumentBody {
        match self {
            Self::MortgageDeed(deed) => &deed.body,
            Self::SaleAgreement(agreement) => &agreement.body,
            Self::SaleDeed(deed) => &deed.body,
        }
    }

    /// Parties grouped by role, principals first and witnesses last.
    #[must_use]
    pub fn party_groups(&self) -> [(PartyRole, &[Party]); 3] {
        let witnesses = (PartyRole::Witness, self.body().witnesses.as_slice());
        match self {
            Self::MortgageDeed(deed) => [
                (PartyRole::Borrower, deed.borrowers.as_slice()),
                (PartyRole::Lender, deed.lenders.as_slice()),
                witnesses,
            ],
            Self::SaleAgreement(agreement) => [
                (PartyRole::Seller, agreement.sellers.as_slice()),
                (PartyRole::Buyer, agreement.buyers.as_slice()),
                witnesses,
            ],
            Self::SaleDeed(deed) => [
                (PartyRole::Seller, deed.sellers.as_slice()),
                (PartyRole::Buyer, deed.buyers.as_slice()),
                witnesses,
            ],
        }
    }
}

/// Lifecycle flag of a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Final,
}

impl DocumentStatus {
    /// Storage key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Final => "final",
        }
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "final" => Ok(Self::Final),
            other => Err(format!("unknown document status '{other}'")),
        }
    }
}

/// A stored document as returned by fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: i64,
    pub status: DocumentStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub form: DocumentForm,
}

/// One row of the document list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    pub id: i64,
    pub kind: DocumentKind,
    pub status: DocumentStatus,
    pub document_date: String,
    pub amount: String,
    /// Name of the first seller or borrower, if any
    pub first_party: Option<String>,
    pub updated_at: NaiveDateTime,
}
