//! Cross-field validation of document forms.
//!
//! Validation is a pure function of the form and today's date. Errors are
//! grouped by the form tab they belong to so the UI can show them inline and
//! jump to the first tab that needs attention.

use crate::core::{
    amounts::{amounts_match, exceeds_paise, parse_amount},
    dates::{is_future, parse_form_date},
    model::{
        Attribution, DocumentBody, DocumentForm, MortgageDeed, Party, PartyRole, Payment,
        PaymentMethod, PriorDocument, Property, SaleAgreement, SaleDeed,
    },
};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

const MIN_PARTY_AGE: u32 = 18;
const MAX_PARTY_AGE: u32 = 120;

/// Form tabs, ordered as they appear in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Details,
    Sellers,
    Buyers,
    Borrowers,
    Lenders,
    Witnesses,
    Property,
    PriorDocuments,
    Payment,
    Attribution,
}

impl Section {
    const fn for_role(role: PartyRole) -> Self {
        match role {
            PartyRole::Seller => Self::Sellers,
            PartyRole::Buyer => Self::Buyers,
            PartyRole::Borrower => Self::Borrowers,
            PartyRole::Lender => Self::Lenders,
            PartyRole::Witness => Self::Witnesses,
        }
    }
}

/// Outcome of validating a form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Messages per tab, in the order the checks ran
    pub errors: BTreeMap<Section, Vec<String>>,
    pub is_valid: bool,
    /// Tab the UI should navigate to
    pub first_invalid_section: Option<Section>,
}

#[derive(Default)]
struct Collector {
    errors: BTreeMap<Section, Vec<String>>,
}

impl Collector {
    fn push(&mut self, section: Section, message: impl Into<String>) {
        self.errors.entry(section).or_default().push(message.into());
    }

    fn finish(self) -> ValidationReport {
        let first_invalid_section = self.errors.keys().next().copied();
        ValidationReport {
            is_valid: self.errors.is_empty(),
            first_invalid_section,
            errors: self.errors,
        }
    }
}

/// Validates any document form.
#[must_use]
pub fn validate_form(form: &DocumentForm, today: NaiveDate) -> ValidationReport {
    match form {
        DocumentForm::MortgageDeed(deed) => validate_mortgage_deed(deed, today),
        DocumentForm::SaleAgreement(agreement) => validate_sale_agreement(agreement, today),
        DocumentForm::SaleDeed(deed) => validate_sale_deed(deed, today),
    }
}

/// Validates a mortgage deed form.
#[must_use]
pub fn validate_mortgage_deed(deed: &MortgageDeed, today: NaiveDate) -> ValidationReport {
    let mut errors = Collector::default();

    check_body_details(&mut errors, &deed.body, "Loan amount", today);

    match parse_amount(&deed.interest_rate) {
        None if deed.interest_rate.trim().is_empty() => {
            errors.push(Section::Details, "Interest rate is required");
        }
        Some(rate) if rate > 0.0 => {}
        _ => errors.push(Section::Details, "Interest rate must be a positive number"),
    }

    match deed.tenure_months.trim().parse::<u32>() {
        Ok(months) if months > 0 => {}
        _ if deed.tenure_months.trim().is_empty() => {
            errors.push(Section::Details, "Tenure in months is required");
        }
        _ => errors.push(
            Section::Details,
            "Tenure must be a whole number of months greater than zero",
        ),
    }

    check_parties(&mut errors, PartyRole::Borrower, &deed.borrowers, true);
    check_parties(&mut errors, PartyRole::Lender, &deed.lenders, true);
    check_body_rest(&mut errors, &deed.body, today);

    errors.finish()
}

/// Validates a sale agreement form.
#[must_use]
pub fn validate_sale_agreement(agreement: &SaleAgreement, today: NaiveDate) -> ValidationReport {
    let mut errors = Collector::default();

    let agreement_date = check_body_details(&mut errors, &agreement.body, "Sale amount", today);

    if !agreement.advance_amount.trim().is_empty() {
        match parse_amount(&agreement.advance_amount) {
            Some(advance) if advance > 0.0 => {
                if exceeds_paise(&agreement.advance_amount) {
                    errors.push(
                        Section::Details,
                        "Advance amount cannot have more than two decimal places",
                    );
                } else if let Some(total) = parse_amount(&agreement.body.amount)
                    && advance > total
                {
                    errors.push(
                        Section::Details,
                        format!(
                            "Advance amount {advance:.2} cannot exceed the sale amount {total:.2}"
                        ),
                    );
                }
            }
            _ => errors.push(Section::Details, "Advance amount must be a positive number"),
        }
    }

    if agreement.completion_date.trim().is_empty() {
        errors.push(Section::Details, "Completion date is required");
    } else {
        match parse_form_date(&agreement.completion_date) {
            None => errors.push(Section::Details, "Completion date is not a valid date"),
            Some(completion) => {
                if let Some(start) = agreement_date
                    && completion < start
                {
                    errors.push(
                        Section::Details,
                        "Completion date cannot be before the agreement date",
                    );
                }
            }
        }
    }

    check_parties(&mut errors, PartyRole::Seller, &agreement.sellers, true);
    check_parties(&mut errors, PartyRole::Buyer, &agreement.buyers, true);
    check_body_rest(&mut errors, &agreement.body, today);

    errors.finish()
}

/// Validates a sale deed form, including payment reconciliation.
#[must_use]
pub fn validate_sale_deed(deed: &SaleDeed, today: NaiveDate) -> ValidationReport {
    let mut errors = Collector::default();

    check_body_details(&mut errors, &deed.body, "Sale amount", today);
    check_parties(&mut errors, PartyRole::Seller, &deed.sellers, true);
    check_parties(&mut errors, PartyRole::Buyer, &deed.buyers, true);
    check_body_rest(&mut errors, &deed.body, today);
    check_payments(&mut errors, &deed.payments, &deed.body.amount, today);

    errors.finish()
}

/// Checks the date and amount shared by every document type.
/// Returns the parsed document date when it is usable.
fn check_body_details(
    errors: &mut Collector,
    body: &DocumentBody,
    amount_label: &str,
    today: NaiveDate,
) -> Option<NaiveDate> {
    check_positive_amount(errors, Section::Details, amount_label, &body.amount);
    check_past_date(errors, Section::Details, "Document date", &body.document_date, today)
}

/// Checks witnesses, property, prior documents and attribution.
fn check_body_rest(errors: &mut Collector, body: &DocumentBody, today: NaiveDate) {
    check_parties(errors, PartyRole::Witness, &body.witnesses, false);
    check_property(errors, &body.property_description, &body.properties);
    check_prior_documents(errors, &body.prior_documents, today);
    check_attribution(errors, &body.attribution);
}

fn check_positive_amount(errors: &mut Collector, section: Section, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(section, format!("{label} is required"));
        return;
    }

    match parse_amount(value) {
        Some(_) if exceeds_paise(value) => {
            errors.push(section, format!("{label} cannot have more than two decimal places"));
        }
        Some(amount) if amount > 0.0 => {}
        _ => errors.push(section, format!("{label} must be a positive number")),
    }
}

fn check_past_date(
    errors: &mut Collector,
    section: Section,
    label: &str,
    value: &str,
    today: NaiveDate,
) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        errors.push(section, format!("{label} is required"));
        return None;
    }

    let Some(date) = parse_form_date(value) else {
        errors.push(section, format!("{label} is not a valid date (use dd/mm/yyyy)"));
        return None;
    };

    if is_future(date, today) {
        errors.push(section, format!("{label} cannot be in the future"));
        return None;
    }

    Some(date)
}

fn check_parties(errors: &mut Collector, role: PartyRole, parties: &[Party], required: bool) {
    let section = Section::for_role(role);

    if required && parties.is_empty() {
        errors.push(
            section,
            format!("At least one {} is required", role.label().to_lowercase()),
        );
        return;
    }

    for (index, party) in parties.iter().enumerate() {
        let prefix = format!("{} {}", role.label(), index + 1);
        check_party(errors, section, &prefix, party);
    }
}

fn check_party(errors: &mut Collector, section: Section, prefix: &str, party: &Party) {
    if party.name.trim().is_empty() {
        errors.push(section, format!("{prefix}: name is required"));
    }

    match party.age.trim().parse::<u32>() {
        Ok(age) if (MIN_PARTY_AGE..=MAX_PARTY_AGE).contains(&age) => {}
        _ if party.age.trim().is_empty() => {
            errors.push(section, format!("{prefix}: age is required"));
        }
        _ => errors.push(
            section,
            format!("{prefix}: age must be a number between {MIN_PARTY_AGE} and {MAX_PARTY_AGE}"),
        ),
    }

    if party.relation_name.trim().is_empty() {
        errors.push(section, format!("{prefix}: relation name is required"));
    }

    if party.address_line1.trim().is_empty() {
        errors.push(section, format!("{prefix}: address is required"));
    }

    check_optional_digits(errors, section, prefix, "pincode", &party.pincode, 6);
    check_optional_digits(errors, section, prefix, "Aadhaar number", &party.aadhaar_number, 12);
    check_optional_digits(errors, section, prefix, "phone number", &party.phone, 10);
}

fn check_optional_digits(
    errors: &mut Collector,
    section: Section,
    prefix: &str,
    label: &str,
    value: &str,
    length: usize,
) {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return;
    }

    if compact.len() != length || !compact.chars().all(|c| c.is_ascii_digit()) {
        errors.push(section, format!("{prefix}: {label} must be {length} digits"));
    }
}

fn check_property(errors: &mut Collector, description: &str, properties: &[Property]) {
    if description.trim().is_empty() && properties.is_empty() {
        errors.push(
            Section::Property,
            "Enter a property description or at least one schedule row",
        );
    }

    for (index, property) in properties.iter().enumerate() {
        let prefix = format!("Property {}", index + 1);
        if property.village.trim().is_empty() {
            errors.push(Section::Property, format!("{prefix}: village is required"));
        }
        if property.survey_number.trim().is_empty() {
            errors.push(Section::Property, format!("{prefix}: survey number is required"));
        }
        if !property.guide_value.trim().is_empty() {
            match parse_amount(&property.guide_value) {
                Some(_) if exceeds_paise(&property.guide_value) => errors.push(
                    Section::Property,
                    format!("{prefix}: guide value cannot have more than two decimal places"),
                ),
                Some(value) if value >= 0.0 => {}
                _ => errors.push(
                    Section::Property,
                    format!("{prefix}: guide value must be a number"),
                ),
            }
        }
    }
}

fn check_prior_documents(errors: &mut Collector, documents: &[PriorDocument], today: NaiveDate) {
    for (index, document) in documents.iter().enumerate() {
        let prefix = format!("Prior document {}", index + 1);
        if document.document_number.trim().is_empty() {
            errors.push(
                Section::PriorDocuments,
                format!("{prefix}: document number is required"),
            );
        }

        let year = document.year.trim();
        match year.parse::<i32>() {
            Ok(value) if year.len() == 4 && value <= today.year() => {}
            _ => errors.push(
                Section::PriorDocuments,
                format!("{prefix}: year must be a 4-digit year not after {}", today.year()),
            ),
        }
    }
}

fn check_attribution(errors: &mut Collector, attribution: &Attribution) {
    if attribution.typist_name.trim().is_empty() {
        errors.push(Section::Attribution, "Typist name is required");
    }
}

fn check_payments(errors: &mut Collector, payments: &[Payment], total: &str, today: NaiveDate) {
    if payments.is_empty() {
        errors.push(Section::Payment, "At least one payment is required");
        return;
    }

    let mut line_amounts = Vec::with_capacity(payments.len());
    for (index, payment) in payments.iter().enumerate() {
        let prefix = format!("Payment {}", index + 1);

        match parse_amount(&payment.amount) {
            Some(_) if exceeds_paise(&payment.amount) => errors.push(
                Section::Payment,
                format!("{prefix}: amount cannot have more than two decimal places"),
            ),
            Some(amount) if amount > 0.0 => line_amounts.push(amount),
            _ => errors.push(
                Section::Payment,
                format!("{prefix}: amount must be a positive number"),
            ),
        }

        check_payment_method(errors, &prefix, &payment.method, today);
    }

    // Reconcile only when every line and the total are usable numbers.
    let Some(total) = parse_amount(total).filter(|amount| *amount > 0.0) else {
        return;
    };
    if line_amounts.len() != payments.len() {
        return;
    }

    let sum: f64 = line_amounts.iter().sum();
    if !amounts_match(sum, total) {
        errors.push(
            Section::Payment,
            format!("Total of payments {sum:.2} does not match the sale amount {total:.2}"),
        );
    }
}

fn check_payment_method(
    errors: &mut Collector,
    prefix: &str,
    method: &PaymentMethod,
    today: NaiveDate,
) {
    let label = method.label();
    let (bank_name, reference, reference_label, date, date_label) = match method {
        PaymentMethod::Cash => return,
        PaymentMethod::Cheque(details) | PaymentMethod::DemandDraft(details) => (
            &details.bank_name,
            &details.instrument_number,
            "number",
            &details.instrument_date,
            "date",
        ),
        PaymentMethod::Upi(details)
        | PaymentMethod::Neft(details)
        | PaymentMethod::Rtgs(details)
        | PaymentMethod::Imps(details) => (
            &details.bank_name,
            &details.transaction_reference,
            "transaction reference",
            &details.transaction_date,
            "transaction date",
        ),
    };

    if bank_name.trim().is_empty() {
        errors.push(
            Section::Payment,
            format!("{prefix}: bank name is required for {label} payments"),
        );
    }
    if reference.trim().is_empty() {
        errors.push(
            Section::Payment,
            format!("{prefix}: {label} {reference_label} is required"),
        );
    }
    check_past_date(
        errors,
        Section::Payment,
        &format!("{prefix}: {label} {date_label}"),
        date,
        today,
    );
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::model::{InstrumentDetails, TransferDetails};
    use crate::test_utils::{sample_mortgage_deed, sample_party, sample_sale_agreement, sample_sale_deed};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
    }

    fn cash(amount: &str) -> Payment {
        Payment {
            amount: amount.to_string(),
            method: PaymentMethod::Cash,
        }
    }

    fn messages(report: &ValidationReport, section: Section) -> Vec<String> {
        report.errors.get(&section).cloned().unwrap_or_default()
    }

    #[test]
    fn test_sale_deed_with_matching_cash_payment_is_valid() {
        let deed = sample_sale_deed();
        let report = validate_sale_deed(&deed, today());

        assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
        assert!(report.errors.is_empty());
        assert_eq!(report.first_invalid_section, None);
    }

    #[test]
    fn test_sale_deed_payment_mismatch_names_both_amounts() {
        let mut deed = sample_sale_deed();
        deed.payments = vec![cash("240000")];

        let report = validate_form(&DocumentForm::SaleDeed(deed), today());

        assert!(!report.is_valid);
        assert_eq!(report.first_invalid_section, Some(Section::Payment));
        let payment_errors = messages(&report, Section::Payment);
        assert_eq!(payment_errors.len(), 1);
        assert!(payment_errors[0].contains("240000.00"));
        assert!(payment_errors[0].contains("250000.00"));
    }

    #[test]
    fn test_payment_tolerance_boundaries() {
        let mut deed = sample_sale_deed();

        for (lines, expect_mismatch) in [
            (vec!["100000", "150000"], false),
            (vec!["100000", "149999.995"], false),
            (vec!["100000", "150000.009"], false),
            (vec!["100000", "149999.98"], true),
            (vec!["100000", "150000.02"], true),
            (vec!["250001"], true),
        ] {
            deed.payments = lines.iter().map(|amount| cash(amount)).collect();
            let report = validate_sale_deed(&deed, today());
            let mismatch = messages(&report, Section::Payment)
                .iter()
                .any(|message| message.contains("does not match"));
            assert_eq!(mismatch, expect_mismatch, "payments {lines:?}");
        }
    }

    #[test]
    fn test_no_reconciliation_when_a_line_is_invalid() {
        let mut deed = sample_sale_deed();
        deed.payments = vec![cash("100000"), cash("abc")];

        let report = validate_sale_deed(&deed, today());
        let payment_errors = messages(&report, Section::Payment);

        assert_eq!(payment_errors.len(), 1);
        assert!(payment_errors[0].starts_with("Payment 2: amount"));
    }

    #[test]
    fn test_non_cash_payments_require_bank_and_reference() {
        let methods = [
            PaymentMethod::Cheque(InstrumentDetails::default()),
            PaymentMethod::DemandDraft(InstrumentDetails::default()),
            PaymentMethod::Upi(TransferDetails::default()),
            PaymentMethod::Neft(TransferDetails::default()),
            PaymentMethod::Rtgs(TransferDetails::default()),
            PaymentMethod::Imps(TransferDetails::default()),
        ];

        for method in methods {
            let mut deed = sample_sale_deed();
            deed.payments = vec![Payment {
                amount: "250000".to_string(),
                method: method.clone(),
            }];

            let report = validate_sale_deed(&deed, today());
            let payment_errors = messages(&report, Section::Payment);
            assert!(
                payment_errors.iter().any(|m| m.contains("bank name")),
                "{method:?}: {payment_errors:?}"
            );
            assert!(
                payment_errors
                    .iter()
                    .any(|m| m.contains("number") || m.contains("transaction reference")),
                "{method:?}: {payment_errors:?}"
            );
        }
    }

    #[test]
    fn test_complete_transfer_payment_is_valid() {
        let mut deed = sample_sale_deed();
        deed.payments = vec![Payment {
            amount: "250000".to_string(),
            method: PaymentMethod::Rtgs(TransferDetails {
                bank_name: "Indian Overseas Bank".to_string(),
                transaction_reference: "IOBR24061500012".to_string(),
                transaction_date: "15/06/2024".to_string(),
            }),
        }];

        assert!(validate_sale_deed(&deed, today()).is_valid);
    }

    #[test]
    fn test_future_transaction_date_rejected_present_accepted() {
        let mut deed = sample_sale_deed();
        let make = |date: &str| Payment {
            amount: "250000".to_string(),
            method: PaymentMethod::Cheque(InstrumentDetails {
                bank_name: "Canara Bank".to_string(),
                branch: "Madurai".to_string(),
                instrument_number: "004512".to_string(),
                instrument_date: date.to_string(),
            }),
        };

        deed.payments = vec![make("21/06/2024")];
        let report = validate_sale_deed(&deed, today());
        assert!(
            messages(&report, Section::Payment)
                .iter()
                .any(|m| m.contains("cannot be in the future"))
        );

        deed.payments = vec![make("20/06/2024")];
        assert!(validate_sale_deed(&deed, today()).is_valid);

        deed.payments = vec![make("01/01/1999")];
        assert!(validate_sale_deed(&deed, today()).is_valid);
    }

    #[test]
    fn test_document_date_checks() {
        let mut deed = sample_sale_deed();

        deed.body.document_date = "2024-06-21".to_string();
        let report = validate_sale_deed(&deed, today());
        assert_eq!(report.first_invalid_section, Some(Section::Details));

        deed.body.document_date = "32/13/2024".to_string();
        let report = validate_sale_deed(&deed, today());
        assert!(messages(&report, Section::Details)[0].contains("not a valid date"));

        deed.body.document_date = String::new();
        let report = validate_sale_deed(&deed, today());
        assert_eq!(messages(&report, Section::Details), vec!["Document date is required"]);
    }

    #[test]
    fn test_party_rules() {
        let mut deed = sample_sale_deed();
        deed.buyers = vec![];
        deed.sellers[0].age = "16".to_string();
        deed.sellers[0].aadhaar_number = "1234".to_string();
        deed.sellers[0].pincode = "625 001".to_string();

        let report = validate_sale_deed(&deed, today());

        assert_eq!(report.first_invalid_section, Some(Section::Sellers));
        assert_eq!(
            messages(&report, Section::Sellers),
            vec![
                "Seller 1: age must be a number between 18 and 120",
                "Seller 1: Aadhaar number must be 12 digits",
            ]
        );
        assert_eq!(
            messages(&report, Section::Buyers),
            vec!["At least one buyer is required"]
        );
    }

    #[test]
    fn test_witnesses_optional_but_checked_when_present() {
        let mut deed = sample_sale_deed();
        deed.body.witnesses = vec![];
        assert!(validate_sale_deed(&deed, today()).is_valid);

        deed.body.witnesses = vec![Party::default()];
        let report = validate_sale_deed(&deed, today());
        assert!(
            messages(&report, Section::Witnesses)
                .iter()
                .all(|m| m.starts_with("Witness 1:"))
        );
    }

    #[test]
    fn test_sections_ordered_by_tab() {
        let mut deed = sample_sale_deed();
        deed.body.attribution.typist_name.clear();
        deed.payments.clear();
        deed.body.amount = "-1".to_string();

        let report = validate_sale_deed(&deed, today());
        let sections: Vec<Section> = report.errors.keys().copied().collect();
        assert_eq!(
            sections,
            vec![Section::Details, Section::Payment, Section::Attribution]
        );
        assert_eq!(report.first_invalid_section, Some(Section::Details));
    }

    #[test]
    fn test_mortgage_rules() {
        let mut deed = sample_mortgage_deed();
        assert!(validate_mortgage_deed(&deed, today()).is_valid);

        deed.interest_rate = "0".to_string();
        deed.tenure_months = "1.5".to_string();
        deed.lenders.clear();
        let report = validate_mortgage_deed(&deed, today());
        assert_eq!(
            messages(&report, Section::Details),
            vec![
                "Interest rate must be a positive number",
                "Tenure must be a whole number of months greater than zero",
            ]
        );
        assert_eq!(
            messages(&report, Section::Lenders),
            vec!["At least one lender is required"]
        );
    }

    #[test]
    fn test_amounts_limited_to_paise() {
        let mut deed = sample_sale_deed();
        deed.body.amount = "250000.125".to_string();
        deed.payments = vec![cash("250000.125")];
        let report = validate_sale_deed(&deed, today());
        assert_eq!(
            messages(&report, Section::Details),
            vec!["Sale amount cannot have more than two decimal places"]
        );
        assert_eq!(
            messages(&report, Section::Payment),
            vec!["Payment 1: amount cannot have more than two decimal places"]
        );

        deed.body.amount = "250000.50".to_string();
        deed.payments = vec![cash("2,50,000.5")];
        assert!(validate_sale_deed(&deed, today()).is_valid);
    }

    #[test]
    fn test_sale_agreement_rules() {
        let mut agreement = sample_sale_agreement();
        assert!(validate_sale_agreement(&agreement, today()).is_valid);

        agreement.advance_amount = "900000".to_string();
        agreement.completion_date = "01/01/2024".to_string();
        let report = validate_sale_agreement(&agreement, today());
        let details = messages(&report, Section::Details);
        assert_eq!(details.len(), 2);
        assert!(details[0].contains("cannot exceed"));
        assert!(details[1].contains("before the agreement date"));
    }

    #[test]
    fn test_property_and_prior_documents() {
        let mut deed = sample_sale_deed();
        deed.body.property_description.clear();
        deed.body.properties.clear();
        deed.body.prior_documents = vec![PriorDocument {
            year: "2031".to_string(),
            ..PriorDocument::default()
        }];

        let report = validate_sale_deed(&deed, today());
        assert_eq!(messages(&report, Section::Property).len(), 1);
        assert_eq!(
            messages(&report, Section::PriorDocuments),
            vec![
                "Prior document 1: document number is required",
                "Prior document 1: year must be a 4-digit year not after 2024",
            ]
        );
    }

    #[test]
    fn test_validation_is_deterministic() {
        let mut deed = sample_sale_deed();
        deed.sellers.push(sample_party("", "abc"));
        let form = DocumentForm::SaleDeed(deed);
        assert_eq!(validate_form(&form, today()), validate_form(&form, today()));
    }
}
