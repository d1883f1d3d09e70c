//! Document persistence - save, update, fetch, list, finalise and delete
//! drafted deeds.
//!
//! A document is one `documents` row plus ordered child rows for parties,
//! prior documents, schedule rows and payments. Every write runs in a single
//! transaction so a document is either stored whole or not at all. Updates
//! replace the child rows wholesale rather than diffing them.

use crate::{
    core::{
        dates::{format_display_date, parse_form_date, today},
        model::{
            Attribution, DocumentBody, DocumentForm, DocumentKind, DocumentRecord,
            DocumentStatus, DocumentSummary, InstrumentDetails, MortgageDeed, Party, PartyRole,
            Payment, PaymentMethod, PriorDocument, Property, SaleAgreement, SaleDeed,
            TransferDetails,
        },
        validation::validate_form,
    },
    entities::{Document, document, party, payment, prior_document, property},
    errors::{Error, Result},
};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use sea_orm::{ConnectionTrait, QueryOrder, Set, TransactionTrait, prelude::*};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Validates `form` and stores it as a new draft, returning its id.
///
/// An invalid form is rejected with [`Error::Validation`] before the database
/// is touched.
#[instrument(skip(db, form), fields(kind = %form.kind()))]
pub async fn save_document(db: &DatabaseConnection, form: &DocumentForm) -> Result<i64> {
    ensure_valid(form)?;

    let now = Utc::now().naive_utc();
    let mut header = header_model(form, now)?;
    header.status = Set(DocumentStatus::Draft.as_str().to_string());
    header.created_at = Set(now);

    let txn = db.begin().await?;
    let stored = header.insert(&txn).await?;
    insert_children(&txn, stored.id, form).await?;
    txn.commit().await?;

    info!(document_id = stored.id, "Saved document");
    Ok(stored.id)
}

/// Replaces the stored content of document `id` with `form`.
///
/// The document keeps its id, status and creation time. Changing the type of a
/// stored document is rejected with [`Error::KindMismatch`].
#[instrument(skip(db, form), fields(kind = %form.kind()))]
pub async fn update_document(db: &DatabaseConnection, id: i64, form: &DocumentForm) -> Result<()> {
    ensure_valid(form)?;

    let txn = db.begin().await?;
    let existing = Document::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(Error::DocumentNotFound { id })?;

    if existing.kind != form.kind().as_str() {
        return Err(Error::KindMismatch {
            expected: existing.kind,
            found: form.kind().to_string(),
        });
    }

    let mut header = header_model(form, Utc::now().naive_utc())?;
    header.id = Set(id);
    header.update(&txn).await?;

    delete_children(&txn, id).await?;
    insert_children(&txn, id, form).await?;
    txn.commit().await?;

    info!(document_id = id, "Updated document");
    Ok(())
}

/// Loads document `id` with every field as it was saved.
pub async fn fetch_document(db: &DatabaseConnection, id: i64) -> Result<DocumentRecord> {
    let header = Document::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::DocumentNotFound { id })?;

    let form = load_form(db, &header).await?;
    let status = header
        .status
        .parse::<DocumentStatus>()
        .map_err(|message| Error::Corrupt { message })?;

    Ok(DocumentRecord {
        id: header.id,
        status,
        created_at: header.created_at,
        updated_at: header.updated_at,
        form,
    })
}

/// Lists stored documents, most recently changed first, optionally of one kind.
pub async fn list_documents(
    db: &DatabaseConnection,
    kind: Option<DocumentKind>,
) -> Result<Vec<DocumentSummary>> {
    let mut query = Document::find();
    if let Some(kind) = kind {
        query = query.filter(document::Column::Kind.eq(kind.as_str()));
    }
    let headers = query
        .order_by_desc(document::Column::UpdatedAt)
        .order_by_desc(document::Column::Id)
        .all(db)
        .await?;

    // First seller or borrower of each listed document, in one query
    let ids: Vec<i64> = headers.iter().map(|header| header.id).collect();
    let first_parties: HashMap<i64, String> = party::Entity::find()
        .filter(party::Column::DocumentId.is_in(ids))
        .filter(party::Column::Position.eq(0))
        .filter(
            party::Column::Role.is_in([PartyRole::Seller.as_str(), PartyRole::Borrower.as_str()]),
        )
        .all(db)
        .await?
        .into_iter()
        .map(|row| (row.document_id, row.name))
        .collect();

    headers
        .into_iter()
        .map(|header| {
            let kind = header
                .kind
                .parse::<DocumentKind>()
                .map_err(|message| Error::Corrupt { message })?;
            let status = header
                .status
                .parse::<DocumentStatus>()
                .map_err(|message| Error::Corrupt { message })?;
            Ok(DocumentSummary {
                id: header.id,
                kind,
                status,
                document_date: format_display_date(header.document_date),
                amount: header.amount,
                first_party: first_parties.get(&header.id).cloned(),
                updated_at: header.updated_at,
            })
        })
        .collect()
}

/// Marks document `id` as draft or final.
pub async fn set_status(db: &DatabaseConnection, id: i64, status: DocumentStatus) -> Result<()> {
    let existing = Document::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::DocumentNotFound { id })?;

    let mut header: document::ActiveModel = existing.into();
    header.status = Set(status.as_str().to_string());
    header.updated_at = Set(Utc::now().naive_utc());
    header.update(db).await?;

    info!(document_id = id, status = status.as_str(), "Changed document status");
    Ok(())
}

/// Deletes document `id` and all of its child rows.
pub async fn delete_document(db: &DatabaseConnection, id: i64) -> Result<()> {
    let txn = db.begin().await?;
    if Document::find_by_id(id).one(&txn).await?.is_none() {
        return Err(Error::DocumentNotFound { id });
    }
    delete_children(&txn, id).await?;
    Document::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;

    info!(document_id = id, "Deleted document");
    Ok(())
}

fn ensure_valid(form: &DocumentForm) -> Result<()> {
    let report = validate_form(form, today());
    if report.is_valid {
        Ok(())
    } else {
        warn!(
            first_invalid_section = ?report.first_invalid_section,
            "Rejected invalid document"
        );
        Err(Error::Validation(report))
    }
}

fn required_date(value: &str) -> Result<NaiveDate> {
    parse_form_date(value).ok_or_else(|| Error::InvalidDate {
        value: value.to_string(),
    })
}

fn optional_date(value: &str) -> Result<Option<NaiveDate>> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        required_date(value).map(Some)
    }
}

fn optional_text(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

fn position(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

/// Header columns shared by insert and update. Leaves id, status and
/// `created_at` unset.
fn header_model(form: &DocumentForm, now: NaiveDateTime) -> Result<document::ActiveModel> {
    let body = form.body();
    let mut header = document::ActiveModel {
        kind: Set(form.kind().as_str().to_string()),
        document_date: Set(required_date(&body.document_date)?),
        amount: Set(body.amount.clone()),
        amount_in_words: Set(body.amount_in_words.clone()),
        property_description: Set(body.property_description.clone()),
        typist_name: Set(body.attribution.typist_name.clone()),
        typist_office: Set(body.attribution.typist_office.clone()),
        sro_office: Set(body.attribution.sro_office.clone()),
        interest_rate: Set(None),
        tenure_months: Set(None),
        advance_amount: Set(None),
        completion_date: Set(None),
        updated_at: Set(now),
        ..Default::default()
    };

    match form {
        DocumentForm::MortgageDeed(deed) => {
            header.interest_rate = Set(Some(deed.interest_rate.clone()));
            header.tenure_months = Set(Some(deed.tenure_months.clone()));
        }
        DocumentForm::SaleAgreement(agreement) => {
            header.advance_amount = Set(optional_text(&agreement.advance_amount));
            header.completion_date = Set(optional_date(&agreement.completion_date)?);
        }
        DocumentForm::SaleDeed(_) => {}
    }

    Ok(header)
}

async fn insert_children<C>(conn: &C, document_id: i64, form: &DocumentForm) -> Result<()>
where
    C: ConnectionTrait,
{
    for (role, parties) in form.party_groups() {
        for (index, entry) in parties.iter().enumerate() {
            party::ActiveModel {
                document_id: Set(document_id),
                role: Set(role.as_str().to_string()),
                position: Set(position(index)),
                name: Set(entry.name.clone()),
                age: Set(entry.age.clone()),
                relation_type: Set(entry.relation_type.as_str().to_string()),
                relation_name: Set(entry.relation_name.clone()),
                address_line1: Set(entry.address_line1.clone()),
                address_line2: Set(entry.address_line2.clone()),
                address_line3: Set(entry.address_line3.clone()),
                taluk: Set(entry.taluk.clone()),
                district: Set(entry.district.clone()),
                pincode: Set(entry.pincode.clone()),
                aadhaar_number: Set(entry.aadhaar_number.clone()),
                phone: Set(entry.phone.clone()),
                ..Default::default()
            }
            .insert(conn)
            .await?;
        }
    }

    let body = form.body();
    for (index, prior) in body.prior_documents.iter().enumerate() {
        prior_document::ActiveModel {
            document_id: Set(document_id),
            position: Set(position(index)),
            book_number: Set(prior.book_number.clone()),
            sro_office: Set(prior.sro_office.clone()),
            year: Set(prior.year.clone()),
            document_number: Set(prior.document_number.clone()),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    for (index, row) in body.properties.iter().enumerate() {
        property::ActiveModel {
            document_id: Set(document_id),
            position: Set(position(index)),
            district: Set(row.district.clone()),
            taluk: Set(row.taluk.clone()),
            village: Set(row.village.clone()),
            survey_number: Set(row.survey_number.clone()),
            subdivision: Set(row.subdivision.clone()),
            extent: Set(row.extent.clone()),
            north: Set(row.north.clone()),
            south: Set(row.south.clone()),
            east: Set(row.east.clone()),
            west: Set(row.west.clone()),
            guide_value: Set(optional_text(&row.guide_value)),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    if let DocumentForm::SaleDeed(deed) = form {
        for (index, line) in deed.payments.iter().enumerate() {
            let (bank_name, branch, reference, payment_date) = match &line.method {
                PaymentMethod::Cash => (None, None, None, None),
                PaymentMethod::Cheque(details) | PaymentMethod::DemandDraft(details) => (
                    optional_text(&details.bank_name),
                    optional_text(&details.branch),
                    optional_text(&details.instrument_number),
                    optional_date(&details.instrument_date)?,
                ),
                PaymentMethod::Upi(details)
                | PaymentMethod::Neft(details)
                | PaymentMethod::Rtgs(details)
                | PaymentMethod::Imps(details) => (
                    optional_text(&details.bank_name),
                    None,
                    optional_text(&details.transaction_reference),
                    optional_date(&details.transaction_date)?,
                ),
            };

            payment::ActiveModel {
                document_id: Set(document_id),
                position: Set(position(index)),
                amount: Set(line.amount.clone()),
                method: Set(line.method.as_str().to_string()),
                bank_name: Set(bank_name),
                branch: Set(branch),
                reference: Set(reference),
                payment_date: Set(payment_date),
                ..Default::default()
            }
            .insert(conn)
            .await?;
        }
    }

    debug!(document_id, "Stored child rows");
    Ok(())
}

async fn delete_children<C>(conn: &C, document_id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    party::Entity::delete_many()
        .filter(party::Column::DocumentId.eq(document_id))
        .exec(conn)
        .await?;
    prior_document::Entity::delete_many()
        .filter(prior_document::Column::DocumentId.eq(document_id))
        .exec(conn)
        .await?;
    property::Entity::delete_many()
        .filter(property::Column::DocumentId.eq(document_id))
        .exec(conn)
        .await?;
    payment::Entity::delete_many()
        .filter(payment::Column::DocumentId.eq(document_id))
        .exec(conn)
        .await?;
    Ok(())
}

fn party_from_row(row: &party::Model) -> Result<Party> {
    Ok(Party {
        name: row.name.clone(),
        age: row.age.clone(),
        relation_type: row
            .relation_type
            .parse()
            .map_err(|message| Error::Corrupt { message })?,
        relation_name: row.relation_name.clone(),
        address_line1: row.address_line1.clone(),
        address_line2: row.address_line2.clone(),
        address_line3: row.address_line3.clone(),
        taluk: row.taluk.clone(),
        district: row.district.clone(),
        pincode: row.pincode.clone(),
        aadhaar_number: row.aadhaar_number.clone(),
        phone: row.phone.clone(),
    })
}

fn payment_from_row(row: &payment::Model) -> Result<Payment> {
    let instrument = || InstrumentDetails {
        bank_name: row.bank_name.clone().unwrap_or_default(),
        branch: row.branch.clone().unwrap_or_default(),
        instrument_number: row.reference.clone().unwrap_or_default(),
        instrument_date: row.payment_date.map(format_display_date).unwrap_or_default(),
    };
    let transfer = || TransferDetails {
        bank_name: row.bank_name.clone().unwrap_or_default(),
        transaction_reference: row.reference.clone().unwrap_or_default(),
        transaction_date: row.payment_date.map(format_display_date).unwrap_or_default(),
    };

    let method = match row.method.as_str() {
        "cash" => PaymentMethod::Cash,
        "cheque" => PaymentMethod::Cheque(instrument()),
        "demand_draft" => PaymentMethod::DemandDraft(instrument()),
        "upi" => PaymentMethod::Upi(transfer()),
        "neft" => PaymentMethod::Neft(transfer()),
        "rtgs" => PaymentMethod::Rtgs(transfer()),
        "imps" => PaymentMethod::Imps(transfer()),
        other => {
            return Err(Error::Corrupt {
                message: format!("unknown payment method '{other}'"),
            });
        }
    };

    Ok(Payment {
        amount: row.amount.clone(),
        method,
    })
}

/// Rebuilds the form a header row and its children were saved from.
async fn load_form<C>(conn: &C, header: &document::Model) -> Result<DocumentForm>
where
    C: ConnectionTrait,
{
    let kind = header
        .kind
        .parse::<DocumentKind>()
        .map_err(|message| Error::Corrupt { message })?;

    let party_rows = party::Entity::find()
        .filter(party::Column::DocumentId.eq(header.id))
        .order_by_asc(party::Column::Position)
        .all(conn)
        .await?;
    let parties_for = |role: PartyRole| -> Result<Vec<Party>> {
        party_rows
            .iter()
            .filter(|row| row.role == role.as_str())
            .map(party_from_row)
            .collect()
    };

    let prior_documents = prior_document::Entity::find()
        .filter(prior_document::Column::DocumentId.eq(header.id))
        .order_by_asc(prior_document::Column::Position)
        .all(conn)
        .await?
        .into_iter()
        .map(|row| PriorDocument {
            book_number: row.book_number,
            sro_office: row.sro_office,
            year: row.year,
            document_number: row.document_number,
        })
        .collect();

    let properties = property::Entity::find()
        .filter(property::Column::DocumentId.eq(header.id))
        .order_by_asc(property::Column::Position)
        .all(conn)
        .await?
        .into_iter()
        .map(|row| Property {
            district: row.district,
            taluk: row.taluk,
            village: row.village,
            survey_number: row.survey_number,
            subdivision: row.subdivision,
            extent: row.extent,
            north: row.north,
            south: row.south,
            east: row.east,
            west: row.west,
            guide_value: row.guide_value.unwrap_or_default(),
        })
        .collect();

    let body = DocumentBody {
        document_date: format_display_date(header.document_date),
        amount: header.amount.clone(),
        amount_in_words: header.amount_in_words.clone(),
        property_description: header.property_description.clone(),
        prior_documents,
        properties,
        witnesses: parties_for(PartyRole::Witness)?,
        attribution: Attribution {
            typist_name: header.typist_name.clone(),
            typist_office: header.typist_office.clone(),
            sro_office: header.sro_office.clone(),
        },
    };

    let form = match kind {
        DocumentKind::MortgageDeed => DocumentForm::MortgageDeed(MortgageDeed {
            body,
            borrowers: parties_for(PartyRole::Borrower)?,
            lenders: parties_for(PartyRole::Lender)?,
            interest_rate: header.interest_rate.clone().unwrap_or_default(),
            tenure_months: header.tenure_months.clone().unwrap_or_default(),
        }),
        DocumentKind::SaleAgreement => DocumentForm::SaleAgreement(SaleAgreement {
            body,
            sellers: parties_for(PartyRole::Seller)?,
            buyers: parties_for(PartyRole::Buyer)?,
            advance_amount: header.advance_amount.clone().unwrap_or_default(),
            completion_date: header
                .completion_date
                .map(format_display_date)
                .unwrap_or_default(),
        }),
        DocumentKind::SaleDeed => {
            let payments = payment::Entity::find()
                .filter(payment::Column::DocumentId.eq(header.id))
                .order_by_asc(payment::Column::Position)
                .all(conn)
                .await?
                .iter()
                .map(payment_from_row)
                .collect::<Result<Vec<_>>>()?;
            DocumentForm::SaleDeed(SaleDeed {
                body,
                sellers: parties_for(PartyRole::Seller)?,
                buyers: parties_for(PartyRole::Buyer)?,
                payments,
            })
        }
    };

    Ok(form)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::validation::Section;
    use crate::test_utils::{
        sample_mortgage_deed, sample_party, sample_sale_agreement, sample_sale_deed, setup_test_db,
    };
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_invalid_form_rejected_before_database() -> Result<()> {
        // No query results are queued, so any database access would fail
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();
        let mut deed = sample_sale_deed();
        deed.buyers.clear();

        match save_document(&db, &DocumentForm::SaleDeed(deed)).await {
            Err(Error::Validation(report)) => {
                assert_eq!(report.first_invalid_section, Some(Section::Buyers));
            }
            other => panic!("expected a validation error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_save_then_fetch_returns_same_form() -> Result<()> {
        let db = setup_test_db().await?;

        for form in [
            DocumentForm::SaleDeed(sample_sale_deed()),
            DocumentForm::MortgageDeed(sample_mortgage_deed()),
            DocumentForm::SaleAgreement(sample_sale_agreement()),
        ] {
            let id = save_document(&db, &form).await?;
            let record = fetch_document(&db, id).await?;

            assert_eq!(record.id, id);
            assert_eq!(record.status, DocumentStatus::Draft);
            assert_eq!(record.form, form);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_normalises_dates_and_keeps_typed_numbers() -> Result<()> {
        let db = setup_test_db().await?;
        let mut deed = sample_sale_deed();
        deed.body.document_date = "2024-06-15".to_string();
        deed.body.amount = "2,50,000".to_string();
        deed.body.prior_documents = vec![PriorDocument {
            book_number: "1".to_string(),
            sro_office: "தல்லாகுளம்".to_string(),
            year: "2010".to_string(),
            document_number: "1234".to_string(),
        }];
        deed.payments = vec![
            Payment {
                amount: "100000.5".to_string(),
                method: PaymentMethod::Cash,
            },
            Payment {
                amount: "149999.50".to_string(),
                method: PaymentMethod::Cheque(InstrumentDetails {
                    bank_name: "Canara Bank".to_string(),
                    branch: "Madurai".to_string(),
                    instrument_number: "004512".to_string(),
                    instrument_date: "2024-06-14".to_string(),
                }),
            },
        ];

        let id = save_document(&db, &DocumentForm::SaleDeed(deed)).await?;
        let DocumentForm::SaleDeed(stored) = fetch_document(&db, id).await?.form else {
            panic!("kind changed on fetch");
        };

        assert_eq!(stored.body.document_date, "15/06/2024");
        assert_eq!(stored.body.amount, "2,50,000");
        assert_eq!(stored.body.prior_documents[0].year, "2010");
        assert_eq!(stored.payments[0].amount, "100000.5");
        assert_eq!(stored.payments[1].amount, "149999.50");
        assert_eq!(
            stored.payments[1].method,
            PaymentMethod::Cheque(InstrumentDetails {
                bank_name: "Canara Bank".to_string(),
                branch: "Madurai".to_string(),
                instrument_number: "004512".to_string(),
                instrument_date: "14/06/2024".to_string(),
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_numbers_read_back_as_typed() -> Result<()> {
        let db = setup_test_db().await?;
        let mut deed = sample_mortgage_deed();
        deed.body.amount = "100000.50".to_string();
        deed.interest_rate = "1.50".to_string();
        deed.tenure_months = "012".to_string();
        deed.borrowers[0].age = "045".to_string();
        deed.body.properties[0].guide_value = "75000.00".to_string();
        let form = DocumentForm::MortgageDeed(deed);

        let id = save_document(&db, &form).await?;
        let DocumentForm::MortgageDeed(stored) = fetch_document(&db, id).await?.form else {
            panic!("kind changed on fetch");
        };

        assert_eq!(stored.body.amount, "100000.50");
        assert_eq!(stored.interest_rate, "1.50");
        assert_eq!(stored.tenure_months, "012");
        assert_eq!(stored.borrowers[0].age, "045");
        assert_eq!(stored.body.properties[0].guide_value, "75000.00");
        assert_eq!(DocumentForm::MortgageDeed(stored), form);
        Ok(())
    }

    #[tokio::test]
    async fn test_sub_paise_amount_is_not_saved() -> Result<()> {
        let db = setup_test_db().await?;
        let mut deed = sample_sale_deed();
        deed.body.amount = "250000.125".to_string();
        deed.payments[0].amount = "250000.125".to_string();

        let result = save_document(&db, &DocumentForm::SaleDeed(deed)).await;
        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(list_documents(&db, None).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_update_replaces_children() -> Result<()> {
        let db = setup_test_db().await?;
        let mut deed = sample_sale_deed();
        deed.sellers.push(sample_party("செந்தில்", "40"));
        let id = save_document(&db, &DocumentForm::SaleDeed(deed.clone())).await?;

        deed.sellers.truncate(1);
        deed.sellers[0].name = "முருகேசன்".to_string();
        deed.body.witnesses.clear();
        let updated = DocumentForm::SaleDeed(deed);
        update_document(&db, id, &updated).await?;

        let record = fetch_document(&db, id).await?;
        assert_eq!(record.form, updated);

        let party_rows = party::Entity::find()
            .filter(party::Column::DocumentId.eq(id))
            .all(&db)
            .await?;
        assert_eq!(party_rows.len(), 2); // one seller, one buyer
        Ok(())
    }

    #[tokio::test]
    async fn test_update_rejects_kind_change_and_missing_id() -> Result<()> {
        let db = setup_test_db().await?;
        let id = save_document(&db, &DocumentForm::SaleDeed(sample_sale_deed())).await?;

        let mortgage = DocumentForm::MortgageDeed(sample_mortgage_deed());
        let result = update_document(&db, id, &mortgage).await;
        assert!(matches!(result, Err(Error::KindMismatch { .. })));

        let result = update_document(&db, id + 100, &mortgage).await;
        assert!(matches!(result, Err(Error::DocumentNotFound { .. })));

        // The stored document is untouched
        let record = fetch_document(&db, id).await?;
        assert_eq!(record.form.kind(), DocumentKind::SaleDeed);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_filters_and_orders_newest_first() -> Result<()> {
        let db = setup_test_db().await?;
        let first = save_document(&db, &DocumentForm::SaleDeed(sample_sale_deed())).await?;
        let second =
            save_document(&db, &DocumentForm::MortgageDeed(sample_mortgage_deed())).await?;
        let third = save_document(&db, &DocumentForm::SaleDeed(sample_sale_deed())).await?;

        let all = list_documents(&db, None).await?;
        let ids: Vec<i64> = all.iter().map(|summary| summary.id).collect();
        assert_eq!(ids, vec![third, second, first]);

        let mortgage = all.iter().find(|summary| summary.id == second).unwrap();
        assert_eq!(mortgage.first_party.as_deref(), Some("ராமசாமி"));
        assert_eq!(mortgage.amount, "100000");
        assert_eq!(mortgage.document_date, "10/06/2024");

        let sale_deeds = list_documents(&db, Some(DocumentKind::SaleDeed)).await?;
        assert_eq!(sale_deeds.len(), 2);
        assert!(sale_deeds.iter().all(|summary| summary.kind == DocumentKind::SaleDeed));
        Ok(())
    }

    #[tokio::test]
    async fn test_set_status_and_delete() -> Result<()> {
        let db = setup_test_db().await?;
        let id = save_document(&db, &DocumentForm::SaleDeed(sample_sale_deed())).await?;

        set_status(&db, id, DocumentStatus::Final).await?;
        assert_eq!(fetch_document(&db, id).await?.status, DocumentStatus::Final);

        delete_document(&db, id).await?;
        assert!(matches!(
            fetch_document(&db, id).await,
            Err(Error::DocumentNotFound { id: missing }) if missing == id
        ));
        assert!(
            payment::Entity::find()
                .filter(payment::Column::DocumentId.eq(id))
                .all(&db)
                .await?
                .is_empty()
        );

        assert!(matches!(
            delete_document(&db, id).await,
            Err(Error::DocumentNotFound { .. })
        ));
        assert!(matches!(
            set_status(&db, id, DocumentStatus::Draft).await,
            Err(Error::DocumentNotFound { .. })
        ));
        Ok(())
    }
}
