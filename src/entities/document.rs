//! Document entity - header row of a mortgage deed, sale agreement or sale deed.
//!
//! Parties, prior documents, property schedule rows and payments live in their
//! own tables keyed by `document_id`. Columns specific to one document type are
//! nullable and left empty for the others.
//!
//! Numbers typed into the form are validated before saving and stored as
//! entered, so a fetched form reads back exactly as it was submitted.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Document header database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    /// Unique identifier for the document
    #[sea_orm(primary_key)]
    pub id: i64,
    /// `"mortgage_deed"`, `"sale_agreement"` or `"sale_deed"`
    pub kind: String,
    /// `"draft"` or `"final"`
    pub status: String,
    /// Execution date of the deed
    pub document_date: Date,
    /// Loan amount or sale consideration as entered
    pub amount: String,
    /// Amount in words as entered (may be empty)
    pub amount_in_words: String,
    /// Free-text property description
    pub property_description: String,
    pub typist_name: String,
    pub typist_office: String,
    /// Sub-Registrar Office where the deed will be registered
    pub sro_office: String,
    /// Mortgage only: percent per month
    pub interest_rate: Option<String>,
    /// Mortgage only
    pub tenure_months: Option<String>,
    /// Sale agreement only
    pub advance_amount: Option<String>,
    /// Sale agreement only
    pub completion_date: Option<Date>,
    /// When the document was first saved
    pub created_at: DateTime,
    /// When the document was last saved
    pub updated_at: DateTime,
}

/// Defines relationships between Document and its child rows
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One document has many parties
    #[sea_orm(has_many = "super::party::Entity")]
    Parties,
    /// One document has many prior document references
    #[sea_orm(has_many = "super::prior_document::Entity")]
    PriorDocuments,
    /// One document has many property schedule rows
    #[sea_orm(has_many = "super::property::Entity")]
    Properties,
    /// One sale deed has many payments
    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
}

impl Related<super::party::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parties.def()
    }
}

impl Related<super::prior_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PriorDocuments.def()
    }
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Properties.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
