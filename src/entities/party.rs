//! Party entity - a seller, buyer, borrower, lender or witness of a document.
//!
//! The same shape serves every role; `role` distinguishes them and `position`
//! keeps the order in which they were entered on the form.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Party database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning document
    pub document_id: i64,
    /// `"seller"`, `"buyer"`, `"borrower"`, `"lender"` or `"witness"`
    pub role: String,
    /// Zero-based order within the role
    pub position: i32,
    pub name: String,
    /// Age in years as entered
    pub age: String,
    pub relation_type: String,
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

/// Defines relationships between Party and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each party belongs to one document
    #[sea_orm(
        belongs_to = "super::document::Entity",
        from = "Column::DocumentId",
        to = "super::document::Column::Id"
    )]
    Document,
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Document.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
