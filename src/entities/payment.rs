//! Payment entity - one itemised payment of a sale deed.
//!
//! Which of the optional columns are filled depends on `method`: cash rows
//! carry none, cheque and demand draft rows carry a branch, every non-cash row
//! carries a bank name, reference and date.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub document_id: i64,
    pub position: i32,
    /// Rupees as entered
    pub amount: String,
    /// `"cash"`, `"cheque"`, `"demand_draft"`, `"upi"`, `"neft"`, `"rtgs"` or `"imps"`
    pub method: String,
    pub bank_name: Option<String>,
    pub branch: Option<String>,
    /// Cheque/DD number or transaction reference
    pub reference: Option<String>,
    /// Instrument or transaction date
    pub payment_date: Option<Date>,
}

/// Defines relationships between Payment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each payment belongs to one document
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
