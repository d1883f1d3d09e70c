//! Prior document entity - a registered document in the title chain.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Prior document reference database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prior_documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub document_id: i64,
    pub position: i32,
    /// Registration book (usually `"1"` for sale and mortgage deeds)
    pub book_number: String,
    /// Sub-Registrar Office where it was registered
    pub sro_office: String,
    pub year: String,
    pub document_number: String,
}

/// Defines relationships between `PriorDocument` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each reference belongs to one document
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
