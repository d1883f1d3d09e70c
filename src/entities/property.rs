//! Property entity - one row of a document's property schedule.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Property schedule database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub document_id: i64,
    pub position: i32,
    pub district: String,
    pub taluk: String,
    pub village: String,
    pub survey_number: String,
    pub subdivision: String,
    /// Extent as written, e.g. `"0.45.5 ஹெக்டேர்"`
    pub extent: String,
    pub north: String,
    pub south: String,
    pub east: String,
    pub west: String,
    /// Government guide value in rupees as entered, if any
    pub guide_value: Option<String>,
}

/// Defines relationships between Property and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each schedule row belongs to one document
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
