//! Village entity - revenue village within a taluk.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Village database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "villages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub taluk_id: i64,
    pub name: String,
}

/// Defines relationships between Village and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each village belongs to one taluk
    #[sea_orm(
        belongs_to = "super::taluk::Entity",
        from = "Column::TalukId",
        to = "super::taluk::Column::Id"
    )]
    Taluk,
}

impl Related<super::taluk::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Taluk.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
