//! District entity - top of the address hierarchy used by form dropdowns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// District database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "districts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
}

/// Defines relationships between District and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One district has many taluks
    #[sea_orm(has_many = "super::taluk::Entity")]
    Taluks,
    /// One district has many Sub-Registrar Offices
    #[sea_orm(has_many = "super::sub_registrar_office::Entity")]
    SubRegistrarOffices,
}

impl Related<super::taluk::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Taluks.def()
    }
}

impl Related<super::sub_registrar_office::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubRegistrarOffices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
