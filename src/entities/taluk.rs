//! Taluk entity - administrative sub-division of a district.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Taluk database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "taluks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub district_id: i64,
    pub name: String,
}

/// Defines relationships between Taluk and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each taluk belongs to one district
    #[sea_orm(
        belongs_to = "super::district::Entity",
        from = "Column::DistrictId",
        to = "super::district::Column::Id"
    )]
    District,
    /// One taluk has many villages
    #[sea_orm(has_many = "super::village::Entity")]
    Villages,
}

impl Related<super::district::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::District.def()
    }
}

impl Related<super::village::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Villages.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
