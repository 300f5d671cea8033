//! `SeaORM` Entity for the products table.
//!
//! The category display name is **not** a column here: it is a read-time
//! projection resolved by joining `categories` (see the repository crate).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Price in the smallest currency unit. No fractional handling.
    pub price: i64,
    pub image_url: String,
    /// Care attribute: watering regimen, free text.
    pub watering: String,
    /// Care attribute: light regimen, free text.
    pub light: String,
    /// Declared FK to `categories.id`; may dangle, reads degrade to an
    /// empty display name.
    pub category_id: i32,
    /// Availability flag.
    pub stock: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
