//! Category/product membership - Junction table for the many-to-many link.
//!
//! Neither side owns the other: removing a category or a product only
//! removes the membership rows that reference it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Membership row linking one category to one product
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category_products")]
pub struct Model {
    /// Linked category
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: i64,
    /// Linked product
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i64,
}

/// Defines the two sides of the membership
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// The category side
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "Cascade"
    )]
    Category,
    /// The product side
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
