//! Category entity - A named grouping of products.
//!
//! Categories and products are linked many-to-many through
//! [`super::category_product`]. Listings are ordered by ascending name.

use sea_orm::{QueryOrder, entity::prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable plural used when listing categories
pub const VERBOSE_NAME_PLURAL: &str = "Categories";

/// Category database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    /// Unique identifier for the category
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Footwear")
    #[sea_orm(column_type = "String(StringLen::N(150))")]
    pub name: String,
}

/// Defines relationships between Category and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Membership rows linking this category to products
    #[sea_orm(has_many = "super::category_product::Entity")]
    ProductLinks,
}

impl Related<super::category_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductLinks.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::category_product::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::category_product::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Entity {
    /// Selects all categories in the default order (ascending name).
    #[must_use]
    pub fn find_ordered() -> Select<Self> {
        Self::find().order_by_asc(Column::Name)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
