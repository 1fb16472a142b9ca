//! Product entity - Represents a sellable item in the catalog.
//!
//! Each product has a name, stock count, price, description, SKU and slug.
//! The slug is derived from the name on save when it is blank, the VAT is
//! computed from the price on read, and listings are ordered by ascending price.

use crate::core::{
    slug::slugify,
    urls::{PRODUCT_DETAIL_ROUTE, UrlResolver},
};
use sea_orm::{ActiveValue, QueryOrder, entity::prelude::*};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat VAT rate applied to product prices (20%)
pub const VAT_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the product (e.g., "Trail Running Shoe")
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    /// How many items are currently in stock
    pub stock_count: i32,
    /// Unit price; the storage layer rejects negative values (`price_not_negative`)
    #[sea_orm(column_type = "Decimal(Some((6, 2)))")]
    pub price: Decimal,
    /// Free-form description
    #[sea_orm(column_type = "Text", default_value = "")]
    pub description: String,
    /// Stock Keeping Unit, unique across the catalog
    #[sea_orm(column_type = "String(StringLen::N(20))", unique, default_value = "")]
    pub sku: String,
    /// URL-safe identifier, filled from `name` on save when blank
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub slug: String,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One product has many images
    #[sea_orm(has_many = "super::product_image::Entity")]
    Images,
    /// Membership rows linking this product to categories
    #[sea_orm(has_many = "super::category_product::Entity")]
    CategoryLinks,
}

impl Related<super::product_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::category_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryLinks.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::category_product::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::category_product::Relation::Product.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        // An update that leaves the slug untouched must keep the stored value
        let slug_is_blank = match &self.slug {
            ActiveValue::Set(slug) | ActiveValue::Unchanged(slug) => slug.trim().is_empty(),
            ActiveValue::NotSet => insert,
        };

        if slug_is_blank {
            if let ActiveValue::Set(name) | ActiveValue::Unchanged(name) = &self.name {
                let slug = slugify(name);
                tracing::debug!(name = %name, slug = %slug, "Filling blank product slug");
                self.slug = ActiveValue::Set(slug);
            }
        }

        Ok(self)
    }
}

impl Entity {
    /// Selects all products in the default order (ascending price).
    #[must_use]
    pub fn find_ordered() -> Select<Self> {
        Self::find().order_by_asc(Column::Price)
    }

    /// Selects products that currently have stock, in the default order.
    #[must_use]
    pub fn find_in_stock() -> Select<Self> {
        Self::find_ordered().filter(Column::StockCount.gt(0))
    }
}

impl Model {
    /// Value added tax owed on this product's price.
    #[must_use]
    pub fn vat(&self) -> Decimal {
        VAT_RATE * self.price
    }

    /// Canonical URL of the product detail page.
    pub fn get_absolute_url(&self, urls: &UrlResolver) -> crate::errors::Result<String> {
        let pk = self.id.to_string();
        urls.reverse(PRODUCT_DETAIL_ROUTE, &[("pk", pk.as_str())])
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
