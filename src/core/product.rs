//! Product business logic - Handles all product-related operations.
//!
//! This module provides functions for creating, retrieving, updating, and deleting products
//! in the catalog. Validation is left to the storage layer: a negative price is rejected by
//! the `price_not_negative` CHECK constraint and a repeated SKU by the UNIQUE constraint,
//! both surfacing as [`Error`] variants. Blank slugs are filled from the product name by the
//! entity's save hook.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{Set, TryIntoModel, prelude::*};
use tracing::{debug, info, instrument};

/// Fields for a product that has not been stored yet.
#[derive(Debug, Clone, Default)]
pub struct NewProduct {
    /// Display name
    pub name: String,
    /// Units on hand
    pub stock_count: i32,
    /// Unit price
    pub price: Decimal,
    /// Free-form description
    pub description: String,
    /// Stock Keeping Unit
    pub sku: String,
    /// Explicit slug; left empty to derive it from `name`
    pub slug: String,
}

/// Partial update of a stored product. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    /// New display name
    pub name: Option<String>,
    /// New stock count
    pub stock_count: Option<i32>,
    /// New unit price
    pub price: Option<Decimal>,
    /// New description
    pub description: Option<String>,
    /// New SKU
    pub sku: Option<String>,
    /// New slug; an empty string asks the save hook to derive it again
    pub slug: Option<String>,
}

/// Retrieves every product, ordered by ascending price.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find_ordered().all(db).await.map_err(Into::into)
}

/// Retrieves the products that have at least one unit in stock, ordered by ascending price.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_in_stock_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    Product::find_in_stock().all(db).await.map_err(Into::into)
}

/// Retrieves a specific product by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a product by its slug, as used in product URLs.
///
/// Slugs are not unique; when several products share one the cheapest is returned.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<product::Model>> {
    Product::find_ordered()
        .filter(product::Column::Slug.eq(slug))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a product by its Stock Keeping Unit.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_product_by_sku(
    db: &DatabaseConnection,
    sku: &str,
) -> Result<Option<product::Model>> {
    Product::find()
        .filter(product::Column::Sku.eq(sku))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts a new product.
///
/// # Errors
/// Returns an error if:
/// - The price is negative ([`Error::CheckViolation`])
/// - Another product already uses the SKU ([`Error::UniqueViolation`])
/// - The database insert operation fails
#[instrument(skip(db, new_product), fields(name = %new_product.name, sku = %new_product.sku))]
pub async fn create_product(
    db: &DatabaseConnection,
    new_product: NewProduct,
) -> Result<product::Model> {
    let product = product::ActiveModel {
        name: Set(new_product.name),
        stock_count: Set(new_product.stock_count),
        price: Set(new_product.price),
        description: Set(new_product.description),
        sku: Set(new_product.sku),
        slug: Set(new_product.slug),
        ..Default::default()
    };

    let created = product.insert(db).await?;
    info!(id = created.id, slug = %created.slug, "Created product");
    Ok(created)
}

/// Persists a product through the ORM lifecycle, inserting it when it has no ID yet
/// and updating it otherwise. The slug hook runs on both paths.
///
/// # Errors
/// Returns an error if a storage constraint rejects the row or the write fails.
pub async fn save_product(
    db: &DatabaseConnection,
    product: product::ActiveModel,
) -> Result<product::Model> {
    let saved = product.save(db).await?;
    saved.try_into_model().map_err(Into::into)
}

/// Applies a partial update to an existing product.
///
/// # Errors
/// Returns an error if:
/// - The product does not exist
/// - A storage constraint rejects the new values
/// - The database update operation fails
#[instrument(skip(db, changes))]
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i64,
    changes: ProductUpdate,
) -> Result<product::Model> {
    let mut product: product::ActiveModel = Product::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or(Error::ProductNotFound { id: product_id })?
        .into();

    if let Some(name) = changes.name {
        product.name = Set(name);
    }
    if let Some(stock_count) = changes.stock_count {
        product.stock_count = Set(stock_count);
    }
    if let Some(price) = changes.price {
        product.price = Set(price);
    }
    if let Some(description) = changes.description {
        product.description = Set(description);
    }
    if let Some(sku) = changes.sku {
        product.sku = Set(sku);
    }
    if let Some(slug) = changes.slug {
        product.slug = Set(slug);
    }

    let updated = product.update(db).await?;
    debug!(id = updated.id, "Updated product");
    Ok(updated)
}

/// Deletes a product. Its images and category memberships are removed with it.
///
/// # Errors
/// Returns an error if the product does not exist or the delete fails.
#[instrument(skip(db))]
pub async fn delete_product(db: &DatabaseConnection, product_id: i64) -> Result<()> {
    let result = Product::delete_by_id(product_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ProductNotFound { id: product_id });
    }
    info!(id = product_id, "Deleted product");
    Ok(())
}
