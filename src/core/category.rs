//! Category business logic - Handles categories and their product memberships.
//!
//! Categories group products many-to-many. Membership changes are idempotent:
//! adding a product twice or removing a product that is not a member is not an error.

use crate::{
    entities::{Category, CategoryProduct, Product, category, category_product, product},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use tracing::{debug, info, instrument};

/// Retrieves every category, ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>> {
    Category::find_ordered().all(db).await.map_err(Into::into)
}

/// Retrieves a specific category by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_category_by_id(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Option<category::Model>> {
    Category::find_by_id(category_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a category by its exact name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_category_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<category::Model>> {
    Category::find_ordered()
        .filter(category::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new, empty category.
///
/// # Errors
/// Returns an error if the database insert operation fails.
#[instrument(skip(db))]
pub async fn create_category(db: &DatabaseConnection, name: &str) -> Result<category::Model> {
    let category = category::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    };
    let created = category.insert(db).await?;
    info!(id = created.id, "Created category");
    Ok(created)
}

/// Renames an existing category.
///
/// # Errors
/// Returns an error if the category does not exist or the update fails.
#[instrument(skip(db))]
pub async fn rename_category(
    db: &DatabaseConnection,
    category_id: i64,
    new_name: &str,
) -> Result<category::Model> {
    let mut category: category::ActiveModel = Category::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or(Error::CategoryNotFound { id: category_id })?
        .into();

    category.name = Set(new_name.to_string());
    category.update(db).await.map_err(Into::into)
}

/// Deletes a category. Its member products are kept; only the memberships go.
///
/// # Errors
/// Returns an error if the category does not exist or the delete fails.
#[instrument(skip(db))]
pub async fn delete_category(db: &DatabaseConnection, category_id: i64) -> Result<()> {
    let result = Category::delete_by_id(category_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::CategoryNotFound { id: category_id });
    }
    info!(id = category_id, "Deleted category");
    Ok(())
}

/// Adds a product to a category. Does nothing if it is already a member.
///
/// # Errors
/// Returns an error if the category or product does not exist, or the insert fails.
#[instrument(skip(db))]
pub async fn add_product_to_category(
    db: &DatabaseConnection,
    category_id: i64,
    product_id: i64,
) -> Result<()> {
    if Category::find_by_id(category_id).one(db).await?.is_none() {
        return Err(Error::CategoryNotFound { id: category_id });
    }
    if Product::find_by_id(product_id).one(db).await?.is_none() {
        return Err(Error::ProductNotFound { id: product_id });
    }

    let existing = CategoryProduct::find_by_id((category_id, product_id))
        .one(db)
        .await?;
    if existing.is_some() {
        debug!("Product already in category");
        return Ok(());
    }

    category_product::ActiveModel {
        category_id: Set(category_id),
        product_id: Set(product_id),
    }
    .insert(db)
    .await?;
    Ok(())
}

/// Removes a product from a category. Does nothing if it is not a member.
///
/// # Errors
/// Returns an error if the database delete operation fails.
#[instrument(skip(db))]
pub async fn remove_product_from_category(
    db: &DatabaseConnection,
    category_id: i64,
    product_id: i64,
) -> Result<()> {
    CategoryProduct::delete_by_id((category_id, product_id))
        .exec(db)
        .await?;
    Ok(())
}

/// Lists the products in a category, ordered by ascending price.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_products_in_category(
    db: &DatabaseConnection,
    category_id: i64,
) -> Result<Vec<product::Model>> {
    Product::find_ordered()
        .inner_join(CategoryProduct)
        .filter(category_product::Column::CategoryId.eq(category_id))
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists the categories a product belongs to, ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_categories_for_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<category::Model>> {
    Category::find_ordered()
        .inner_join(CategoryProduct)
        .filter(category_product::Column::ProductId.eq(product_id))
        .all(db)
        .await
        .map_err(Into::into)
}
