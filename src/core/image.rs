//! Product image business logic.
//!
//! Images only record a file reference; storing or serving the file itself is
//! left to whatever media layer sits in front of the catalog.

use crate::{
    entities::{ProductImage, product_image},
    errors::{Error, Result, is_foreign_key_violation},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Attaches an image reference to a product.
///
/// # Errors
/// Returns an error if the product does not exist or the insert fails.
#[instrument(skip(db))]
pub async fn add_image(
    db: &DatabaseConnection,
    product_id: i64,
    image: &str,
) -> Result<product_image::Model> {
    let record = product_image::ActiveModel {
        image: Set(image.to_string()),
        product_id: Set(product_id),
        ..Default::default()
    };

    let created = record.insert(db).await.map_err(|err| {
        if is_foreign_key_violation(&err) {
            Error::ProductNotFound { id: product_id }
        } else {
            err.into()
        }
    })?;

    info!(id = created.id, product_id, "Attached product image");
    Ok(created)
}

/// Lists a product's images in the order they were added.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_images_for_product(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<Vec<product_image::Model>> {
    ProductImage::find()
        .filter(product_image::Column::ProductId.eq(product_id))
        .order_by_asc(product_image::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Removes a single image reference.
///
/// # Errors
/// Returns an error if the image does not exist or the delete fails.
#[instrument(skip(db))]
pub async fn delete_image(db: &DatabaseConnection, image_id: i64) -> Result<()> {
    let result = ProductImage::delete_by_id(image_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ImageNotFound { id: image_id });
    }
    Ok(())
}
