//! Seeding the catalog from configuration.
//!
//! Seeding is idempotent: products are matched by SKU and categories by name, so
//! running it against an already-seeded database only fills in what is missing.

use crate::{
    config::catalog::CatalogConfig,
    core::{
        category,
        image,
        product::{self, NewProduct},
    },
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing::{info, instrument, warn};

/// Counts of rows created by a seeding run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Products inserted
    pub products_created: usize,
    /// Images attached to newly inserted products
    pub images_created: usize,
    /// Categories inserted
    pub categories_created: usize,
}

/// Inserts the products and categories listed in `config` that are not stored yet,
/// then links every configured category to its products.
///
/// Category entries naming an unknown SKU are skipped with a warning.
///
/// # Errors
/// Returns an error if any insert fails, including constraint violations such as a
/// negative configured price.
#[instrument(skip_all)]
pub async fn seed_catalog(db: &DatabaseConnection, config: &CatalogConfig) -> Result<SeedSummary> {
    let mut summary = SeedSummary::default();

    for entry in &config.products {
        if product::get_product_by_sku(db, &entry.sku).await?.is_some() {
            continue;
        }

        let created = product::create_product(
            db,
            NewProduct {
                name: entry.name.clone(),
                stock_count: entry.stock_count,
                price: entry.price,
                description: entry.description.clone(),
                sku: entry.sku.clone(),
                slug: entry.slug.clone(),
            },
        )
        .await?;
        summary.products_created += 1;

        for path in &entry.images {
            image::add_image(db, created.id, path).await?;
            summary.images_created += 1;
        }
    }

    for entry in &config.categories {
        let existing = category::get_category_by_name(db, &entry.name).await?;
        let stored = match existing {
            Some(stored) => stored,
            None => {
                summary.categories_created += 1;
                category::create_category(db, &entry.name).await?
            }
        };

        for sku in &entry.products {
            match product::get_product_by_sku(db, sku).await? {
                Some(member) => {
                    category::add_product_to_category(db, stored.id, member.id).await?;
                }
                None => warn!(category = %entry.name, sku = %sku, "Unknown SKU in category"),
            }
        }
    }

    info!(
        products = summary.products_created,
        images = summary.images_created,
        categories = summary.categories_created,
        "Catalog seeded"
    );
    Ok(summary)
}
