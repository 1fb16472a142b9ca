//! Shared test utilities for the store catalog.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::product::{self, NewProduct},
    entities,
    errors::Result,
};
use sea_orm::{DatabaseConnection, prelude::Decimal};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once; later calls are ignored.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `price`: 10.00
/// * `stock_count`: 5
/// * `description`: empty
/// * `slug`: derived from `name`
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    sku: &str,
) -> Result<entities::product::Model> {
    create_custom_product(db, name, sku, Decimal::new(1000, 2), 5).await
}

/// Creates a test product with a custom price and stock count.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    sku: &str,
    price: Decimal,
    stock_count: i32,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        NewProduct {
            name: name.to_string(),
            stock_count,
            price,
            sku: sku.to_string(),
            ..Default::default()
        },
    )
    .await
}

/// Sets up a complete test environment with one product.
/// Returns (db, product) for image and category tests.
pub async fn setup_with_product() -> Result<(DatabaseConnection, entities::product::Model)> {
    let db = setup_test_db().await?;
    let product = create_test_product(&db, "Test Product", "TEST-1").await?;
    Ok((db, product))
}
