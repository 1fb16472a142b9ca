//! Database configuration module for the store catalog.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the schema always matches the Rust structs. The one constraint entities cannot express,
//! the `price_not_negative` CHECK on products, is attached to the generated statement here.

use crate::entities::{Category, CategoryProduct, Product, ProductImage, product};
use crate::errors::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, Schema,
    sea_query::{Expr, TableCreateStatement},
};
use tracing::{debug, info};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/store.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, falling back to
/// a local `SQLite` file.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection to the database named by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!(url = %database_url, "Connecting to database");
    Database::connect(&database_url).await.map_err(Into::into)
}

/// Builds the `products` table statement, including the `price_not_negative` check.
fn product_table(schema: &Schema) -> TableCreateStatement {
    let mut table = schema.create_table_from_entity(Product);
    table
        .if_not_exists()
        .check(Expr::col(product::Column::Price).gte(0));
    table
}

/// Creates all catalog tables if they do not exist yet.
///
/// Referenced tables are created before the tables that point at them.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut image_table = schema.create_table_from_entity(ProductImage);
    let mut category_table = schema.create_table_from_entity(Category);
    let mut membership_table = schema.create_table_from_entity(CategoryProduct);
    image_table.if_not_exists();
    category_table.if_not_exists();
    membership_table.if_not_exists();

    db.execute(builder.build(&product_table(&schema))).await?;
    db.execute(builder.build(&image_table)).await?;
    db.execute(builder.build(&category_table)).await?;
    db.execute(builder.build(&membership_table)).await?;

    info!("Catalog tables ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        category::Model as CategoryModel, category_product::Model as CategoryProductModel,
        product::Model as ProductModel, product_image::Model as ProductImageModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<ProductModel> = Product::find().limit(1).all(&db).await?;
        let _: Vec<ProductImageModel> = ProductImage::find().limit(1).all(&db).await?;
        let _: Vec<CategoryModel> = Category::find().limit(1).all(&db).await?;
        let _: Vec<CategoryProductModel> = CategoryProduct::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_repeatable() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }

    #[test]
    fn test_product_table_has_price_check_and_lengths() {
        let backend = sea_orm::DatabaseBackend::Sqlite;
        let sql = backend
            .build(&product_table(&Schema::new(backend)))
            .to_string();
        assert!(sql.contains("CHECK"), "{sql}");
        assert!(sql.contains("UNIQUE"), "{sql}");
        assert!(sql.contains("\"name\" varchar(100)"), "{sql}");
        assert!(sql.contains("\"sku\" varchar(20)"), "{sql}");
        assert!(sql.contains("\"slug\" varchar(50)"), "{sql}");
    }

    #[test]
    fn test_image_and_category_column_lengths() {
        let backend = sea_orm::DatabaseBackend::Sqlite;
        let schema = Schema::new(backend);

        let image_sql = backend
            .build(&schema.create_table_from_entity(ProductImage))
            .to_string();
        assert!(image_sql.contains("\"image\" varchar(100)"), "{image_sql}");

        let category_sql = backend
            .build(&schema.create_table_from_entity(Category))
            .to_string();
        assert!(category_sql.contains("\"name\" varchar(150)"), "{category_sql}");
    }
}
