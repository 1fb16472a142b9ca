//! Catalog configuration loading from config.toml
//!
//! The configuration file can override URL route patterns and list products and
//! categories to seed into an empty (or partially filled) catalog.

use crate::errors::{Error, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::{collections::HashMap, path::Path};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct CatalogConfig {
    /// Route name to URL pattern overrides, e.g. `"store:product-detail" = "/p/<pk>/"`
    #[serde(default)]
    pub routes: HashMap<String, String>,
    /// Products to seed
    #[serde(default)]
    pub products: Vec<ProductConfig>,
    /// Categories to seed
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

/// Configuration for a single seeded product
#[derive(Debug, Deserialize, Clone)]
pub struct ProductConfig {
    /// Display name
    pub name: String,
    /// Stock Keeping Unit; seeding skips products whose SKU already exists
    pub sku: String,
    /// Unit price, written as a string to keep it exact (e.g. `"12.50"`)
    pub price: Decimal,
    /// Units on hand
    #[serde(default)]
    pub stock_count: i32,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Explicit slug; derived from `name` when omitted
    #[serde(default)]
    pub slug: String,
    /// Image file references to attach
    #[serde(default)]
    pub images: Vec<String>,
}

/// Configuration for a single seeded category
#[derive(Debug, Deserialize, Clone)]
pub struct CategoryConfig {
    /// Category name; seeding reuses an existing category with this name
    pub name: String,
    /// SKUs of the products that belong to this category
    #[serde(default)]
    pub products: Vec<String>,
}

/// Loads catalog configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Location of the catalog configuration, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Loads catalog configuration from the default location (./config.toml)
///
/// A missing file yields an empty configuration; a file that exists but cannot
/// be read or parsed is still an error.
pub fn load_default_config() -> Result<CatalogConfig> {
    load_config_or_default(DEFAULT_CONFIG_PATH)
}

fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    if path.as_ref().exists() {
        load_config(path)
    } else {
        tracing::warn!(
            "No {} found, starting with an empty catalog config",
            path.as_ref().display()
        );
        Ok(CatalogConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_catalog_config() {
        let toml_str = r#"
            [routes]
            "store:product-detail" = "/shop/<pk>/"

            [[products]]
            name = "Trail Running Shoe"
            sku = "TRS-1"
            price = "89.99"
            stock_count = 12
            images = ["products/trs-1.jpg"]

            [[products]]
            name = "Chalk Bag"
            sku = "CB-1"
            price = "14.50"

            [[categories]]
            name = "Footwear"
            products = ["TRS-1"]
        "#;

        let config: CatalogConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.routes["store:product-detail"], "/shop/<pk>/");
        assert_eq!(config.products.len(), 2);
        assert_eq!(config.products[0].price, Decimal::new(8999, 2));
        assert_eq!(config.products[0].stock_count, 12);
        assert_eq!(config.products[0].images, vec!["products/trs-1.jpg"]);
        assert_eq!(config.products[1].stock_count, 0);
        assert!(config.products[1].slug.is_empty());
        assert_eq!(config.categories[0].products, vec!["TRS-1"]);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: CatalogConfig = toml::from_str("").unwrap();
        assert!(config.routes.is_empty());
        assert!(config.products.is_empty());
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_absent_default_location_yields_empty_config() {
        let config = load_config_or_default("does/not/exist.toml").unwrap();
        assert!(config.products.is_empty());
        assert!(config.categories.is_empty());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
    }
}
