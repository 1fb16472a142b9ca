/// Database configuration and connection management
pub mod database;

/// Catalog configuration loading from config.toml
pub mod catalog;
