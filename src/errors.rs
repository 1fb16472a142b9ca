//! Unified error type for the store catalog.
//!
//! Storage errors are classified on conversion so that constraint failures
//! (duplicate SKU, negative price) can be matched on directly by callers.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Errors produced by catalog operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A UNIQUE constraint rejected the write (e.g. duplicate SKU)
    #[error("Uniqueness violation: {message}")]
    UniqueViolation {
        /// Message reported by the storage layer
        message: String,
    },

    /// A CHECK constraint rejected the write (e.g. `price_not_negative`)
    #[error("Constraint violation: {message}")]
    CheckViolation {
        /// Message reported by the storage layer
        message: String,
    },

    /// No product with the given id
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// Requested product id
        id: i64,
    },

    /// No category with the given id
    #[error("Category not found: {id}")]
    CategoryNotFound {
        /// Requested category id
        id: i64,
    },

    /// No product image with the given id
    #[error("Product image not found: {id}")]
    ImageNotFound {
        /// Requested image id
        id: i64,
    },

    /// A named route could not be reversed
    #[error("Reverse for '{route}' not found: {reason}")]
    NoReverseMatch {
        /// Route name
        route: String,
        /// Why reversal failed
        reason: String,
    },

    /// Any other database error
    #[error("Database error: {0}")]
    Database(DbErr),
}

impl From<DbErr> for Error {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(message)) = err.sql_err() {
            return Self::UniqueViolation { message };
        }

        // SQLite has no dedicated SqlErr variant for CHECK failures
        let text = err.to_string();
        if text.contains("CHECK constraint failed") {
            return Self::CheckViolation { message: text };
        }
        if text.contains("UNIQUE constraint failed") {
            return Self::UniqueViolation { message: text };
        }

        Self::Database(err)
    }
}

/// Whether the storage layer rejected a write because a referenced row is missing.
pub(crate) fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
        || err.to_string().contains("FOREIGN KEY constraint failed")
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_db_error_is_not_classified() {
        let err: Error = DbErr::Custom("connection reset".to_string()).into();
        assert!(matches!(err, Error::Database(_)));
    }

    #[test]
    fn test_check_failure_text_is_classified() {
        let err: Error =
            DbErr::Custom("CHECK constraint failed: \"price\" >= 0".to_string()).into();
        assert!(matches!(err, Error::CheckViolation { message: _ }));
    }

    #[test]
    fn test_unique_failure_text_is_classified() {
        let err: Error =
            DbErr::Custom("UNIQUE constraint failed: products.sku".to_string()).into();
        assert!(matches!(err, Error::UniqueViolation { message: _ }));
    }

    #[test]
    fn test_foreign_key_failure_text_is_detected() {
        let err = DbErr::Custom("FOREIGN KEY constraint failed".to_string());
        assert!(is_foreign_key_violation(&err));
        assert!(!is_foreign_key_violation(&DbErr::Custom("busy".to_string())));
    }

    #[test]
    fn test_display_messages() {
        let err = Error::ProductNotFound { id: 7 };
        assert_eq!(err.to_string(), "Product not found: 7");

        let err = Error::NoReverseMatch {
            route: "store:missing".to_string(),
            reason: "no such route".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Reverse for 'store:missing' not found: no such route"
        );
    }
}
