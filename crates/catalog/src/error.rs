//! Catalog error types.

use common::ProductId;
use thiserror::Error;

/// Errors that can occur while building or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product definition is missing a required value.
    #[error("Invalid product {style_code}: {reason}")]
    InvalidProduct { style_code: String, reason: String },

    /// Two stock entries share the same product, color and size.
    #[error("Duplicate stock entry for {product_id} ({color}, {size})")]
    DuplicateStockEntry {
        product_id: ProductId,
        color: String,
        size: String,
    },

    /// The requested quantity exceeds what is on hand.
    #[error(
        "Insufficient stock for {product_id} ({color}, {size}): requested {requested}, available {available}"
    )]
    InsufficientStock {
        product_id: ProductId,
        color: String,
        size: String,
        requested: u32,
        available: u32,
    },

    /// No stock entry exists for the key being updated.
    #[error("No stock entry for {product_id} ({color}, {size})")]
    UnknownStockEntry {
        product_id: ProductId,
        color: String,
        size: String,
    },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
