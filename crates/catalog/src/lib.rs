//! Catalog layer for the wholesale ordering core.
//!
//! This crate provides:
//! - `Product` definitions with their color and size ranges
//! - `StockIndex` for color/size stock lookups and status derivation
//! - Catalog filtering by search term and category
//! - The sample catalog used to seed an empty account

pub mod error;
pub mod filter;
pub mod product;
pub mod sample;
pub mod stock;

pub use common::{Money, ProductId};
pub use error::{CatalogError, Result};
pub use filter::{CategoryCounts, CategoryFilter, category_counts, filter};
pub use product::{Category, Product, ProductDraft};
pub use sample::{SAMPLE_STOCK_RANGE, sample_products};
pub use stock::{LOW_STOCK_THRESHOLD, StockEntry, StockIndex, StockKey, StockLevel, StockStatus};
