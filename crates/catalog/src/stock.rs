//! Stock levels per product color and size.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::product::Product;

/// Quantities below this are reported as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Availability category derived from a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Derives the status for a quantity on hand.
    pub fn from_quantity(quantity: u32) -> Self {
        match quantity {
            0 => StockStatus::OutOfStock,
            q if q < LOW_STOCK_THRESHOLD => StockStatus::LowStock,
            _ => StockStatus::InStock,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }

    /// Returns the label shown in the admin stock table.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "In Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Composite key of a stock entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockKey {
    pub product_id: ProductId,
    pub color: String,
    pub size: String,
}

impl StockKey {
    pub fn new(
        product_id: impl Into<ProductId>,
        color: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            color: color.into(),
            size: size.into(),
        }
    }
}

/// Quantity on hand for one product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    #[serde(flatten)]
    pub key: StockKey,
    pub quantity: u32,
}

impl StockEntry {
    pub fn new(
        product_id: impl Into<ProductId>,
        color: impl Into<String>,
        size: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            key: StockKey::new(product_id, color, size),
            quantity,
        }
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::from_quantity(self.quantity)
    }
}

/// Result of a stock lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockLevel {
    pub quantity: u32,
    pub status: StockStatus,
}

impl StockLevel {
    pub fn of(quantity: u32) -> Self {
        Self {
            quantity,
            status: StockStatus::from_quantity(quantity),
        }
    }
}

/// Stock quantities indexed by (product, color, size).
///
/// A missing entry reads as zero stock.
#[derive(Debug, Clone, Default)]
pub struct StockIndex {
    entries: HashMap<StockKey, u32>,
}

impl StockIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index, rejecting duplicate keys.
    pub fn from_entries(entries: impl IntoIterator<Item = StockEntry>) -> Result<Self> {
        let mut index = Self::new();
        for entry in entries {
            match index.entries.entry(entry.key) {
                Entry::Occupied(occupied) => {
                    let key = occupied.key();
                    return Err(CatalogError::DuplicateStockEntry {
                        product_id: key.product_id.clone(),
                        color: key.color.clone(),
                        size: key.size.clone(),
                    });
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(entry.quantity);
                }
            }
        }
        Ok(index)
    }

    /// Looks up the quantity and status of one variant.
    pub fn status_of(&self, product_id: &ProductId, color: &str, size: &str) -> StockLevel {
        StockLevel::of(self.quantity_of(product_id, color, size))
    }

    pub fn quantity_of(&self, product_id: &ProductId, color: &str, size: &str) -> u32 {
        let key = StockKey::new(product_id.clone(), color, size);
        self.entries.get(&key).copied().unwrap_or(0)
    }

    /// Checks that `requested` units of a variant are available.
    pub fn check_available(
        &self,
        product_id: &ProductId,
        color: &str,
        size: &str,
        requested: u32,
    ) -> Result<()> {
        let available = self.quantity_of(product_id, color, size);
        if requested > available {
            return Err(CatalogError::InsufficientStock {
                product_id: product_id.clone(),
                color: color.to_string(),
                size: size.to_string(),
                requested,
                available,
            });
        }
        Ok(())
    }

    /// Stock levels of one color across the product's sizes, in size order.
    pub fn size_matrix<'a>(
        &'a self,
        product: &'a Product,
        color: &'a str,
    ) -> impl Iterator<Item = (&'a str, StockLevel)> + 'a {
        product
            .sizes()
            .iter()
            .map(move |size| (size.as_str(), self.status_of(product.id(), color, size)))
    }

    /// Replaces the quantity of an existing entry, returning the old quantity.
    pub fn set_quantity(&mut self, key: &StockKey, quantity: u32) -> Result<u32> {
        match self.entries.get_mut(key) {
            Some(current) => Ok(std::mem::replace(current, quantity)),
            None => Err(CatalogError::UnknownStockEntry {
                product_id: key.product_id.clone(),
                color: key.color.clone(),
                size: key.size.clone(),
            }),
        }
    }

    pub fn contains(&self, key: &StockKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates all entries in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = StockEntry> + '_ {
        self.entries.iter().map(|(key, quantity)| StockEntry {
            key: key.clone(),
            quantity: *quantity,
        })
    }
}
