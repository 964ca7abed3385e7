//! Stored record shapes.
//!
//! Product color and size lists are stored as JSON-encoded strings; they are
//! encoded on write and decoded on read.

use catalog::{Category, Product, ProductDraft, StockEntry, StockKey};
use chrono::{DateTime, NaiveDate, Utc};
use common::{CustomerId, Money, OrderId, OwnerId, ProductId};
use ordering::{CartLine, Order, OrderNumber, OrderStatus};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{BackendError, Result};

/// Product row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductId,
    pub owner_id: OwnerId,
    pub name: String,
    pub style_code: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    pub list_price: Money,
    pub rsp_price: Money,
    /// JSON array of color names.
    pub colors: String,
    /// JSON array of size labels.
    pub sizes: String,
    pub created_at: DateTime<Utc>,
}

impl ProductRecord {
    /// Encodes a product for storage.
    pub fn encode(owner_id: OwnerId, product: &Product, created_at: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            id: product.id().clone(),
            owner_id,
            name: product.name().to_string(),
            style_code: product.style_code().to_string(),
            category: product.category(),
            material: product.material().map(str::to_string),
            list_price: product.list_price(),
            rsp_price: product.rsp_price(),
            colors: serde_json::to_string(product.colors())?,
            sizes: serde_json::to_string(product.sizes())?,
            created_at,
        })
    }

    /// Decodes the stored lists and rebuilds the product.
    pub fn decode(&self) -> Result<Product> {
        let colors: Vec<String> = serde_json::from_str(&self.colors)?;
        let sizes: Vec<String> = serde_json::from_str(&self.sizes)?;
        Product::new(
            self.id.clone(),
            ProductDraft {
                name: self.name.clone(),
                style_code: self.style_code.clone(),
                category: self.category,
                material: self.material.clone(),
                list_price: self.list_price,
                rsp_price: self.rsp_price,
                colors,
                sizes,
            },
        )
        .map_err(|e| BackendError::InvalidRecord {
            id: self.id.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Stock row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    pub id: String,
    pub owner_id: OwnerId,
    pub product_id: ProductId,
    pub color: String,
    pub size: String,
    pub quantity: u32,
    pub updated_at: DateTime<Utc>,
}

impl StockRecord {
    pub fn key(&self) -> StockKey {
        StockKey::new(self.product_id.clone(), self.color.clone(), self.size.clone())
    }

    pub fn matches(&self, key: &StockKey) -> bool {
        self.product_id == key.product_id && self.color == key.color && self.size == key.size
    }

    pub fn to_entry(&self) -> StockEntry {
        StockEntry {
            key: self.key(),
            quantity: self.quantity,
        }
    }
}

/// Order header as written by the client.
///
/// The backend assigns the [`OrderId`]; the order number is only a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHeader {
    pub order_number: OrderNumber,
    pub idempotency_key: Uuid,
    pub customer_id: CustomerId,
    pub owner_id: OwnerId,
    pub order_date: NaiveDate,
    pub delivery_date: NaiveDate,
    pub delivery_month: String,
    pub total_amount: Money,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl OrderHeader {
    pub fn from_order(owner_id: OwnerId, order: &Order) -> Self {
        Self {
            order_number: order.order_number().clone(),
            idempotency_key: order.idempotency_key(),
            customer_id: order.customer_id(),
            owner_id,
            order_date: order.order_date(),
            delivery_date: order.delivery_date(),
            delivery_month: order.delivery_month(),
            total_amount: order.total_amount(),
            status: order.status(),
            special_instructions: order.special_instructions().map(str::to_string),
            signature: order.signature().map(str::to_string),
        }
    }
}

/// Stored order header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub id: OrderId,
    #[serde(flatten)]
    pub header: OrderHeader,
    pub created_at: DateTime<Utc>,
}

/// Order line row. `line_number` is the line's position in the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRecord {
    pub order_id: OrderId,
    pub line_number: u32,
    pub owner_id: OwnerId,
    pub product_id: ProductId,
    pub color: String,
    pub size: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

impl OrderItemRecord {
    pub fn from_line(
        order_id: OrderId,
        line_number: u32,
        owner_id: OwnerId,
        line: &CartLine,
    ) -> Self {
        Self {
            order_id,
            line_number,
            owner_id,
            product_id: line.product_id().clone(),
            color: line.color().to_string(),
            size: line.size().to_string(),
            quantity: line.quantity(),
            unit_price: line.unit_price(),
            line_total: line.line_total(),
        }
    }
}
