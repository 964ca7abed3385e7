use async_trait::async_trait;
use catalog::{Product, StockEntry, StockKey};
use common::{OrderId, OwnerId};
use ordering::{Customer, NewCustomer};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::records::{OrderHeader, OrderItemRecord, OrderRecord};

/// Location of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub path: String,
    pub public_url: String,
}

/// Data-access collaborator for catalog, customer, order and file records.
///
/// Every call is a single request that either succeeds or fails; there is no
/// transaction spanning calls. Order writes are idempotent so that a failed
/// submission can be retried without duplicating records.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Backend: Send + Sync {
    /// Lists the owner's products, decoding their color and size lists.
    async fn list_products(&self, owner: &OwnerId) -> Result<Vec<Product>>;

    /// Stores a product, encoding its color and size lists.
    async fn create_product(&self, owner: &OwnerId, product: &Product) -> Result<()>;

    /// Lists the owner's stock entries.
    async fn list_stock(&self, owner: &OwnerId) -> Result<Vec<StockEntry>>;

    /// Stores a new stock entry.
    async fn create_stock(&self, owner: &OwnerId, entry: &StockEntry) -> Result<()>;

    /// Replaces the quantity of an existing stock entry.
    ///
    /// Fails with `NotFound` when no entry has the key.
    async fn update_stock(&self, owner: &OwnerId, key: &StockKey, quantity: u32) -> Result<()>;

    /// Validates and stores customer details, assigning id and timestamp.
    async fn create_customer(&self, owner: &OwnerId, details: NewCustomer) -> Result<Customer>;

    /// Lists all customers, newest first.
    async fn list_customers(&self) -> Result<Vec<Customer>>;

    /// Lists all order headers, newest first.
    async fn list_orders(&self) -> Result<Vec<OrderRecord>>;

    /// Stores an order header and returns its id.
    ///
    /// A header whose idempotency key was already stored returns the
    /// existing id without writing anything.
    async fn create_order(&self, header: &OrderHeader) -> Result<OrderId>;

    /// Stores one order line. Rewriting the same (order, line number) is a
    /// no-op.
    async fn create_order_item(&self, item: &OrderItemRecord) -> Result<()>;

    /// Lists the lines of one order in line order.
    async fn list_order_items(&self, order_id: OrderId) -> Result<Vec<OrderItemRecord>>;

    /// Uploads a file to `path`, replacing any file already there.
    async fn upload_file(&self, path: &str, contents: &[u8]) -> Result<UploadedFile>;
}
