use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use catalog::{Product, StockEntry, StockKey};
use chrono::Utc;
use common::{CustomerId, OrderId, OwnerId};
use ordering::{Customer, NewCustomer};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::records::{OrderHeader, OrderItemRecord, OrderRecord, ProductRecord, StockRecord};
use crate::store::{Backend, UploadedFile};
use crate::{BackendError, Result};

const PUBLIC_URL_BASE: &str = "memory://storage";

#[derive(Debug, Default)]
struct Failures {
    unavailable: bool,
    /// Number of order item writes still allowed before they start failing.
    order_items_allowed: Option<usize>,
}

#[derive(Debug, Default)]
struct State {
    products: Vec<ProductRecord>,
    stock: Vec<StockRecord>,
    customers: Vec<Customer>,
    orders: Vec<OrderRecord>,
    order_items: Vec<OrderItemRecord>,
    files: HashMap<String, Vec<u8>>,
    failures: Failures,
}

impl State {
    fn check_available(&self) -> Result<()> {
        if self.failures.unavailable {
            return Err(BackendError::Unavailable(
                "in-memory backend set to unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

/// In-memory backend for tests and local runs.
///
/// Records are kept in their stored shapes, so product lists go through the
/// same encode/decode path a hosted backend would use. Failures can be
/// injected to exercise partial submissions.
#[derive(Clone, Default)]
pub struct InMemoryBackend {
    state: Arc<RwLock<State>>,
}

impl InMemoryBackend {
    /// Creates a new empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail with `Unavailable` until reset.
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.state.write().await.failures.unavailable = unavailable;
    }

    /// Lets `allowed` more order item writes succeed, then fails the rest
    /// until [`InMemoryBackend::clear_failures`] is called.
    pub async fn fail_order_items_after(&self, allowed: usize) {
        self.state.write().await.failures.order_items_allowed = Some(allowed);
    }

    /// Removes all injected failures.
    pub async fn clear_failures(&self) {
        self.state.write().await.failures = Failures::default();
    }

    pub async fn order_count(&self) -> usize {
        self.state.read().await.orders.len()
    }

    pub async fn order_item_count(&self) -> usize {
        self.state.read().await.order_items.len()
    }

    /// Returns the stored bytes of an uploaded file.
    pub async fn file(&self, path: &str) -> Option<Vec<u8>> {
        self.state.read().await.files.get(path).cloned()
    }

    /// Returns the raw stored product rows of an owner.
    pub async fn product_records(&self, owner: &OwnerId) -> Vec<ProductRecord> {
        self.state
            .read()
            .await
            .products
            .iter()
            .filter(|p| &p.owner_id == owner)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Backend for InMemoryBackend {
    async fn list_products(&self, owner: &OwnerId) -> Result<Vec<Product>> {
        let state = self.state.read().await;
        state.check_available()?;
        state
            .products
            .iter()
            .filter(|p| &p.owner_id == owner)
            .map(ProductRecord::decode)
            .collect()
    }

    async fn create_product(&self, owner: &OwnerId, product: &Product) -> Result<()> {
        let mut state = self.state.write().await;
        state.check_available()?;
        let record = ProductRecord::encode(owner.clone(), product, Utc::now())?;
        state.products.push(record);
        Ok(())
    }

    async fn list_stock(&self, owner: &OwnerId) -> Result<Vec<StockEntry>> {
        let state = self.state.read().await;
        state.check_available()?;
        Ok(state
            .stock
            .iter()
            .filter(|s| &s.owner_id == owner)
            .map(StockRecord::to_entry)
            .collect())
    }

    async fn create_stock(&self, owner: &OwnerId, entry: &StockEntry) -> Result<()> {
        let mut state = self.state.write().await;
        state.check_available()?;
        state.stock.push(StockRecord {
            id: format!("stock_{}", Uuid::new_v4().simple()),
            owner_id: owner.clone(),
            product_id: entry.key.product_id.clone(),
            color: entry.key.color.clone(),
            size: entry.key.size.clone(),
            quantity: entry.quantity,
            updated_at: Utc::now(),
        });
        Ok(())
    }

    async fn update_stock(&self, owner: &OwnerId, key: &StockKey, quantity: u32) -> Result<()> {
        let mut state = self.state.write().await;
        state.check_available()?;
        let record = state
            .stock
            .iter_mut()
            .find(|s| &s.owner_id == owner && s.matches(key))
            .ok_or_else(|| {
                BackendError::NotFound(format!(
                    "stock {} ({}, {})",
                    key.product_id, key.color, key.size
                ))
            })?;
        record.quantity = quantity;
        record.updated_at = Utc::now();
        Ok(())
    }

    async fn create_customer(&self, owner: &OwnerId, details: NewCustomer) -> Result<Customer> {
        let mut state = self.state.write().await;
        state.check_available()?;
        let customer = Customer::register(CustomerId::new(), owner.clone(), details, Utc::now())?;
        state.customers.push(customer.clone());
        Ok(customer)
    }

    async fn list_customers(&self) -> Result<Vec<Customer>> {
        let state = self.state.read().await;
        state.check_available()?;
        Ok(state.customers.iter().rev().cloned().collect())
    }

    async fn list_orders(&self) -> Result<Vec<OrderRecord>> {
        let state = self.state.read().await;
        state.check_available()?;
        Ok(state.orders.iter().rev().cloned().collect())
    }

    async fn create_order(&self, header: &OrderHeader) -> Result<OrderId> {
        let mut state = self.state.write().await;
        state.check_available()?;

        if let Some(existing) = state
            .orders
            .iter()
            .find(|o| o.header.idempotency_key == header.idempotency_key)
        {
            tracing::debug!(order_id = %existing.id, "order header already stored");
            return Ok(existing.id);
        }

        let id = OrderId::new();
        state.orders.push(OrderRecord {
            id,
            header: header.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn create_order_item(&self, item: &OrderItemRecord) -> Result<()> {
        let mut state = self.state.write().await;
        state.check_available()?;

        if !state.orders.iter().any(|o| o.id == item.order_id) {
            return Err(BackendError::UnknownOrder(item.order_id));
        }
        if state
            .order_items
            .iter()
            .any(|i| i.order_id == item.order_id && i.line_number == item.line_number)
        {
            return Ok(());
        }

        if let Some(allowed) = state.failures.order_items_allowed.as_mut() {
            if *allowed == 0 {
                return Err(BackendError::Unavailable(format!(
                    "order item write rejected (order {}, line {})",
                    item.order_id, item.line_number
                )));
            }
            *allowed -= 1;
        }

        state.order_items.push(item.clone());
        Ok(())
    }

    async fn list_order_items(&self, order_id: OrderId) -> Result<Vec<OrderItemRecord>> {
        let state = self.state.read().await;
        state.check_available()?;
        let mut items: Vec<_> = state
            .order_items
            .iter()
            .filter(|i| i.order_id == order_id)
            .cloned()
            .collect();
        items.sort_by_key(|i| i.line_number);
        Ok(items)
    }

    async fn upload_file(&self, path: &str, contents: &[u8]) -> Result<UploadedFile> {
        let mut state = self.state.write().await;
        state.check_available()?;
        state.files.insert(path.to_string(), contents.to_vec());
        Ok(UploadedFile {
            path: path.to_string(),
            public_url: format!("{PUBLIC_URL_BASE}/{path}"),
        })
    }
}
