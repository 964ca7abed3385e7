//! Admin dashboard views.

use std::cmp::Ordering;
use std::collections::HashMap;

use backend::{Backend, OrderRecord};
use catalog::{Product, StockEntry, StockStatus};
use chrono::NaiveDate;
use common::{CustomerId, Money, OrderId, ProductId};
use ordering::{Customer, OrderNumber, OrderStatus};
use serde::Serialize;

use crate::error::Result;
use crate::storefront::Storefront;

const UNKNOWN_PRODUCT: &str = "Unknown product";
const UNKNOWN_CUSTOMER: &str = "Unknown customer";

/// Headline numbers of the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    pub total_customers: usize,
    pub total_orders: usize,
    pub total_revenue: Money,
}

/// One row of the stock table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRow {
    pub product_id: ProductId,
    pub product_name: String,
    pub style_code: Option<String>,
    pub color: String,
    pub size: String,
    pub quantity: u32,
    pub status: StockStatus,
}

/// One row of the orders table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub order_id: OrderId,
    pub order_number: OrderNumber,
    pub customer_id: CustomerId,
    pub company_name: String,
    pub order_date: NaiveDate,
    pub delivery_month: String,
    pub total_amount: Money,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub stock: Vec<StockRow>,
    pub orders: Vec<OrderRow>,
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
}

impl Dashboard {
    /// Joins the raw listings into dashboard tables.
    ///
    /// Stock rows are ordered by product name, then by the product's own
    /// color and size order; rows of unknown products come last. Orders and
    /// customers keep the backend's newest-first order.
    pub fn build(
        products: Vec<Product>,
        stock: Vec<StockEntry>,
        customers: Vec<Customer>,
        orders: Vec<OrderRecord>,
    ) -> Self {
        let stats = DashboardStats {
            total_products: products.len(),
            total_customers: customers.len(),
            total_orders: orders.len(),
            total_revenue: orders.iter().map(|o| o.header.total_amount).sum(),
        };

        let by_id: HashMap<&ProductId, &Product> = products.iter().map(|p| (p.id(), p)).collect();
        let mut stock_rows: Vec<(Option<&Product>, StockRow)> = stock
            .into_iter()
            .map(|entry| {
                let product = by_id.get(&entry.key.product_id).copied();
                let status = entry.status();
                let row = StockRow {
                    product_name: product
                        .map_or(UNKNOWN_PRODUCT, Product::name)
                        .to_string(),
                    style_code: product.map(|p| p.style_code().to_string()),
                    product_id: entry.key.product_id,
                    color: entry.key.color,
                    size: entry.key.size,
                    quantity: entry.quantity,
                    status,
                };
                (product, row)
            })
            .collect();
        stock_rows.sort_by(|(pa, a), (pb, b)| compare_stock_rows(*pa, a, *pb, b));

        let names: HashMap<CustomerId, &str> = customers
            .iter()
            .map(|c| (c.id(), c.company_name()))
            .collect();
        let order_rows = orders
            .into_iter()
            .map(|record| OrderRow {
                company_name: names
                    .get(&record.header.customer_id)
                    .copied()
                    .unwrap_or(UNKNOWN_CUSTOMER)
                    .to_string(),
                order_id: record.id,
                customer_id: record.header.customer_id,
                order_number: record.header.order_number,
                order_date: record.header.order_date,
                delivery_month: record.header.delivery_month,
                total_amount: record.header.total_amount,
                status: record.header.status,
            })
            .collect();

        let stock = stock_rows.into_iter().map(|(_, row)| row).collect();
        Self {
            stats,
            stock,
            orders: order_rows,
            customers,
            products,
        }
    }
}

fn compare_stock_rows(
    pa: Option<&Product>,
    a: &StockRow,
    pb: Option<&Product>,
    b: &StockRow,
) -> Ordering {
    match (pa, pb) {
        (Some(x), Some(y)) => x
            .name()
            .cmp(y.name())
            .then_with(|| x.id().cmp(y.id()))
            .then_with(|| position(x.colors(), &a.color).cmp(&position(y.colors(), &b.color)))
            .then_with(|| position(x.sizes(), &a.size).cmp(&position(y.sizes(), &b.size))),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .product_id
            .cmp(&b.product_id)
            .then_with(|| a.color.cmp(&b.color))
            .then_with(|| a.size.cmp(&b.size)),
    }
}

/// Position in the product's list; values the product does not list sort last.
fn position(values: &[String], value: &str) -> usize {
    values.iter().position(|v| v == value).unwrap_or(usize::MAX)
}

impl<B: Backend> Storefront<B> {
    /// Loads everything the admin dashboard shows.
    #[tracing::instrument(skip(self))]
    pub async fn dashboard(&self) -> Result<Dashboard> {
        let owner = &self.config().owner_id;
        let backend = self.backend();
        let (products, stock, customers, orders) = tokio::try_join!(
            backend.list_products(owner),
            backend.list_stock(owner),
            backend.list_customers(),
            backend.list_orders(),
        )?;

        let dashboard = Dashboard::build(products, stock, customers, orders);
        tracing::debug!(
            products = dashboard.stats.total_products,
            orders = dashboard.stats.total_orders,
            revenue = %dashboard.stats.total_revenue,
            "dashboard loaded"
        );
        Ok(dashboard)
    }
}
