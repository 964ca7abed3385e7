//! Backend-facing operations of the ordering flow.

use std::time::Instant;

use backend::{Backend, OrderHeader, OrderItemRecord};
use catalog::StockIndex;
use common::{Money, OrderId, OwnerId};
use ordering::{Customer, NewCustomer, Order, OrderNumber};
use serde::Serialize;

use crate::config::Config;
use crate::error::{Result, StorefrontError};
use crate::session::Session;

/// What the backend stored for a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub order_id: OrderId,
    pub order_number: OrderNumber,
    pub total_amount: Money,
    pub line_count: usize,
}

/// Runs session steps that read from or write to the backend.
///
/// Failed backend calls leave the session as it was, so every step can be
/// retried by calling it again.
pub struct Storefront<B: Backend> {
    backend: B,
    config: Config,
}

impl<B: Backend> Storefront<B> {
    pub fn new(backend: B, config: Config) -> Self {
        Self { backend, config }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Starts a session for the configured owner.
    pub fn start_session(&self) -> Session {
        Session::new(self.config.owner_id.clone())
    }

    /// Loads products and stock into the session.
    #[tracing::instrument(skip(self, session), fields(owner_id = %session.owner_id()))]
    pub async fn load_catalog(&self, session: &mut Session) -> Result<()> {
        let owner = session.owner_id();
        let (products, entries) = tokio::try_join!(
            self.backend.list_products(owner),
            self.backend.list_stock(owner),
        )?;
        let stock = StockIndex::from_entries(entries)?;

        tracing::debug!(
            products = products.len(),
            stock_entries = stock.len(),
            "catalog loaded"
        );
        session.replace_catalog(products, stock);
        Ok(())
    }

    /// Validates and stores the customer, then moves the session to the
    /// catalog.
    #[tracing::instrument(skip(self, session, details))]
    pub async fn register_customer(
        &self,
        session: &mut Session,
        details: NewCustomer,
    ) -> Result<Customer> {
        details.validate()?;
        let customer = self
            .backend
            .create_customer(session.owner_id(), details)
            .await?;

        tracing::info!(
            customer_id = %customer.id(),
            company = customer.company_name(),
            "customer registered"
        );
        session.set_customer(customer.clone());
        Ok(customer)
    }

    /// Writes the prepared order header and then each line.
    ///
    /// On success the cart is cleared and the session returns to the
    /// catalog. On failure the cart and prepared order are kept; calling
    /// this again resumes the same order without duplicating records.
    #[tracing::instrument(skip(self, session))]
    pub async fn submit_order(&self, session: &mut Session) -> Result<SubmissionReceipt> {
        let start = Instant::now();
        let order = session.pending_order().ok_or(StorefrontError::NoPendingOrder)?;

        let written = self
            .write_order(session.owner_id(), order)
            .await
            .map(|order_id| SubmissionReceipt {
                order_id,
                order_number: order.order_number().clone(),
                total_amount: order.total_amount(),
                line_count: order.lines().len(),
            });

        match written {
            Ok(receipt) => {
                let duration = start.elapsed().as_secs_f64();
                metrics::histogram!("order_submission_duration_seconds").record(duration);
                metrics::counter!("orders_submitted_total").increment(1);
                tracing::info!(
                    order_id = %receipt.order_id,
                    order_number = %receipt.order_number,
                    total = %receipt.total_amount,
                    lines = receipt.line_count,
                    "order submitted"
                );
                session.complete_submission();
                Ok(receipt)
            }
            Err(e) => {
                session.record_failed_attempt();
                metrics::counter!("order_submission_failures_total").increment(1);
                tracing::warn!(
                    error = %e,
                    failed_attempts = session.failed_attempts(),
                    "order submission failed, cart kept for retry"
                );
                Err(e.into())
            }
        }
    }

    async fn write_order(&self, owner: &OwnerId, order: &Order) -> backend::Result<OrderId> {
        let header = OrderHeader::from_order(owner.clone(), order);
        let order_id = self.backend.create_order(&header).await?;

        for (line_number, line) in (0u32..).zip(order.lines()) {
            let item = OrderItemRecord::from_line(order_id, line_number, owner.clone(), line);
            self.backend.create_order_item(&item).await?;
        }
        Ok(order_id)
    }
}
