//! Assembled order.

use chrono::NaiveDate;
use common::{CustomerId, Money};
use serde::Serialize;
use uuid::Uuid;

use crate::cart::CartLine;

use super::{OrderNumber, OrderStatus};

/// An order ready for submission.
///
/// Orders are immutable once assembled. The total is fixed at assembly and
/// always equals the sum of the line totals. Retrying the submission of the
/// same order reuses its number and idempotency key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub(super) order_number: OrderNumber,
    pub(super) idempotency_key: Uuid,
    pub(super) customer_id: CustomerId,
    pub(super) order_date: NaiveDate,
    pub(super) delivery_date: NaiveDate,
    pub(super) lines: Vec<CartLine>,
    pub(super) total_amount: Money,
    pub(super) status: OrderStatus,
    pub(super) special_instructions: Option<String>,
    pub(super) signature: Option<String>,
}

impl Order {
    pub fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    /// Client-generated key that lets the backend recognise a retried
    /// submission of this order.
    pub fn idempotency_key(&self) -> Uuid {
        self.idempotency_key
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn order_date(&self) -> NaiveDate {
        self.order_date
    }

    pub fn delivery_date(&self) -> NaiveDate {
        self.delivery_date
    }

    /// Delivery month label, e.g. `"March 2025"`.
    pub fn delivery_month(&self) -> String {
        self.delivery_date.format("%B %Y").to_string()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity())).sum()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn special_instructions(&self) -> Option<&str> {
        self.special_instructions.as_deref()
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }
}
