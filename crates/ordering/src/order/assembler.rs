//! Order assembly from a finalized cart.

use chrono::{Local, NaiveDate};
use common::Money;
use rand::Rng;
use uuid::Uuid;

use crate::cart::CartLine;
use crate::customer::Customer;
use crate::error::ValidationError;

use super::{Order, OrderNumber, OrderStatus};

/// Builds [`Order`]s from a customer, cart lines and a delivery date.
///
/// Optional notes (special instructions, signature) are set on the
/// assembler before calling [`OrderAssembler::assemble`].
#[derive(Debug, Clone, Default)]
pub struct OrderAssembler {
    special_instructions: Option<String>,
    signature: Option<String>,
}

impl OrderAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_special_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.special_instructions = non_blank(instructions.into());
        self
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = non_blank(signature.into());
        self
    }

    /// Assembles an order dated today with a random order number.
    pub fn assemble(
        &self,
        customer: Option<&Customer>,
        lines: &[CartLine],
        delivery_date: Option<NaiveDate>,
    ) -> Result<Order, ValidationError> {
        self.assemble_at(
            Local::now().date_naive(),
            &mut rand::thread_rng(),
            customer,
            lines,
            delivery_date,
        )
    }

    /// Assembles an order for an explicit order date and number source.
    #[tracing::instrument(skip(self, rng, customer, lines), fields(lines = lines.len()))]
    pub fn assemble_at<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut R,
        customer: Option<&Customer>,
        lines: &[CartLine],
        delivery_date: Option<NaiveDate>,
    ) -> Result<Order, ValidationError> {
        let customer = customer.ok_or(ValidationError::MissingCustomer)?;
        let delivery_date = delivery_date.ok_or(ValidationError::MissingDeliveryDate)?;

        if delivery_date <= today {
            return Err(ValidationError::DeliveryDateTooEarly {
                delivery_date,
                order_date: today,
            });
        }
        if lines.is_empty() {
            return Err(ValidationError::EmptyCart);
        }

        let total_amount: Money = lines.iter().map(CartLine::line_total).sum();
        let order = Order {
            order_number: OrderNumber::generate(today, rng),
            idempotency_key: Uuid::new_v4(),
            customer_id: customer.id(),
            order_date: today,
            delivery_date,
            lines: lines.to_vec(),
            total_amount,
            status: OrderStatus::Pending,
            special_instructions: self.special_instructions.clone(),
            signature: self.signature.clone(),
        };

        tracing::debug!(
            order_number = %order.order_number,
            total = %order.total_amount,
            "order assembled"
        );
        Ok(order)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
