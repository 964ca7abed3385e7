//! Ordering error types.

use chrono::NaiveDate;
use common::ProductId;
use thiserror::Error;

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    pub fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Input rejected before anything is submitted.
///
/// These are reported straight back to the caller and never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more form fields are missing or malformed.
    #[error("Invalid fields: {}", join(.0))]
    InvalidFields(Vec<FieldError>),

    /// No customer has been registered for this order.
    #[error("Customer information is required")]
    MissingCustomer,

    /// No delivery date was chosen.
    #[error("Delivery date is required")]
    MissingDeliveryDate,

    /// The delivery date is not after the order date.
    #[error("Delivery date {delivery_date} must be after order date {order_date}")]
    DeliveryDateTooEarly {
        delivery_date: NaiveDate,
        order_date: NaiveDate,
    },

    /// The order has no lines.
    #[error("Order has no items")]
    EmptyCart,

    /// The order form was submitted unsigned.
    #[error("A signature is required to place the order")]
    MissingSignature,

    /// A line was built with a zero quantity.
    #[error("Invalid quantity for {product_id}: must be at least 1")]
    ZeroQuantity { product_id: ProductId },
}

impl ValidationError {
    /// Returns the rejected fields, if this is a field error.
    pub fn fields(&self) -> &[FieldError] {
        match self {
            ValidationError::InvalidFields(fields) => fields,
            _ => &[],
        }
    }
}

fn join(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors from positional cart edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The index does not address an existing line.
    #[error("Cart index {index} out of range (cart has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },
}
