//! Ordering layer for the wholesale ordering core.
//!
//! This crate provides:
//! - `Cart` with merge-on-add line items and running totals
//! - Customer registration records and their validation
//! - `Order` assembly with human-readable order numbers

pub mod cart;
pub mod customer;
pub mod error;
pub mod order;

pub use cart::{Cart, CartLine, LineKey};
pub use common::{CustomerId, Money, OrderId, OwnerId, ProductId};
pub use customer::{Customer, NewCustomer};
pub use error::{CartError, FieldError, ValidationError};
pub use order::{Order, OrderAssembler, OrderNumber, OrderStatus};
