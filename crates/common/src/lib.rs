//! Shared types for the wholesale ordering core.

pub mod ids;
pub mod money;

pub use ids::{CustomerId, OrderId, OwnerId, ProductId};
pub use money::Money;
