//! Storefront error types.

use backend::BackendError;
use catalog::CatalogError;
use common::ProductId;
use ordering::{CartError, OrderNumber, ValidationError};
use thiserror::Error;

/// Errors surfaced by session operations and the storefront service.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// User input was rejected.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A cart position was out of range.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// A catalog rule was violated, e.g. not enough stock.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// The backend failed. Local state is left as it was.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// The step requires a registered customer.
    #[error("Customer information must be entered first")]
    CustomerRequired,

    /// The product is not in the loaded catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The product does not come in this color or size.
    #[error("Product {product_id} is not offered in {color}, size {size}")]
    UnknownVariant {
        product_id: ProductId,
        color: String,
        size: String,
    },

    /// Submission was requested before an order was prepared.
    #[error("No order has been prepared for submission")]
    NoPendingOrder,

    /// A submission of this order failed part way. Until it is submitted
    /// again successfully the cart and the prepared order are frozen.
    #[error(
        "Order {order_number} was partly submitted; submit it again before changing the order"
    )]
    SubmissionPending { order_number: OrderNumber },
}

/// Convenience type alias for storefront results.
pub type Result<T> = std::result::Result<T, StorefrontError>;
