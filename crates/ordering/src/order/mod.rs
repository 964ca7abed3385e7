//! Orders and their assembly from a cart.

mod aggregate;
mod assembler;
mod number;
mod status;

pub use aggregate::Order;
pub use assembler::OrderAssembler;
pub use number::OrderNumber;
pub use status::OrderStatus;
