//! Data-access boundary for the wholesale ordering core.
//!
//! The [`Backend`] trait is the only way the core reaches persistence and
//! file storage. Records cross the boundary in their stored shapes (see
//! [`records`]); [`InMemoryBackend`] implements the trait for tests and the
//! demo binary.

pub mod error;
pub mod memory;
pub mod records;
pub mod store;

pub use error::{BackendError, Result};
pub use memory::InMemoryBackend;
pub use records::{OrderHeader, OrderItemRecord, OrderRecord, ProductRecord, StockRecord};
pub use store::{Backend, UploadedFile};
