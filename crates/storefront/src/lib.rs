//! Ordering flow on top of the catalog, ordering and backend crates.
//!
//! A [`Session`] owns the state of one ordering session (customer, catalog
//! snapshot, cart, prepared order). The [`Storefront`] service performs the
//! steps that need the backend and hands the session back updated.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod seed;
pub mod session;
pub mod storefront;
pub mod upload;

pub use config::Config;
pub use dashboard::{Dashboard, DashboardStats, OrderRow, StockRow};
pub use error::{Result, StorefrontError};
pub use seed::SeedOutcome;
pub use session::{Session, Step};
pub use storefront::{Storefront, SubmissionReceipt};
pub use upload::{StockUpdate, StockUploadReport};
