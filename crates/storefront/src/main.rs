//! Storefront entry point.
//!
//! Seeds the configured account when it is empty, loads its catalog and
//! prints the admin dashboard as JSON.

use backend::InMemoryBackend;
use storefront::{Config, SeedOutcome, Storefront};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Create backend and service
    let storefront = Storefront::new(InMemoryBackend::new(), config);

    // 3. Seed the sample catalog into an empty account
    if storefront.config().seed_sample_data {
        match storefront.seed_sample_catalog().await? {
            SeedOutcome::Seeded {
                products,
                stock_entries,
            } => tracing::info!(products, stock_entries, "seeded sample catalog"),
            SeedOutcome::AlreadySeeded { products } => {
                tracing::info!(products, "catalog already present")
            }
        }
    }

    // 4. Load the catalog into a fresh session
    let mut session = storefront.start_session();
    storefront.load_catalog(&mut session).await?;
    tracing::info!(
        owner_id = %session.owner_id(),
        products = session.products().len(),
        stock_entries = session.stock().len(),
        "catalog ready"
    );

    // 5. Report the dashboard
    let dashboard = storefront.dashboard().await?;
    println!("{}", serde_json::to_string_pretty(&dashboard)?);
    Ok(())
}
