//! Sample catalog seeding for empty accounts.

use backend::Backend;
use catalog::{Product, SAMPLE_STOCK_RANGE, StockEntry, sample_products};
use rand::Rng;
use uuid::Uuid;

use crate::error::Result;
use crate::storefront::Storefront;

/// Result of [`Storefront::seed_sample_catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The owner already had products; nothing was written.
    AlreadySeeded { products: usize },
    Seeded { products: usize, stock_entries: usize },
}

/// Builds the sample products with a random quantity for every variant.
fn sample_catalog<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<(Product, Vec<StockEntry>)>> {
    sample_products()
        .into_iter()
        .map(|draft| -> Result<(Product, Vec<StockEntry>)> {
            let product = Product::new(format!("prod_{}", Uuid::new_v4().simple()), draft)?;
            let stock = product
                .variants()
                .map(|(color, size)| {
                    StockEntry::new(
                        product.id().clone(),
                        color,
                        size,
                        rng.gen_range(SAMPLE_STOCK_RANGE),
                    )
                })
                .collect();
            Ok((product, stock))
        })
        .collect()
}

impl<B: Backend> Storefront<B> {
    /// Creates the sample catalog when the configured owner has no products.
    ///
    /// Writes are not transactional. If a write fails part way, the products
    /// already created stay and the next run sees a non-empty catalog.
    #[tracing::instrument(skip(self), fields(owner_id = %self.config().owner_id))]
    pub async fn seed_sample_catalog(&self) -> Result<SeedOutcome> {
        let owner = &self.config().owner_id;
        let existing = self.backend().list_products(owner).await?;
        if !existing.is_empty() {
            tracing::debug!(products = existing.len(), "catalog present, skipping seed");
            return Ok(SeedOutcome::AlreadySeeded {
                products: existing.len(),
            });
        }

        let catalog = sample_catalog(&mut rand::thread_rng())?;
        let mut stock_entries = 0;
        for (product, stock) in &catalog {
            self.backend().create_product(owner, product).await?;
            for entry in stock {
                self.backend().create_stock(owner, entry).await?;
            }
            stock_entries += stock.len();
        }

        tracing::info!(
            products = catalog.len(),
            stock_entries,
            "sample catalog seeded"
        );
        Ok(SeedOutcome::Seeded {
            products: catalog.len(),
            stock_entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn every_variant_gets_stock_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = sample_catalog(&mut rng).unwrap();

        assert_eq!(catalog.len(), 6);
        for (product, stock) in &catalog {
            assert!(product.id().as_str().starts_with("prod_"));
            assert_eq!(stock.len(), product.colors().len() * product.sizes().len());
            assert!(stock.iter().all(|e| SAMPLE_STOCK_RANGE.contains(&e.quantity)));
        }
    }
}
