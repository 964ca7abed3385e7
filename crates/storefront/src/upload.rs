//! Stock file upload.

use backend::{Backend, BackendError, UploadedFile};
use catalog::StockKey;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storefront::Storefront;

/// New quantity for one stock entry, as parsed from an uploaded sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    #[serde(flatten)]
    pub key: StockKey,
    pub quantity: u32,
}

impl StockUpdate {
    pub fn new(key: StockKey, quantity: u32) -> Self {
        Self { key, quantity }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUploadReport {
    pub file: UploadedFile,
    pub applied: usize,
    /// Updates whose stock entry does not exist.
    pub skipped: Vec<StockKey>,
}

impl<B: Backend> Storefront<B> {
    /// Stores the uploaded file, then applies the parsed updates.
    ///
    /// Updates for unknown entries are skipped and reported. Any other
    /// backend failure stops the upload; updates already applied stay.
    #[tracing::instrument(
        skip(self, contents, updates),
        fields(bytes = contents.len(), updates = updates.len())
    )]
    pub async fn upload_stock(
        &self,
        file_name: &str,
        contents: &[u8],
        updates: &[StockUpdate],
    ) -> Result<StockUploadReport> {
        let owner = &self.config().owner_id;
        let path = self.config().upload_path(file_name.trim_start_matches('/'));
        let file = self.backend().upload_file(&path, contents).await?;

        let mut applied = 0;
        let mut skipped = Vec::new();
        for update in updates {
            match self
                .backend()
                .update_stock(owner, &update.key, update.quantity)
                .await
            {
                Ok(()) => applied += 1,
                Err(BackendError::NotFound(_)) => skipped.push(update.key.clone()),
                Err(e) => return Err(e.into()),
            }
        }

        metrics::counter!("stock_updates_applied_total").increment(applied as u64);
        if !skipped.is_empty() {
            tracing::warn!(skipped = skipped.len(), "stock updates for unknown entries skipped");
        }
        tracing::info!(public_url = %file.public_url, applied, "stock upload processed");

        Ok(StockUploadReport {
            file,
            applied,
            skipped,
        })
    }
}
