//! Storefront configuration loaded from environment variables.

use common::OwnerId;

/// Storefront configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `OWNER_ID`: account owning catalog and order records (default: `"default-owner"`)
/// - `SEED_SAMPLE_DATA`: seed the sample catalog into an empty account (default: `true`)
/// - `STOCK_UPLOAD_PREFIX`: storage folder for stock uploads (default: `"stock-uploads"`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub owner_id: OwnerId,
    pub seed_sample_data: bool,
    pub stock_upload_prefix: String,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            owner_id: std::env::var("OWNER_ID")
                .map(OwnerId::from)
                .unwrap_or(defaults.owner_id),
            seed_sample_data: std::env::var("SEED_SAMPLE_DATA")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_sample_data),
            stock_upload_prefix: std::env::var("STOCK_UPLOAD_PREFIX")
                .map(|p| p.trim_end_matches('/').to_string())
                .unwrap_or(defaults.stock_upload_prefix),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }

    /// Returns the storage path for an uploaded stock file.
    pub fn upload_path(&self, file_name: &str) -> String {
        format!("{}/{}", self.stock_upload_prefix, file_name)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner_id: OwnerId::new("default-owner"),
            seed_sample_data: true,
            stock_upload_prefix: "stock-uploads".to_string(),
            log_level: "info".to_string(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
