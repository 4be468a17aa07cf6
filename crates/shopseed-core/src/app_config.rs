use std::path::PathBuf;

use crate::inventory::InventoryPolicy;

/// Store domain used when `SHOPIFY_ADMIN_DOMAIN` is not set.
pub const DEFAULT_SHOP_DOMAIN: &str = "sefadevtest.myshopify.com";

/// Admin REST API version used when `SHOPIFY_API_VERSION` is not set.
pub const DEFAULT_API_VERSION: &str = "2024-10";

#[derive(Clone)]
pub struct AppConfig {
    pub shop_domain: String,
    pub access_token: String,
    pub api_version: String,
    /// Fulfillment location for every inventory write. `None` means "use the
    /// first location the account lists", resolved once per run.
    pub location_id: Option<i64>,
    pub catalog_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Fixed pause after every mutating call to stay under the API rate limit.
    pub mutation_delay_ms: u64,
    pub inventory: InventoryPolicy,
}

impl AppConfig {
    /// Base URL of the Admin REST API, always ending in `/`.
    #[must_use]
    pub fn admin_base_url(&self) -> String {
        format!(
            "https://{}/admin/api/{}/",
            self.shop_domain.trim_end_matches('/'),
            self.api_version
        )
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("shop_domain", &self.shop_domain)
            .field("access_token", &"[redacted]")
            .field("api_version", &self.api_version)
            .field("location_id", &self.location_id)
            .field("catalog_path", &self.catalog_path)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("mutation_delay_ms", &self.mutation_delay_ms)
            .field("inventory", &self.inventory)
            .finish()
    }
}
