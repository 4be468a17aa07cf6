use crate::app_config::{AppConfig, DEFAULT_API_VERSION, DEFAULT_SHOP_DOMAIN};
use crate::inventory::{InventoryPolicy, DEFAULT_OUT_OF_STOCK_TITLE};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `SHOPIFY_ADMIN_TOKEN` is missing or a value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if `SHOPIFY_ADMIN_TOKEN` is missing or a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Catalog file used when `SHOPSEED_CATALOG_PATH` is not set.
pub const DEFAULT_CATALOG_PATH: &str = "./config/catalog.yaml";

/// Resolve the catalog file path alone, without requiring API credentials.
///
/// Calls `dotenvy::dotenv().ok()` first, like [`load_app_config`].
#[must_use]
pub fn load_catalog_path() -> std::path::PathBuf {
    dotenvy::dotenv().ok();
    catalog_path_from(|key| std::env::var(key))
}

fn catalog_path_from<F>(lookup: F) -> std::path::PathBuf
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    match lookup("SHOPSEED_CATALOG_PATH") {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().into(),
        _ => DEFAULT_CATALOG_PATH.into(),
    }
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::str::FromStr;

    fn parse_as<T>(var: &str, raw: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    }

    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let access_token = require("SHOPIFY_ADMIN_TOKEN")?;
    let shop_domain = or_default("SHOPIFY_ADMIN_DOMAIN", DEFAULT_SHOP_DOMAIN);
    let api_version = or_default("SHOPIFY_API_VERSION", DEFAULT_API_VERSION);

    let location_id = match lookup("SHOPIFY_LOCATION_ID") {
        Ok(raw) if !raw.trim().is_empty() => Some(parse_as::<i64>("SHOPIFY_LOCATION_ID", &raw)?),
        _ => None,
    };

    let catalog_path = catalog_path_from(&lookup);
    let log_level = or_default("SHOPSEED_LOG_LEVEL", "info");
    let request_timeout_secs = parse_as::<u64>(
        "SHOPSEED_REQUEST_TIMEOUT_SECS",
        &or_default("SHOPSEED_REQUEST_TIMEOUT_SECS", "30"),
    )?;
    let user_agent = or_default("SHOPSEED_USER_AGENT", "shopseed/0.1 (catalog-admin)");
    let mutation_delay_ms = parse_as::<u64>(
        "SHOPSEED_MUTATION_DELAY_MS",
        &or_default("SHOPSEED_MUTATION_DELAY_MS", "300"),
    )?;

    let default_quantity = parse_as::<i64>(
        "SHOPSEED_DEFAULT_QUANTITY",
        &or_default("SHOPSEED_DEFAULT_QUANTITY", "50"),
    )?;
    if default_quantity < 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SHOPSEED_DEFAULT_QUANTITY".to_string(),
            reason: format!("quantity must be non-negative, got {default_quantity}"),
        });
    }
    let out_of_stock_titles = parse_title_list(&or_default(
        "SHOPSEED_OUT_OF_STOCK_TITLES",
        DEFAULT_OUT_OF_STOCK_TITLE,
    ));

    Ok(AppConfig {
        shop_domain,
        access_token,
        api_version,
        location_id,
        catalog_path,
        log_level,
        request_timeout_secs,
        user_agent,
        mutation_delay_ms,
        inventory: InventoryPolicy::new(default_quantity, out_of_stock_titles),
    })
}

/// Split a comma-separated title list, dropping blanks.
fn parse_title_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
