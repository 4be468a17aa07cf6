pub mod app_config;
pub mod catalog;
pub mod config;
pub mod error;
pub mod grouping;
pub mod inventory;

pub use app_config::AppConfig;
pub use catalog::{
    load_catalog, parse_catalog, validate_catalog, CatalogFile, CollectionSpec, ProductSpec,
    VariantSpec,
};
pub use config::{load_app_config, load_app_config_from_env, load_catalog_path, DEFAULT_CATALOG_PATH};
pub use error::ConfigError;
pub use grouping::{CreatedProduct, ProductGroups};
pub use inventory::InventoryPolicy;
