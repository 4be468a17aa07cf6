pub mod client;
pub mod error;
pub mod pagination;
pub mod payload;
pub mod types;

pub use client::AdminClient;
pub use error::AdminError;
pub use payload::{collection_payload, product_payload};
pub use types::{AdminProduct, AdminVariant, Collect, CollectionSummary, InventoryLevel, Location};
