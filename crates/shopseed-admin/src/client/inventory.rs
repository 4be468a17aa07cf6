//! Location and inventory-level endpoints.

use crate::error::AdminError;
use crate::types::{
    InventoryLevel, InventoryLevelResponse, InventoryLevelSet, Location, LocationsResponse,
};

use super::AdminClient;

impl AdminClient {
    /// Lists the store's locations in the order the API returns them.
    ///
    /// # Errors
    ///
    /// [`AdminError::Status`], [`AdminError::Http`] or [`AdminError::Deserialize`].
    pub async fn list_locations(&self) -> Result<Vec<Location>, AdminError> {
        let (response, _): (LocationsResponse, _) = self.get_json("locations.json", &[]).await?;
        Ok(response.locations)
    }

    /// Sets the absolute available quantity of one inventory item at one
    /// location. Repeating the call with the same value is a no-op.
    ///
    /// # Errors
    ///
    /// [`AdminError::Status`] if the item is not tracked or not stocked at
    /// the location.
    pub async fn set_inventory_level(
        &self,
        location_id: i64,
        inventory_item_id: i64,
        available: i64,
    ) -> Result<InventoryLevel, AdminError> {
        let response: InventoryLevelResponse = self
            .post_json(
                "inventory_levels/set.json",
                &InventoryLevelSet {
                    location_id,
                    inventory_item_id,
                    available,
                },
            )
            .await?;
        Ok(response.inventory_level)
    }
}
