//! Collection and collect (membership) endpoints.

use crate::error::AdminError;
use crate::types::{
    Collect, CollectRequest, CollectResponse, CollectionSummary, CustomCollectionRequest,
    CustomCollectionResponse, CustomCollectionsResponse, NewCollect, NewCustomCollection,
    SmartCollectionsResponse,
};

use super::{AdminClient, PAGE_LIMIT};

impl AdminClient {
    /// Lists the first page of custom collections.
    ///
    /// Teardown deletes what it sees and lists again, so only one page is
    /// ever needed per round.
    ///
    /// # Errors
    ///
    /// [`AdminError::Status`], [`AdminError::Http`] or [`AdminError::Deserialize`].
    pub async fn list_custom_collections(&self) -> Result<Vec<CollectionSummary>, AdminError> {
        let limit = PAGE_LIMIT.to_string();
        let (response, _): (CustomCollectionsResponse, _) = self
            .get_json(
                "custom_collections.json",
                &[("limit", limit.as_str()), ("fields", "id,title")],
            )
            .await?;
        Ok(response.custom_collections)
    }

    /// Lists the first page of smart (rule-based) collections.
    ///
    /// # Errors
    ///
    /// [`AdminError::Status`], [`AdminError::Http`] or [`AdminError::Deserialize`].
    pub async fn list_smart_collections(&self) -> Result<Vec<CollectionSummary>, AdminError> {
        let limit = PAGE_LIMIT.to_string();
        let (response, _): (SmartCollectionsResponse, _) = self
            .get_json(
                "smart_collections.json",
                &[("limit", limit.as_str()), ("fields", "id,title")],
            )
            .await?;
        Ok(response.smart_collections)
    }

    /// # Errors
    ///
    /// [`AdminError::Status`] on a non-2xx response.
    pub async fn delete_custom_collection(&self, id: i64) -> Result<(), AdminError> {
        self.delete(&format!("custom_collections/{id}.json")).await
    }

    /// # Errors
    ///
    /// [`AdminError::Status`] on a non-2xx response.
    pub async fn delete_smart_collection(&self, id: i64) -> Result<(), AdminError> {
        self.delete(&format!("smart_collections/{id}.json")).await
    }

    /// Creates a manually-curated collection.
    ///
    /// # Errors
    ///
    /// [`AdminError::Status`] if the API rejects the payload.
    pub async fn create_custom_collection(
        &self,
        collection: &NewCustomCollection,
    ) -> Result<CollectionSummary, AdminError> {
        let response: CustomCollectionResponse = self
            .post_json(
                "custom_collections.json",
                &CustomCollectionRequest {
                    custom_collection: collection,
                },
            )
            .await?;
        Ok(response.custom_collection)
    }

    /// Links a product into a custom collection.
    ///
    /// # Errors
    ///
    /// [`AdminError::Status`] if the link is rejected, e.g. 422 when it
    /// already exists.
    pub async fn create_collect(
        &self,
        product_id: i64,
        collection_id: i64,
    ) -> Result<Collect, AdminError> {
        let response: CollectResponse = self
            .post_json(
                "collects.json",
                &CollectRequest {
                    collect: NewCollect {
                        product_id,
                        collection_id,
                    },
                },
            )
            .await?;
        Ok(response.collect)
    }
}
