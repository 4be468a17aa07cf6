//! Product endpoints: listing, creation and deletion.

use crate::error::AdminError;
use crate::pagination::next_page_info;
use crate::types::{AdminProduct, NewProduct, ProductRequest, ProductResponse, ProductsResponse};

use super::{AdminClient, MAX_PAGES, PAGE_LIMIT};

const PRODUCTS_PATH: &str = "products.json";

impl AdminClient {
    /// Fetches one page of products (up to [`PAGE_LIMIT`]).
    ///
    /// `fields` restricts the returned keys (e.g. `"id,title,variants"`).
    /// Returns the products and the cursor of the following page, if any.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Status`] on a non-2xx response.
    /// - [`AdminError::Http`] on network or TLS failure.
    /// - [`AdminError::Deserialize`] if the body is not a products envelope.
    pub async fn list_products_page(
        &self,
        fields: Option<&str>,
        page_info: Option<&str>,
    ) -> Result<(Vec<AdminProduct>, Option<String>), AdminError> {
        let limit = PAGE_LIMIT.to_string();
        let mut query = vec![("limit", limit.as_str())];
        if let Some(fields) = fields {
            query.push(("fields", fields));
        }
        if let Some(cursor) = page_info {
            query.push(("page_info", cursor));
        }

        let (response, link_header): (ProductsResponse, _) =
            self.get_json(PRODUCTS_PATH, &query).await?;
        Ok((response.products, next_page_info(link_header.as_deref())))
    }

    /// Fetches every product by following `Link` cursors to the last page.
    ///
    /// All-or-nothing: a failure on any page discards earlier pages.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::list_products_page`].
    /// Returns [`AdminError::PaginationLimit`] past [`MAX_PAGES`] pages.
    pub async fn fetch_all_products(
        &self,
        fields: Option<&str>,
    ) -> Result<Vec<AdminProduct>, AdminError> {
        let mut all_products = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(AdminError::PaginationLimit {
                    path: PRODUCTS_PATH.to_owned(),
                    max_pages: MAX_PAGES,
                });
            }

            let (products, next) = self.list_products_page(fields, cursor.as_deref()).await?;
            all_products.extend(products);

            cursor = next;
            if cursor.is_none() {
                break;
            }
        }

        Ok(all_products)
    }

    /// Creates a product with its options, variants and images in one call.
    /// The returned product lists the created variants in payload order.
    ///
    /// # Errors
    ///
    /// - [`AdminError::Status`] if the API rejects the payload (typically 422).
    /// - [`AdminError::Http`] / [`AdminError::Deserialize`] as for any call.
    pub async fn create_product(&self, product: &NewProduct) -> Result<AdminProduct, AdminError> {
        let response: ProductResponse = self
            .post_json(PRODUCTS_PATH, &ProductRequest { product })
            .await?;
        Ok(response.product)
    }

    /// Deletes a product by id.
    ///
    /// # Errors
    ///
    /// [`AdminError::Status`] on a non-2xx response (404 if already gone).
    pub async fn delete_product(&self, id: i64) -> Result<(), AdminError> {
        self.delete(&format!("products/{id}.json")).await
    }
}
