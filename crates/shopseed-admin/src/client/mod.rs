//! Authenticated HTTP client for the Admin REST API.

mod collections;
mod inventory;
mod products;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{body_snippet, AdminError};

/// Page size for every listing call; the API maximum.
pub const PAGE_LIMIT: u32 = 250;

/// Maximum number of pages to follow before returning an error.
/// Prevents infinite loops on cycling cursors.
pub(crate) const MAX_PAGES: usize = 200;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Client for one store's Admin REST API.
///
/// Every call is issued and awaited on its own; nothing is retried. Non-2xx
/// responses become [`AdminError::Status`] carrying the status code and a
/// truncated body. Mutating calls (POST, DELETE) are followed by a fixed
/// pause so a sequential run stays under the API's call-rate limit.
pub struct AdminClient {
    client: Client,
    /// Always ends in `/` so relative endpoint paths join beneath it.
    base_url: Url,
    mutation_delay: Duration,
}

impl AdminClient {
    /// Creates a client for the store and API version in `config`.
    ///
    /// # Errors
    ///
    /// See [`AdminClient::with_base_url`].
    pub fn from_config(config: &shopseed_core::AppConfig) -> Result<Self, AdminError> {
        Self::with_base_url(
            &config.admin_base_url(),
            &config.access_token,
            config.request_timeout_secs,
            &config.user_agent,
            config.mutation_delay_ms,
        )
    }

    /// Creates a client rooted at `base_url` (e.g. a wiremock server in tests).
    ///
    /// # Errors
    ///
    /// - [`AdminError::InvalidBaseUrl`] if `base_url` does not parse.
    /// - [`AdminError::InvalidAccessToken`] if the token cannot be sent as a header.
    /// - [`AdminError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn with_base_url(
        base_url: &str,
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
        mutation_delay_ms: u64,
    ) -> Result<Self, AdminError> {
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| AdminError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let mut token =
            HeaderValue::from_str(access_token).map_err(|_| AdminError::InvalidAccessToken)?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_TOKEN_HEADER, token);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url,
            mutation_delay: Duration::from_millis(mutation_delay_ms),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AdminError> {
        self.base_url
            .join(path)
            .map_err(|e| AdminError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: format!("cannot join \"{path}\": {e}"),
            })
    }

    /// GETs `path` and parses the body. Also returns the raw `Link` header.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<(T, Option<String>), AdminError> {
        let mut url = self.endpoint(path)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        tracing::debug!(%url, "GET");

        let response = self.client.get(url).send().await?;
        let response = check_status(&Method::GET, path, response).await?;
        let link_header = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let parsed = parse_body(path, response).await?;
        Ok((parsed, link_header))
    }

    /// POSTs a JSON body to `path` and parses the response, then pauses.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AdminError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let result: Result<T, AdminError> = async {
            let url = self.endpoint(path)?;
            tracing::debug!(%url, "POST");
            let response = self.client.post(url).json(body).send().await?;
            let response = check_status(&Method::POST, path, response).await?;
            parse_body(path, response).await
        }
        .await;
        self.pause().await;
        result
    }

    /// DELETEs `path`, ignoring the response body, then pauses.
    async fn delete(&self, path: &str) -> Result<(), AdminError> {
        let result: Result<(), AdminError> = async {
            let url = self.endpoint(path)?;
            tracing::debug!(%url, "DELETE");
            let response = self.client.delete(url).send().await?;
            check_status(&Method::DELETE, path, response).await?;
            Ok(())
        }
        .await;
        self.pause().await;
        result
    }

    async fn pause(&self) {
        if !self.mutation_delay.is_zero() {
            tokio::time::sleep(self.mutation_delay).await;
        }
    }
}

/// Converts a non-2xx response into [`AdminError::Status`] with a body snippet.
async fn check_status(
    method: &Method,
    path: &str,
    response: Response,
) -> Result<Response, AdminError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(AdminError::Status {
        status: status.as_u16(),
        method: method.to_string(),
        path: path.to_owned(),
        body: body_snippet(&body),
    })
}

async fn parse_body<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, AdminError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| AdminError::Deserialize {
        context: path.to_owned(),
        source: e,
    })
}
