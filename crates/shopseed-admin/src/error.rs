use thiserror::Error;

/// Maximum number of response-body characters kept on a status error.
pub const BODY_SNIPPET_CHARS: usize = 300;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Any non-2xx response. 4xx (including 429) and 5xx share this shape.
    #[error("HTTP {status} from {method} {path}: {body}")]
    Status {
        status: u16,
        method: String,
        path: String,
        /// Response body truncated to [`BODY_SNIPPET_CHARS`] characters.
        body: String,
    },

    #[error("pagination limit reached for {path}: exceeded {max_pages} pages")]
    PaginationLimit { path: String, max_pages: usize },

    #[error("invalid admin base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("access token contains characters not allowed in an HTTP header")]
    InvalidAccessToken,

    #[error("the store has no locations to hold inventory")]
    NoLocations,

    #[error("variant {variant_id} has no inventory item; is inventory tracking enabled?")]
    MissingInventoryItem { variant_id: i64 },
}

impl AdminError {
    /// HTTP status code, when the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            AdminError::Status { status, .. } => Some(*status),
            AdminError::Http(e) => e.status().as_ref().map(reqwest::StatusCode::as_u16),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }
}

/// Truncate `body` to [`BODY_SNIPPET_CHARS`] characters on a char boundary.
pub(crate) fn body_snippet(body: &str) -> String {
    match body.char_indices().nth(BODY_SNIPPET_CHARS) {
        Some((cut, _)) => body[..cut].to_owned(),
        None => body.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> AdminError {
        AdminError::Status {
            status,
            method: "POST".to_owned(),
            path: "products.json".to_owned(),
            body: String::new(),
        }
    }

    #[test]
    fn classifies_client_and_server_errors() {
        assert!(status_error(422).is_client_error());
        assert!(status_error(429).is_client_error());
        assert!(!status_error(429).is_server_error());
        assert!(status_error(502).is_server_error());
        assert!(!AdminError::NoLocations.is_client_error());
        assert_eq!(AdminError::NoLocations.status(), None);
    }

    #[test]
    fn body_snippet_keeps_short_bodies() {
        assert_eq!(body_snippet("{\"errors\":\"Not Found\"}"), "{\"errors\":\"Not Found\"}");
    }

    #[test]
    fn body_snippet_truncates_long_bodies() {
        let body = "x".repeat(1_000);
        assert_eq!(body_snippet(&body).len(), BODY_SNIPPET_CHARS);
    }

    #[test]
    fn body_snippet_respects_char_boundaries() {
        let body = "é".repeat(400);
        let snippet = body_snippet(&body);
        assert_eq!(snippet.chars().count(), BODY_SNIPPET_CHARS);
    }

    #[test]
    fn status_display_includes_code_and_body() {
        let err = AdminError::Status {
            status: 429,
            method: "POST".to_owned(),
            path: "collects.json".to_owned(),
            body: "Exceeded 2 calls per second".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP 429 from POST collects.json: Exceeded 2 calls per second"
        );
    }
}
