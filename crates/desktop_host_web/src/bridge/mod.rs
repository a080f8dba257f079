//! Target routing for browser calls; non-wasm builds get inert fallbacks so the workspace still
//! builds and tests natively.

use desktop_host::{ContentError, GraphqlQuery};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn post_graphql(endpoint: &str, query: &GraphqlQuery) -> Result<String, ContentError> {
    imp::post_graphql(endpoint, query).await
}

pub fn page_hostname() -> Option<String> {
    imp::page_hostname()
}

pub fn open_external_url(url: &str) -> Result<(), String> {
    imp::open_external_url(url)
}

/// Builds the inline error for a non-success response body.
pub(crate) fn describe_http_error(status: u16, body: &str) -> ContentError {
    let body = body.trim();
    if body.is_empty() {
        return ContentError::Http {
            status,
            detail: None,
        };
    }

    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.pointer("/errors/0/message")
                .or_else(|| json.get("error"))
                .or_else(|| json.get("message"))
                .and_then(|value| value.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string());

    ContentError::Http {
        status,
        detail: Some(detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_prefers_graphql_message() {
        let err = describe_http_error(
            400,
            r#"{"errors":[{"message":"Cannot query field \"dock\""}]}"#,
        );
        assert_eq!(err.to_string(), "HTTP error: 400 (Cannot query field \"dock\")");
    }

    #[test]
    fn http_error_falls_back_to_raw_body_or_status() {
        assert_eq!(
            describe_http_error(502, "Bad Gateway").to_string(),
            "HTTP error: 502 (Bad Gateway)"
        );
        assert_eq!(describe_http_error(500, "  ").to_string(), "HTTP error: 500");
    }
}
