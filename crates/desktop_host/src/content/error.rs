//! Error taxonomy for CMS content fetching.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failure while fetching or decoding CMS content.
///
/// Every variant is scoped to the panel that issued the query; callers render the
/// [`std::fmt::Display`] text inline and never retry automatically.
pub enum ContentError {
    /// The request never produced a response (network, CORS, unsupported target).
    #[error("request failed: {0}")]
    Transport(String),
    /// The endpoint answered with a non-success status.
    #[error("HTTP error: {status}{}", http_detail(.detail))]
    Http {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, when one could be extracted.
        detail: Option<String>,
    },
    /// The body was not a valid GraphQL envelope for the expected shape.
    #[error("failed to parse response: {0}")]
    Decode(String),
    /// The server reported errors and returned no data.
    #[error("{}", .0.join("; "))]
    Graphql(Vec<String>),
    /// The envelope had neither data nor errors.
    #[error("no data returned for {0}")]
    MissingData(&'static str),
}

fn http_detail(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(" ({detail})"))
        .unwrap_or_default()
}
