//! GraphQL-over-HTTP transport backed by `fetch`.

use desktop_host::{ContentError, ContentFuture, GraphqlQuery, GraphqlTransport};

use crate::bridge;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Posts queries to a fixed GraphQL endpoint.
pub struct HttpGraphqlTransport {
    endpoint: String,
}

impl HttpGraphqlTransport {
    /// Creates a transport for `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Target endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GraphqlTransport for HttpGraphqlTransport {
    fn execute<'a>(
        &'a self,
        query: &'a GraphqlQuery,
    ) -> ContentFuture<'a, Result<String, ContentError>> {
        Box::pin(async move { bridge::post_graphql(&self.endpoint, query).await })
    }
}

#[cfg(test)]
mod tests {
    use desktop_host::GET_DOCK;
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_builds_report_transport_error() {
        let transport = HttpGraphqlTransport::new("http://localhost:1337/graphql");
        let err = block_on(transport.execute(&GET_DOCK)).unwrap_err();
        assert!(matches!(err, ContentError::Transport(msg) if msg.contains("GetDock")));
    }
}
