//! Transport contract for posting GraphQL documents, plus in-process adapters.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use super::{ContentError, GraphqlQuery};

/// Object-safe boxed future used by [`GraphqlTransport`].
pub type ContentFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Sends one GraphQL query and yields the raw response body.
pub trait GraphqlTransport {
    /// Executes `query` against the content endpoint.
    fn execute<'a>(&'a self, query: &'a GraphqlQuery)
        -> ContentFuture<'a, Result<String, ContentError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Transport for targets without network access; every query fails.
pub struct NoopGraphqlTransport;

impl GraphqlTransport for NoopGraphqlTransport {
    fn execute<'a>(
        &'a self,
        _query: &'a GraphqlQuery,
    ) -> ContentFuture<'a, Result<String, ContentError>> {
        Box::pin(async {
            Err(ContentError::Transport(
                "content transport unavailable on this target".to_string(),
            ))
        })
    }
}

#[derive(Debug, Clone, Default)]
/// Fixture transport answering from canned bodies keyed by operation name.
pub struct MemoryGraphqlTransport {
    responses: Rc<RefCell<HashMap<&'static str, Result<String, ContentError>>>>,
    requests: Rc<RefCell<Vec<&'static str>>>,
}

impl MemoryGraphqlTransport {
    /// Registers a successful body for `operation_name`.
    pub fn with_response(self, operation_name: &'static str, body: impl Into<String>) -> Self {
        self.responses
            .borrow_mut()
            .insert(operation_name, Ok(body.into()));
        self
    }

    /// Registers a failure for `operation_name`.
    pub fn with_failure(self, operation_name: &'static str, error: ContentError) -> Self {
        self.responses.borrow_mut().insert(operation_name, Err(error));
        self
    }

    /// Number of times `operation_name` reached the transport.
    pub fn request_count(&self, operation_name: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|name| **name == operation_name)
            .count()
    }
}

impl GraphqlTransport for MemoryGraphqlTransport {
    fn execute<'a>(
        &'a self,
        query: &'a GraphqlQuery,
    ) -> ContentFuture<'a, Result<String, ContentError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(query.operation_name);
            self.responses
                .borrow()
                .get(query.operation_name)
                .cloned()
                .unwrap_or(Err(ContentError::MissingData(query.operation_name)))
        })
    }
}
