//! Typed, caching client over a [`GraphqlTransport`].

use std::rc::Rc;

use serde::de::DeserializeOwned;

use super::query::{
    decode_response, BrowserPageData, DockData, FolderCategoriesData, HeaderData,
    GET_BROWSER_PAGE, GET_DOCK, GET_FOLDER_CATEGORIES, GET_HEADER,
};
use super::{
    ContentError, ContentTree, DockContent, GraphqlQuery, GraphqlTransport, HeaderContent,
    PageDocument,
};
use crate::cache::{ContentCache, MemoryContentCache};

#[derive(Clone)]
/// Read-only content client.
///
/// Successful responses are cached by operation name, so repeated panels (the header logo is
/// requested by every custom modal) reuse one fetch.
pub struct ContentClient {
    transport: Rc<dyn GraphqlTransport>,
    cache: Rc<dyn ContentCache>,
}

impl ContentClient {
    /// Creates a client with an in-memory response cache.
    pub fn new(transport: Rc<dyn GraphqlTransport>) -> Self {
        Self::with_cache(transport, Rc::new(MemoryContentCache::default()))
    }

    /// Creates a client with an explicit cache adapter.
    pub fn with_cache(transport: Rc<dyn GraphqlTransport>, cache: Rc<dyn ContentCache>) -> Self {
        Self { transport, cache }
    }

    /// Runs `query` and decodes its `data` payload.
    ///
    /// # Errors
    ///
    /// Propagates transport failures and envelope decoding errors.
    pub async fn query<T: DeserializeOwned>(&self, query: &GraphqlQuery) -> Result<T, ContentError> {
        if let Some(raw) = self.cache.get_text(query.operation_name) {
            match decode_response(query.operation_name, &raw) {
                Ok(value) => return Ok(value),
                Err(_) => self.cache.invalidate(query.operation_name),
            }
        }

        let raw = self.transport.execute(query).await?;
        let value = decode_response(query.operation_name, &raw)?;
        self.cache.put_text(query.operation_name, &raw);
        Ok(value)
    }

    /// Drops the cached response of `query`.
    pub fn invalidate(&self, query: &GraphqlQuery) {
        self.cache.invalidate(query.operation_name);
    }

    /// Pinned dock entries; an absent dock yields an empty list.
    ///
    /// # Errors
    ///
    /// See [`ContentClient::query`].
    pub async fn dock(&self) -> Result<DockContent, ContentError> {
        let data: DockData = self.query(&GET_DOCK).await?;
        Ok(data.dock.unwrap_or_default())
    }

    /// Header content; an absent header yields empty content.
    ///
    /// # Errors
    ///
    /// See [`ContentClient::query`].
    pub async fn header(&self) -> Result<HeaderContent, ContentError> {
        let data: HeaderData = self.query(&GET_HEADER).await?;
        Ok(data.header.unwrap_or_default())
    }

    /// Full category tree.
    ///
    /// # Errors
    ///
    /// See [`ContentClient::query`].
    pub async fn content_tree(&self) -> Result<ContentTree, ContentError> {
        let data: FolderCategoriesData = self.query(&GET_FOLDER_CATEGORIES).await?;
        Ok(data.into())
    }

    /// Browser modal page, `None` when the CMS has no document.
    ///
    /// # Errors
    ///
    /// See [`ContentClient::query`].
    pub async fn browser_page(&self) -> Result<Option<PageDocument>, ContentError> {
        let data: BrowserPageData = self.query(&GET_BROWSER_PAGE).await?;
        Ok(data.browser_modal)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::MemoryGraphqlTransport;

    const DOCK_BODY: &str = r#"{"data":{"dock":{"dockItem":[
        {"title":"Finder","modalSlug":"fileBrowser","reactIconName":"FaFolder"},
        {"title":"GitHub","url":"https://github.com","reactIconName":"FaGithub"}
    ]}}}"#;

    #[test]
    fn repeated_queries_hit_the_cache() {
        let transport = MemoryGraphqlTransport::default().with_response("GetDock", DOCK_BODY);
        let client = ContentClient::new(Rc::new(transport.clone()));

        let first = block_on(client.dock()).expect("dock");
        let second = block_on(client.dock()).expect("dock again");

        assert_eq!(first, second);
        assert_eq!(first.dock_item.len(), 2);
        assert_eq!(transport.request_count("GetDock"), 1);

        client.invalidate(&GET_DOCK);
        block_on(client.dock()).expect("dock refetch");
        assert_eq!(transport.request_count("GetDock"), 2);
    }

    #[test]
    fn failures_are_not_cached() {
        let transport = MemoryGraphqlTransport::default().with_failure(
            "GetHeader",
            ContentError::Http {
                status: 500,
                detail: None,
            },
        );
        let client = ContentClient::new(Rc::new(transport.clone()));

        assert!(block_on(client.header()).is_err());
        assert!(block_on(client.header()).is_err());
        assert_eq!(transport.request_count("GetHeader"), 2);
    }

    #[test]
    fn absent_records_decode_to_empty_content() {
        let transport = MemoryGraphqlTransport::default()
            .with_response("GetHeader", r#"{"data":{"header":null}}"#)
            .with_response("FolderCategories", r#"{"data":{"folderCategories":null}}"#)
            .with_response("GetBrowserModal", r#"{"data":{"browserModal":null}}"#);
        let client = ContentClient::new(Rc::new(transport));

        assert_eq!(block_on(client.header()).unwrap(), HeaderContent::default());
        assert!(block_on(client.content_tree()).unwrap().categories.is_empty());
        assert_eq!(block_on(client.browser_page()).unwrap(), None);
    }
}
