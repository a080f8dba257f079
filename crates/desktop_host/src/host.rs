//! Host service bundle assembled by the entry layer and handed to the desktop runtime.

use std::rc::Rc;

use crate::{
    AssetOrigin, ContentClient, ExternalUrlService, GraphqlTransport, NoopExternalUrlService,
};

#[derive(Clone)]
/// Services the runtime needs from its host.
pub struct HostServices {
    /// Caching CMS query client.
    pub content: ContentClient,
    /// Origin for relative upload URLs.
    pub assets: AssetOrigin,
    /// External link opener.
    pub external_urls: Rc<dyn ExternalUrlService>,
}

impl HostServices {
    /// Bundles a transport with an asset origin and a no-op link opener.
    pub fn new(transport: Rc<dyn GraphqlTransport>, assets: AssetOrigin) -> Self {
        Self {
            content: ContentClient::new(transport),
            assets,
            external_urls: Rc::new(NoopExternalUrlService),
        }
    }

    /// Replaces the external link opener.
    pub fn with_external_urls(mut self, external_urls: Rc<dyn ExternalUrlService>) -> Self {
        self.external_urls = external_urls;
        self
    }
}
