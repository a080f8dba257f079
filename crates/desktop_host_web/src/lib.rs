//! Browser (`wasm32`) implementations of [`desktop_host`] service contracts.
//!
//! The GraphQL transport posts through `gloo-net`; the CMS origin is chosen from the page
//! hostname using a [`CmsEndpointConfig`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
pub mod external_url;
pub mod transport;

use std::rc::Rc;

use desktop_host::{AssetOrigin, CmsEndpointConfig, HostServices};

pub use external_url::WebExternalUrlService;
pub use transport::HttpGraphqlTransport;

/// Hostname of the current page, `None` off-browser.
pub fn page_hostname() -> Option<String> {
    bridge::page_hostname()
}

/// Assembles browser host services for the CMS described by `config`.
pub fn build_host_services(config: &CmsEndpointConfig) -> HostServices {
    let hostname = page_hostname().unwrap_or_default();
    let transport = HttpGraphqlTransport::new(config.graphql_endpoint(&hostname));
    let assets = AssetOrigin::new(config.resolve_origin(&hostname));

    HostServices::new(Rc::new(transport), assets)
        .with_external_urls(Rc::new(WebExternalUrlService))
}
