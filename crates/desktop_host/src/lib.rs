//! Typed host contracts for the CMS desktop: content records, GraphQL query client, response
//! cache, endpoint configuration, and external URL opening.
//!
//! Browser adapters live in `desktop_host_web`; everything here is target-independent so the
//! runtime reducer and its tests never touch `web-sys`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod cache;
pub mod content;
pub mod endpoint;
pub mod external_url;
pub mod host;

pub use cache::{ContentCache, MemoryContentCache, NoopContentCache};
pub use content::*;
pub use endpoint::{AssetOrigin, CmsEndpointConfig};
pub use external_url::{ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService};
pub use host::HostServices;
