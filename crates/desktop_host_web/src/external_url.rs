//! External URL adapter for browser contexts.

use desktop_host::ExternalUrlService;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Opens links in a new tab through `window.open`.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url(&self, url: &str) -> Result<(), String> {
        bridge::open_external_url(url)
    }
}
