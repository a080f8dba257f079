//! External URL host-service contracts.

use std::{cell::RefCell, rc::Rc};

/// Opens URLs outside the desktop shell (a new browser tab).
pub trait ExternalUrlService {
    /// Opens `url`.
    ///
    /// # Errors
    ///
    /// Returns the host's failure description when the URL could not be opened.
    fn open_url(&self, url: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op external URL service for unsupported targets.
pub struct NoopExternalUrlService;

impl ExternalUrlService for NoopExternalUrlService {
    fn open_url(&self, _url: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Records opened URLs instead of navigating.
pub struct RecordingExternalUrlService {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingExternalUrlService {
    /// URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalUrlService for RecordingExternalUrlService {
    fn open_url(&self, url: &str) -> Result<(), String> {
        if url.trim().is_empty() {
            return Err("empty url".to_string());
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
