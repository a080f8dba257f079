//! Window renderer selection by modal slug.

#[derive(Debug, Clone, PartialEq, Eq)]
/// Renderer for an open window.
pub enum ModalKind {
    /// Built-in file browser.
    Finder,
    /// Design gallery with sidebar, image grid and lightbox.
    GarmentDesign,
    /// Paged résumé viewer.
    Resume,
    /// CMS page rendered inside a fake browser.
    Browser,
    /// No renderer for this slug.
    Unknown(String),
}

impl ModalKind {
    /// Picks the renderer for `slug`.
    pub fn from_slug(slug: &str) -> Self {
        match slug {
            desktop_host::FINDER_SLUG => Self::Finder,
            "garmentDesignModal" => Self::GarmentDesign,
            "resumeModal" => Self::Resume,
            "browserModal" => Self::Browser,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether minimizing this window marks it warmed.
    pub fn is_custom(&self) -> bool {
        !matches!(self, Self::Finder)
    }
}

/// Placeholder text for slugs without a renderer.
pub fn missing_modal_message(slug: &str) -> String {
    format!("No modal defined for `{slug}` yet.")
}
