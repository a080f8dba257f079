//! Dock presentation derived from pinned CMS entries and the window registry.

use std::collections::BTreeMap;

use desktop_host::{ContentTree, DockItem, Folder, FolderId};

use crate::model::WindowState;

/// Scale of the hovered dock icon.
pub const HOVER_SCALE: f32 = 1.75;
/// Scale of the hovered icon's direct neighbours.
pub const NEIGHBOR_SCALE: f32 = 1.35;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Alias table applied before comparing window slugs.
pub struct SlugAliases(BTreeMap<String, String>);

impl Default for SlugAliases {
    fn default() -> Self {
        Self(BTreeMap::from([(
            desktop_host::FILE_BROWSER_ALIAS.to_string(),
            desktop_host::FINDER_SLUG.to_string(),
        )]))
    }
}

impl From<BTreeMap<String, String>> for SlugAliases {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl SlugAliases {
    /// Maps a slug onto the window slug it stands for; unknown slugs are returned unchanged.
    pub fn canonical<'a>(&'a self, slug: &'a str) -> &'a str {
        self.0.get(slug).map(String::as_str).unwrap_or(slug)
    }

    fn same_window(&self, left: &str, right: &str) -> bool {
        !left.is_empty() && self.canonical(left) == self.canonical(right)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pinned dock icon.
pub struct PinnedEntry {
    /// CMS dock entry.
    pub item: DockItem,
    /// The active window has this entry's canonical slug.
    pub active: bool,
    /// Some minimized window has this entry's canonical slug.
    pub minimized: bool,
}

impl PinnedEntry {
    /// Whether the running indicator is shown.
    pub fn running(&self) -> bool {
        self.active || self.minimized
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Dock icon for an open or minimized window without a pin.
pub struct WindowEntry {
    /// Window folder.
    pub folder: Folder,
    /// Whether this is the active window.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Ordered dock contents.
pub struct DockModel {
    /// Pinned entries in CMS order.
    pub pinned: Vec<PinnedEntry>,
    /// Active then minimized windows not covered by a pin.
    pub windows: Vec<WindowEntry>,
}

impl DockModel {
    /// Whether a separator sits between pinned and window entries.
    pub fn has_separator(&self) -> bool {
        !self.windows.is_empty()
    }

    /// Hover index of the window entry at `position`.
    pub fn window_hover_index(&self, position: usize) -> usize {
        self.pinned.len() + position
    }
}

/// Builds the dock from pinned items and the current windows.
pub fn derive_dock(pinned: &[DockItem], windows: &WindowState, aliases: &SlugAliases) -> DockModel {
    let active_slug = windows
        .active
        .as_ref()
        .map(Folder::slug)
        .unwrap_or_default();

    let pinned_entries = pinned
        .iter()
        .map(|item| PinnedEntry {
            item: item.clone(),
            active: aliases.same_window(item.slug(), active_slug),
            minimized: windows
                .minimized
                .iter()
                .any(|folder| aliases.same_window(item.slug(), folder.slug())),
        })
        .collect();

    let is_pinned = |folder: &Folder| {
        pinned
            .iter()
            .any(|item| aliases.same_window(item.slug(), folder.slug()))
    };

    let mut seen: Vec<&FolderId> = Vec::new();
    let mut window_entries = Vec::new();
    for folder in windows.active.iter().chain(windows.minimized.iter()) {
        if seen.contains(&&folder.document_id) {
            continue;
        }
        seen.push(&folder.document_id);
        if is_pinned(folder) {
            continue;
        }
        window_entries.push(WindowEntry {
            folder: folder.clone(),
            active: windows.is_active(&folder.document_id),
        });
    }

    DockModel {
        pinned: pinned_entries,
        windows: window_entries,
    }
}

/// Magnification for the icon at `index` given the hovered index.
pub fn magnification(hovered: Option<usize>, index: usize) -> f32 {
    match hovered {
        Some(hovered) if hovered == index => HOVER_SCALE,
        Some(hovered) if hovered.abs_diff(index) == 1 => NEIGHBOR_SCALE,
        _ => 1.0,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of activating a pinned dock entry.
pub enum PinnedTarget {
    /// Open a URL in a new tab.
    External(String),
    /// Restore this window.
    Window(Folder),
    /// Entry has neither a link nor a window slug.
    Nothing,
}

/// Resolves what a pinned entry opens.
///
/// Internal entries use the desktop folder with the same canonical slug, falling back to a
/// folder synthesized from the dock entry.
pub fn resolve_pinned_target(
    item: &DockItem,
    tree: &ContentTree,
    aliases: &SlugAliases,
) -> PinnedTarget {
    if let Some(url) = item.url.as_deref().filter(|url| !url.trim().is_empty()) {
        return PinnedTarget::External(url.to_string());
    }
    if item.slug().is_empty() {
        return PinnedTarget::Nothing;
    }

    let canonical = aliases.canonical(item.slug());
    let folder = tree
        .desktop_folders()
        .iter()
        .find(|folder| aliases.canonical(folder.slug()) == canonical)
        .cloned()
        .unwrap_or_else(|| Folder {
            document_id: FolderId(format!("dock:{canonical}")),
            uuid: None,
            title: item.title.clone().unwrap_or_default(),
            modal_slug: Some(canonical.to_string()),
            icon: item.icon.clone(),
            react_icon: item.react_icon_name.clone(),
            react_icon_color: item.react_icon_color.clone(),
            items: Vec::new(),
        });
    PinnedTarget::Window(folder)
}

#[cfg(test)]
mod tests {
    use desktop_host::FolderCategory;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::tests::folder;

    fn pin(slug: &str, url: Option<&str>) -> DockItem {
        DockItem {
            title: Some(slug.to_string()),
            modal_slug: (!slug.is_empty()).then(|| slug.to_string()),
            url: url.map(str::to_string),
            ..DockItem::default()
        }
    }

    #[test]
    fn default_aliases_map_file_browser_only() {
        let aliases = SlugAliases::default();
        assert_eq!(aliases.canonical("fileBrowser"), "openFolder");
        assert_eq!(aliases.canonical("openFolder"), "openFolder");
        assert_eq!(aliases.canonical("resumeModal"), "resumeModal");
    }

    #[test]
    fn pinned_flags_follow_canonical_slugs() {
        let windows = WindowState {
            active: Some(folder("finder", "openFolder")),
            minimized: vec![folder("cv", "resumeModal")],
            ..WindowState::default()
        };
        let dock = derive_dock(
            &[pin("fileBrowser", None), pin("resumeModal", None), pin("", Some("https://x"))],
            &windows,
            &SlugAliases::default(),
        );

        assert!(dock.pinned[0].active && !dock.pinned[0].minimized);
        assert!(!dock.pinned[1].active && dock.pinned[1].minimized);
        assert!(!dock.pinned[2].running());
        assert!(dock.windows.is_empty());
        assert!(!dock.has_separator());
    }

    #[test]
    fn window_entries_are_deduplicated_and_skip_pinned_slugs() {
        let design = folder("design", "garmentDesignModal");
        let windows = WindowState {
            active: Some(design.clone()),
            minimized: vec![
                folder("cv", "resumeModal"),
                folder("shop", "browserModal"),
                design.clone(),
            ],
            ..WindowState::default()
        };
        let dock = derive_dock(&[pin("resumeModal", None)], &windows, &SlugAliases::default());

        let ids: Vec<_> = dock
            .windows
            .iter()
            .map(|entry| (entry.folder.document_id.as_str(), entry.active))
            .collect();
        assert_eq!(ids, vec![("design", true), ("shop", false)]);
        assert!(dock.has_separator());
        assert_eq!(dock.window_hover_index(1), 2);

        let aliases = SlugAliases::default();
        for entry in &dock.windows {
            assert!(dock.pinned.iter().all(|pinned| {
                aliases.canonical(pinned.item.slug()) != aliases.canonical(entry.folder.slug())
            }));
        }
    }

    #[test]
    fn aliased_pin_hides_finder_window_entries() {
        let finder = folder("finder", "openFolder");
        let notes = folder("notes", "browserModal");
        let aliases = SlugAliases::default();
        let pins = [pin("fileBrowser", None)];

        let minimized_finder = WindowState {
            active: Some(notes.clone()),
            minimized: vec![finder.clone(), notes.clone()],
            ..WindowState::default()
        };
        let active_finder = WindowState {
            active: Some(finder.clone()),
            minimized: vec![notes.clone(), finder.clone()],
            ..WindowState::default()
        };

        for windows in [minimized_finder, active_finder] {
            let dock = derive_dock(&pins, &windows, &aliases);
            let ids: Vec<_> = dock
                .windows
                .iter()
                .map(|entry| entry.folder.document_id.as_str())
                .collect();
            assert_eq!(ids, vec!["notes"]);
            assert!(dock.pinned[0].running());
            for entry in &dock.windows {
                assert_ne!(
                    aliases.canonical(entry.folder.slug()),
                    aliases.canonical(dock.pinned[0].item.slug())
                );
            }
        }
    }

    #[test]
    fn magnification_scales_hovered_and_neighbors() {
        assert_eq!(magnification(Some(2), 2), 1.75);
        assert_eq!(magnification(Some(2), 1), 1.35);
        assert_eq!(magnification(Some(2), 3), 1.35);
        assert_eq!(magnification(Some(2), 4), 1.0);
        assert_eq!(magnification(None, 0), 1.0);
    }

    #[test]
    fn pinned_target_prefers_desktop_folder_then_synthesizes() {
        let finder = folder("finder", "openFolder");
        let tree = ContentTree {
            categories: vec![FolderCategory {
                document_id: "d".into(),
                name: "Desktop".into(),
                desktop_folders: vec![finder.clone()],
            }],
        };
        let aliases = SlugAliases::default();

        assert_eq!(
            resolve_pinned_target(&pin("fileBrowser", None), &tree, &aliases),
            PinnedTarget::Window(finder)
        );
        match resolve_pinned_target(&pin("browserModal", None), &tree, &aliases) {
            PinnedTarget::Window(synth) => {
                assert_eq!(synth.document_id.as_str(), "dock:browserModal");
                assert_eq!(synth.slug(), "browserModal");
            }
            other => panic!("unexpected target {other:?}"),
        }
        assert_eq!(
            resolve_pinned_target(&pin("resumeModal", Some("https://cv.dev")), &tree, &aliases),
            PinnedTarget::External("https://cv.dev".into())
        );
        assert_eq!(
            resolve_pinned_target(&pin("", None), &tree, &aliases),
            PinnedTarget::Nothing
        );
    }
}
