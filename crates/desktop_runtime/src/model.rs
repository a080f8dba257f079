use std::collections::{BTreeMap, BTreeSet};

use desktop_host::{ContentTree, Folder, FolderId, Item};
use serde::{Deserialize, Serialize};

use crate::dock::SlugAliases;

/// Horizontal position of the first desktop icon.
pub const DESKTOP_ICON_LEFT_PX: i32 = 40;
/// Vertical position of the first desktop icon.
pub const DESKTOP_ICON_TOP_PX: i32 = 20;
/// Vertical distance between stacked desktop icons.
pub const DESKTOP_ICON_SPACING_PX: i32 = 100;
/// Touch drags shorter than this on both axes count as a tap.
pub const TAP_SLOP_PX: i32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Open, minimized and fullscreen windows. A window is identified by its folder.
pub struct WindowState {
    /// The single focused window.
    pub active: Option<Folder>,
    /// Minimized windows in minimize order; never contains `active`.
    pub minimized: Vec<Folder>,
    /// Whether the active window fills the viewport.
    pub fullscreen: bool,
    /// Custom modals that already played their splash.
    pub warmed: BTreeSet<FolderId>,
}

impl WindowState {
    /// Whether the active window is the file browser.
    pub fn finder_active(&self) -> bool {
        self.active.as_ref().is_some_and(Folder::is_finder)
    }

    /// Whether `id` is minimized.
    pub fn is_minimized(&self, id: &FolderId) -> bool {
        self.minimized.iter().any(|folder| &folder.document_id == id)
    }

    /// Whether `id` is the active window.
    pub fn is_active(&self, id: &FolderId) -> bool {
        self.active
            .as_ref()
            .is_some_and(|folder| &folder.document_id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// What the file browser grid is showing.
pub enum FinderView {
    /// Every item of every desktop folder.
    #[default]
    Root,
    /// A sidebar folder's items.
    Folder(Folder),
    /// A drilled-into item's sub-items.
    Item(Item),
}

impl FinderView {
    /// Title bar text.
    pub fn title(&self) -> &str {
        match self {
            Self::Root => "Finder",
            Self::Folder(folder) => &folder.title,
            Self::Item(item) => item.display_title(),
        }
    }

    /// Whether this is the root listing.
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Root)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Back/forward navigation inside the file browser.
pub struct FinderHistory {
    /// Previous views, most recent last.
    pub back: Vec<FinderView>,
    /// Views undone by `back`, most recent last.
    pub forward: Vec<FinderView>,
    /// Current view.
    pub current: FinderView,
    /// Highlighted sidebar folder; `None` highlights the root entry.
    pub selected: Option<FolderId>,
}

impl FinderHistory {
    /// Returns to the root view with empty stacks.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a back step is available.
    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    /// Whether a forward step is available.
    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Full-window picture overlay.
pub struct PictureState {
    /// Image URL as stored in the CMS; resolved against the asset origin when drawn.
    pub url: String,
    /// Caption shown in the title bar.
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Desktop snapshot rendered by every surface.
pub struct DesktopState {
    /// Last loaded content tree.
    pub content: ContentTree,
    /// Window registry.
    pub windows: WindowState,
    /// File browser navigation.
    pub finder: FinderHistory,
    /// Picture overlay.
    pub picture: Option<PictureState>,
    /// Second-level image listing.
    pub image_folder: Option<Item>,
    /// Slug aliases used to match dock pins with windows.
    pub slug_aliases: SlugAliases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Pointer position in CSS pixels.
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Drag displacement of a desktop icon from its stacked slot.
pub struct IconOffset {
    /// Horizontal displacement.
    pub dx: i32,
    /// Vertical displacement.
    pub dy: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-progress desktop icon drag.
pub struct IconDragSession {
    /// Dragged folder.
    pub folder: Folder,
    /// Pointer position at drag start.
    pub pointer_start: PointerPosition,
    /// Icon offset at drag start.
    pub offset_start: IconOffset,
    /// Whether the drag comes from a touch pointer.
    pub touch: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Pointer interaction state kept apart from [`DesktopState`].
pub struct InteractionState {
    /// Active icon drag.
    pub icon_drag: Option<IconDragSession>,
    /// Per-folder icon offsets.
    pub icon_offsets: BTreeMap<FolderId, IconOffset>,
}

impl InteractionState {
    /// Current offset for `id`.
    pub fn icon_offset(&self, id: &FolderId) -> IconOffset {
        self.icon_offsets.get(id).copied().unwrap_or_default()
    }
}

/// CSS `left`/`top` of the desktop icon at `index` after applying `offset`.
pub fn desktop_icon_position(index: usize, offset: IconOffset) -> PointerPosition {
    let index = i32::try_from(index).unwrap_or(i32::MAX / DESKTOP_ICON_SPACING_PX);
    PointerPosition {
        x: DESKTOP_ICON_LEFT_PX + offset.dx,
        y: DESKTOP_ICON_TOP_PX + index * DESKTOP_ICON_SPACING_PX + offset.dy,
    }
}

/// Whether a touch drag from `start` to `end` was short enough to be a tap.
pub fn is_touch_tap(start: PointerPosition, end: PointerPosition) -> bool {
    (end.x - start.x).abs() < TAP_SLOP_PX && (end.y - start.y).abs() < TAP_SLOP_PX
}
