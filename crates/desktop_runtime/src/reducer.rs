//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_host::{ContentTree, DockItem, Folder, Item};
use thiserror::Error;

use crate::{
    dock::{self, PinnedTarget},
    finder::{self, EntryKind},
    model::{
        is_touch_tap, DesktopState, IconDragSession, IconOffset, InteractionState, PictureState,
        PointerPosition,
    },
    modals::ModalKind,
    window_manager,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Replace the content tree after a fetch.
    LoadContent(ContentTree),
    /// Open a folder as the active window.
    OpenFolder(Folder),
    /// Close the active window.
    CloseWindow,
    /// Minimize a window, or the active one when `None`.
    MinimizeWindow(Option<Folder>),
    /// Toggle fullscreen on the active window.
    ToggleFullscreen,
    /// Bring a window back from the dock.
    RestoreWindow(Folder),
    /// Activate a pinned dock entry.
    ActivateDockPin(DockItem),
    /// Show the file browser root.
    SelectFinderRoot,
    /// Show a sidebar folder in the file browser.
    SelectCategory(Folder),
    /// Navigate into an item inside the file browser.
    DrillInto(Item),
    /// Step back in the file browser.
    FinderBack,
    /// Step forward in the file browser.
    FinderForward,
    /// Activate a file browser tile.
    ActivateEntry {
        /// Tile behaviour.
        kind: EntryKind,
        /// Tile caption, used as picture title.
        title: String,
    },
    /// Show the picture overlay.
    OpenPicture(PictureState),
    /// Hide the picture overlay.
    ClosePicture,
    /// Show a second-level image listing.
    OpenImageFolder(Item),
    /// Hide the image listing.
    CloseImageFolder,
    /// Open a link in a new tab.
    OpenExternalUrl(String),
    /// Begin dragging a desktop icon.
    BeginIconDrag {
        /// Dragged folder.
        folder: Folder,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Whether the pointer is a touch contact.
        touch: bool,
    },
    /// Update an in-progress icon drag.
    UpdateIconDrag {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Finish the icon drag; a short touch drag opens the folder.
    EndIconDrag {
        /// Pointer position at release.
        pointer: PointerPosition,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Open an external URL in a new tab.
    OpenExternalUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for actions that do not apply to the current state.
pub enum ReducerError {
    /// File browser navigation while the file browser is not the active window.
    #[error("file browser is not the active window")]
    FinderInactive,
    /// The content tree has no file browser folder to open.
    #[error("no file browser folder in the desktop content")]
    FinderUnavailable,
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// State is left untouched when an error is returned.
///
/// # Errors
///
/// Returns [`ReducerError::FinderInactive`] for file browser navigation while another window is
/// active, and [`ReducerError::FinderUnavailable`] when the file browser must be opened but the
/// content has no folder for it.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::LoadContent(tree) => {
            state.content = tree;
        }
        DesktopAction::OpenFolder(folder) => {
            open_window(state, folder);
        }
        DesktopAction::RestoreWindow(folder) => {
            window_manager::restore(&mut state.windows, folder);
            state.finder.reset();
        }
        DesktopAction::CloseWindow => {
            window_manager::close(&mut state.windows);
            state.finder.reset();
        }
        DesktopAction::MinimizeWindow(folder) => {
            if let Some(minimized) = window_manager::minimize(&mut state.windows, folder) {
                if ModalKind::from_slug(minimized.slug()).is_custom() {
                    state.windows.warmed.insert(minimized.document_id);
                } else {
                    state.finder.reset();
                }
            }
        }
        DesktopAction::ToggleFullscreen => {
            window_manager::toggle_fullscreen(&mut state.windows);
        }
        DesktopAction::ActivateDockPin(item) => {
            match dock::resolve_pinned_target(&item, &state.content, &state.slug_aliases) {
                PinnedTarget::External(url) => effects.push(RuntimeEffect::OpenExternalUrl(url)),
                PinnedTarget::Window(folder) => open_window(state, folder),
                PinnedTarget::Nothing => {}
            }
        }
        DesktopAction::SelectFinderRoot => {
            ensure_finder_open(state)?;
            state.finder.reset();
        }
        DesktopAction::SelectCategory(folder) => {
            ensure_finder_open(state)?;
            finder::select_category(&mut state.finder, folder);
        }
        DesktopAction::DrillInto(item) => {
            require_finder(state)?;
            finder::drill_into(&mut state.finder, item);
        }
        DesktopAction::FinderBack => {
            require_finder(state)?;
            finder::go_back(&mut state.finder);
        }
        DesktopAction::FinderForward => {
            require_finder(state)?;
            finder::go_forward(&mut state.finder);
        }
        DesktopAction::ActivateEntry { kind, title } => match kind {
            EntryKind::Link(url) => effects.push(RuntimeEffect::OpenExternalUrl(url)),
            EntryKind::Drill(item) => {
                require_finder(state)?;
                finder::drill_into(&mut state.finder, item);
            }
            EntryKind::Picture(url) => state.picture = Some(PictureState { url, title }),
            EntryKind::Inert => {}
        },
        DesktopAction::OpenPicture(picture) => {
            state.picture = Some(picture);
        }
        DesktopAction::ClosePicture => {
            state.picture = None;
        }
        DesktopAction::OpenImageFolder(item) => {
            state.image_folder = Some(item);
        }
        DesktopAction::CloseImageFolder => {
            state.image_folder = None;
        }
        DesktopAction::OpenExternalUrl(url) => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
        DesktopAction::BeginIconDrag {
            folder,
            pointer,
            touch,
        } => {
            let offset_start = interaction.icon_offset(&folder.document_id);
            interaction.icon_drag = Some(IconDragSession {
                folder,
                pointer_start: pointer,
                offset_start,
                touch,
            });
        }
        DesktopAction::UpdateIconDrag { pointer } => {
            if let Some(session) = &interaction.icon_drag {
                let offset = IconOffset {
                    dx: session.offset_start.dx + pointer.x - session.pointer_start.x,
                    dy: session.offset_start.dy + pointer.y - session.pointer_start.y,
                };
                let id = session.folder.document_id.clone();
                interaction.icon_offsets.insert(id, offset);
            }
        }
        DesktopAction::EndIconDrag { pointer } => {
            if let Some(session) = interaction.icon_drag.take() {
                if session.touch && is_touch_tap(session.pointer_start, pointer) {
                    interaction
                        .icon_offsets
                        .insert(session.folder.document_id.clone(), session.offset_start);
                    open_window(state, session.folder);
                }
            }
        }
    }
    Ok(effects)
}

fn open_window(state: &mut DesktopState, folder: Folder) {
    window_manager::open(&mut state.windows, folder);
    state.finder.reset();
}

fn require_finder(state: &DesktopState) -> Result<(), ReducerError> {
    if state.windows.finder_active() {
        Ok(())
    } else {
        Err(ReducerError::FinderInactive)
    }
}

fn ensure_finder_open(state: &mut DesktopState) -> Result<(), ReducerError> {
    if state.windows.finder_active() {
        return Ok(());
    }
    let finder = state
        .content
        .finder_folder()
        .cloned()
        .ok_or(ReducerError::FinderUnavailable)?;
    open_window(state, finder);
    Ok(())
}
