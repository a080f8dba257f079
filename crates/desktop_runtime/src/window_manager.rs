//! Window registry transitions used by the desktop reducer.
//!
//! At most one window is active; minimized windows form a set keyed by folder identity and never
//! include the active window.

use desktop_host::Folder;

use crate::model::WindowState;

/// Makes `folder` the active window, leaving fullscreen and pulling it out of the minimized set.
///
/// The previously active window is dropped, not minimized.
pub fn open(windows: &mut WindowState, folder: Folder) {
    windows
        .minimized
        .retain(|entry| entry.document_id != folder.document_id);
    windows.active = Some(folder);
    windows.fullscreen = false;
}

/// Clears the active window. Minimized windows are untouched.
pub fn close(windows: &mut WindowState) {
    windows.active = None;
}

/// Minimizes `folder`, or the active window when `folder` is `None`.
///
/// Returns the minimized folder, or `None` when there was nothing to minimize.
pub fn minimize(windows: &mut WindowState, folder: Option<Folder>) -> Option<Folder> {
    let target = folder.or_else(|| windows.active.clone())?;

    if !windows.is_minimized(&target.document_id) {
        windows.minimized.push(target.clone());
    }
    if windows.is_active(&target.document_id) {
        windows.active = None;
    }
    Some(target)
}

/// Flips fullscreen for the active window. Returns `false` when no window is active.
pub fn toggle_fullscreen(windows: &mut WindowState) -> bool {
    if windows.active.is_none() {
        return false;
    }
    windows.fullscreen = !windows.fullscreen;
    true
}

/// Brings a minimized (or any) window back as the active one.
pub fn restore(windows: &mut WindowState, folder: Folder) {
    open(windows, folder);
}

#[cfg(test)]
pub(crate) mod tests {
    use desktop_host::FolderId;
    use pretty_assertions::assert_eq;

    use super::*;

    pub(crate) fn folder(id: &str, slug: &str) -> Folder {
        Folder {
            document_id: FolderId(id.to_string()),
            uuid: None,
            title: id.to_uppercase(),
            modal_slug: (!slug.is_empty()).then(|| slug.to_string()),
            icon: Vec::new(),
            react_icon: None,
            react_icon_color: None,
            items: Vec::new(),
        }
    }

    fn ids(windows: &WindowState) -> Vec<&str> {
        windows
            .minimized
            .iter()
            .map(|f| f.document_id.as_str())
            .collect()
    }

    fn assert_invariants(windows: &WindowState) {
        if let Some(active) = &windows.active {
            assert!(!windows.is_minimized(&active.document_id));
        }
        let mut seen = ids(windows);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), windows.minimized.len());
    }

    #[test]
    fn minimize_active_then_restore_round_trip() {
        let mut windows = WindowState::default();
        let b = folder("b", "resumeModal");
        open(&mut windows, b.clone());

        minimize(&mut windows, None);
        assert_eq!(windows.active, None);
        assert_eq!(ids(&windows), vec!["b"]);

        restore(&mut windows, b.clone());
        assert_eq!(windows.active, Some(b));
        assert!(windows.minimized.is_empty());
    }

    #[test]
    fn minimize_is_idempotent_and_noop_without_target() {
        let mut windows = WindowState::default();
        assert_eq!(minimize(&mut windows, None), None);
        assert_eq!(windows, WindowState::default());

        let a = folder("a", "garmentDesignModal");
        minimize(&mut windows, Some(a.clone()));
        minimize(&mut windows, Some(a));
        assert_eq!(ids(&windows), vec!["a"]);
    }

    #[test]
    fn closing_active_keeps_minimized_set() {
        let mut windows = WindowState::default();
        minimize(&mut windows, Some(folder("a", "x")));
        minimize(&mut windows, Some(folder("b", "y")));
        open(&mut windows, folder("c", "z"));

        close(&mut windows);
        assert_eq!(windows.active, None);
        assert_eq!(ids(&windows), vec!["a", "b"]);
    }

    #[test]
    fn opening_another_window_replaces_active_without_minimizing_it() {
        let mut windows = WindowState::default();
        open(&mut windows, folder("a", "resumeModal"));
        windows.fullscreen = true;
        open(&mut windows, folder("finder", "openFolder"));

        assert!(windows.finder_active());
        assert!(!windows.fullscreen);
        assert!(windows.minimized.is_empty());
    }

    #[test]
    fn fullscreen_requires_active_window() {
        let mut windows = WindowState::default();
        assert!(!toggle_fullscreen(&mut windows));
        assert!(!windows.fullscreen);

        open(&mut windows, folder("a", "x"));
        assert!(toggle_fullscreen(&mut windows));
        assert!(windows.fullscreen);
        assert!(toggle_fullscreen(&mut windows));
        assert!(!windows.fullscreen);
    }

    #[test]
    fn invariants_hold_across_mixed_sequences() {
        let folders = [folder("a", "x"), folder("b", "y"), folder("c", "openFolder")];
        let mut windows = WindowState::default();

        for step in 0..60usize {
            let target = folders[step % folders.len()].clone();
            match (step * 7) % 5 {
                0 => open(&mut windows, target),
                1 => {
                    minimize(&mut windows, Some(target));
                }
                2 => {
                    minimize(&mut windows, None);
                }
                3 => restore(&mut windows, target),
                _ => close(&mut windows),
            }
            assert_invariants(&windows);
        }
    }
}
