//! File browser navigation and grid resolution.
//!
//! Sidebar selection is not history: it resets both stacks. Only drilling into an item pushes a
//! back entry.

use desktop_host::{ContentTree, Folder, Item, SubItem};

use crate::model::{FinderHistory, FinderView};

#[derive(Debug, Clone, PartialEq, Eq)]
/// What activating a grid entry does.
pub enum EntryKind {
    /// Opens the URL in a new tab.
    Link(String),
    /// Navigates into the item.
    Drill(Item),
    /// Opens the picture overlay with this (unresolved) image URL.
    Picture(String),
    /// Does nothing.
    Inert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One tile of the file browser grid.
pub struct GridEntry {
    /// Stable key.
    pub id: String,
    /// Caption.
    pub title: String,
    /// Thumbnail image URL, unresolved.
    pub thumb_url: Option<String>,
    /// Glyph name used without a thumbnail.
    pub react_icon: Option<String>,
    /// Glyph colour.
    pub react_icon_color: Option<String>,
    /// Activation behaviour.
    pub kind: EntryKind,
}

impl GridEntry {
    fn from_item(item: &Item) -> Self {
        let kind = match item.link_url() {
            Some(url) => EntryKind::Link(url.to_string()),
            None => EntryKind::Drill(item.clone()),
        };
        Self {
            id: item.id.clone(),
            title: item.display_title().to_string(),
            thumb_url: item.thumb_url().map(str::to_string),
            react_icon: item.react_icon.clone(),
            react_icon_color: item.react_icon_color.clone(),
            kind,
        }
    }

    fn from_sub_item(sub: &SubItem) -> Self {
        let kind = match sub.picture_url() {
            Some(url) => EntryKind::Picture(url.to_string()),
            None => EntryKind::Inert,
        };
        Self {
            id: sub.id.clone(),
            title: sub.display_title().to_string(),
            thumb_url: sub.image.first().map(|asset| asset.url.clone()),
            react_icon: None,
            react_icon_color: None,
            kind,
        }
    }
}

/// Grid tiles for `view`.
pub fn grid_entries(tree: &ContentTree, view: &FinderView) -> Vec<GridEntry> {
    match view {
        FinderView::Root => tree
            .finder_root_items()
            .iter()
            .map(GridEntry::from_item)
            .collect(),
        FinderView::Folder(folder) => folder.items.iter().map(GridEntry::from_item).collect(),
        FinderView::Item(item) => item.sub_item.iter().map(GridEntry::from_sub_item).collect(),
    }
}

/// Shows `folder`'s items, highlights it, and clears both stacks.
pub fn select_category(history: &mut FinderHistory, folder: Folder) {
    history.selected = Some(folder.document_id.clone());
    history.current = FinderView::Folder(folder);
    history.back.clear();
    history.forward.clear();
}

/// Pushes the current view and shows `item`'s sub-items.
pub fn drill_into(history: &mut FinderHistory, item: Item) {
    let previous = std::mem::replace(&mut history.current, FinderView::Item(item));
    history.back.push(previous);
    history.forward.clear();
}

/// Steps back. Returns `false` when the back stack is empty.
pub fn go_back(history: &mut FinderHistory) -> bool {
    let Some(previous) = history.back.pop() else {
        return false;
    };
    let current = std::mem::replace(&mut history.current, previous);
    history.forward.push(current);
    true
}

/// Steps forward. Returns `false` when the forward stack is empty.
pub fn go_forward(history: &mut FinderHistory) -> bool {
    let Some(next) = history.forward.pop() else {
        return false;
    };
    let current = std::mem::replace(&mut history.current, next);
    history.back.push(current);
    true
}

#[cfg(test)]
mod tests {
    use desktop_host::{Asset, ContentItems, FolderCategory, FolderId};
    use pretty_assertions::assert_eq;

    use super::*;

    fn item(id: &str, url: Option<&str>, subs: Vec<SubItem>) -> Item {
        Item {
            id: id.into(),
            title: Some(format!("Item {id}")),
            react_icon: None,
            react_icon_color: None,
            modal_slug: None,
            icon: Vec::new(),
            url: url.map(str::to_string),
            sub_item: subs,
        }
    }

    fn sub(id: &str, content: Option<&str>, image: Option<&str>) -> SubItem {
        SubItem {
            id: id.into(),
            text: Some(id.into()),
            content_items: content.map(|url| ContentItems {
                id: None,
                image: vec![Asset { url: url.into() }],
            }),
            modal_slug: None,
            image: image
                .map(|url| vec![Asset { url: url.into() }])
                .unwrap_or_default(),
        }
    }

    fn category(id: &str) -> Folder {
        Folder {
            document_id: FolderId(id.into()),
            uuid: None,
            title: id.into(),
            modal_slug: None,
            icon: Vec::new(),
            react_icon: None,
            react_icon_color: None,
            items: vec![item("c1", None, Vec::new())],
        }
    }

    #[test]
    fn entry_kind_follows_entry_shape() {
        let drilled = item(
            "x",
            None,
            vec![sub("pic", Some("/full.png"), None), sub("plain", None, None)],
        );
        let folder = Folder {
            items: vec![item("link", Some("https://a.dev"), Vec::new()), drilled.clone()],
            ..category("f")
        };

        let tiles = grid_entries(&ContentTree::default(), &FinderView::Folder(folder));
        assert_eq!(tiles[0].kind, EntryKind::Link("https://a.dev".into()));
        assert_eq!(tiles[1].kind, EntryKind::Drill(drilled.clone()));

        let subs = grid_entries(&ContentTree::default(), &FinderView::Item(drilled));
        assert_eq!(subs[0].kind, EntryKind::Picture("/full.png".into()));
        assert_eq!(subs[1].kind, EntryKind::Inert);
    }

    #[test]
    fn root_lists_items_of_every_desktop_folder() {
        let tree = ContentTree {
            categories: vec![FolderCategory {
                document_id: "d".into(),
                name: "Desktop".into(),
                desktop_folders: vec![
                    Folder {
                        items: vec![item("a", None, Vec::new())],
                        ..category("one")
                    },
                    Folder {
                        items: vec![item("b", None, Vec::new())],
                        ..category("two")
                    },
                ],
            }],
        };
        let ids: Vec<_> = grid_entries(&tree, &FinderView::Root)
            .into_iter()
            .map(|tile| tile.id)
            .collect();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
        assert!(grid_entries(&ContentTree::default(), &FinderView::Root).is_empty());
    }

    #[test]
    fn drill_back_forward_scenario() {
        let x = item("x", None, Vec::new());
        let mut history = FinderHistory::default();

        drill_into(&mut history, x.clone());
        assert_eq!(history.back, vec![FinderView::Root]);
        assert_eq!(history.current, FinderView::Item(x.clone()));

        assert!(go_back(&mut history));
        assert_eq!(history.current, FinderView::Root);
        assert_eq!(history.forward, vec![FinderView::Item(x.clone())]);

        assert!(go_forward(&mut history));
        assert_eq!(history.current, FinderView::Item(x));
        assert!(history.forward.is_empty());
    }

    #[test]
    fn backing_out_of_nested_drills_returns_to_the_category() {
        let (x, y, z) = (
            item("x", None, Vec::new()),
            item("y", None, Vec::new()),
            item("z", None, Vec::new()),
        );
        let mut history = FinderHistory::default();
        select_category(&mut history, category("fav"));
        drill_into(&mut history, x.clone());
        drill_into(&mut history, y.clone());

        assert!(go_back(&mut history));
        assert!(go_back(&mut history));
        assert_eq!(history.current, FinderView::Folder(category("fav")));
        assert!(history.back.is_empty());
        assert_eq!(
            history.forward,
            vec![FinderView::Item(y), FinderView::Item(x.clone())]
        );

        assert!(go_forward(&mut history));
        drill_into(&mut history, z.clone());
        assert!(history.forward.is_empty());

        assert!(go_back(&mut history));
        assert_eq!(history.current, FinderView::Item(x.clone()));
        assert!(go_forward(&mut history));
        assert_eq!(history.current, FinderView::Item(z));
        assert_eq!(
            history.back,
            vec![FinderView::Folder(category("fav")), FinderView::Item(x)]
        );
    }

    #[test]
    fn back_then_forward_restores_every_reachable_state() {
        enum Step {
            Drill(&'static str),
            Back,
            Forward,
        }

        let mut history = FinderHistory::default();
        select_category(&mut history, category("fav"));

        let steps = [
            Step::Drill("x"),
            Step::Drill("y"),
            Step::Back,
            Step::Back,
            Step::Forward,
            Step::Drill("z"),
            Step::Drill("w"),
            Step::Back,
            Step::Forward,
            Step::Back,
            Step::Back,
            Step::Drill("v"),
            Step::Forward,
        ];

        for step in steps {
            match step {
                Step::Drill(id) => drill_into(&mut history, item(id, None, Vec::new())),
                Step::Back => {
                    go_back(&mut history);
                }
                Step::Forward => {
                    go_forward(&mut history);
                }
            }

            if history.can_go_back() {
                let before = history.clone();
                assert!(go_back(&mut history));
                assert!(go_forward(&mut history));
                assert_eq!(history, before);
            }
            if history.can_go_forward() {
                let before = history.clone();
                assert!(go_forward(&mut history));
                assert!(go_back(&mut history));
                assert_eq!(history, before);
            }
            assert_eq!(history.selected, Some(FolderId("fav".into())));
        }

        assert_eq!(history.current, FinderView::Item(item("v", None, Vec::new())));
        assert_eq!(
            history.back,
            vec![
                FinderView::Folder(category("fav")),
                FinderView::Item(item("x", None, Vec::new())),
            ]
        );
        assert!(history.forward.is_empty());
    }

    #[test]
    fn back_and_forward_are_noops_on_empty_stacks() {
        let mut history = FinderHistory::default();
        assert!(!go_back(&mut history));
        assert!(!go_forward(&mut history));
        assert_eq!(history, FinderHistory::default());
    }

    #[test]
    fn category_selection_clears_both_stacks() {
        let mut history = FinderHistory::default();
        drill_into(&mut history, item("x", None, Vec::new()));
        drill_into(&mut history, item("y", None, Vec::new()));
        go_back(&mut history);

        select_category(&mut history, category("fav"));
        assert!(history.back.is_empty());
        assert!(history.forward.is_empty());
        assert_eq!(history.selected, Some(FolderId("fav".into())));
        assert_eq!(history.current.title(), "fav");
    }

    #[test]
    fn drilling_clears_forward_stack() {
        let mut history = FinderHistory::default();
        drill_into(&mut history, item("x", None, Vec::new()));
        go_back(&mut history);
        drill_into(&mut history, item("y", None, Vec::new()));
        assert!(history.forward.is_empty());
        assert_eq!(history.back, vec![FinderView::Root]);
    }
}
