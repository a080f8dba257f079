//! Menu bar clock formatting, dropdown hover tracking and menu entry targets.

use desktop_host::{ContentTree, Folder, MenuEntry};

use crate::dock::SlugAliases;

/// Grace period before a dropdown closes after the pointer leaves it.
pub const MENU_HOVER_GRACE_MS: u64 = 100;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Local wall-clock reading.
pub struct ClockSnapshot {
    /// Day of week, `0` = Sunday.
    pub weekday: u32,
    /// Month, `0` = January.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Hour, 0-23.
    pub hour: u32,
    /// Minute.
    pub minute: u32,
}

impl ClockSnapshot {
    /// Reads the browser clock; a fixed epoch reading off-wasm.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month(),
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 0,
                day: 1,
                hour: 0,
                minute: 0,
            }
        }
    }

    /// Formats as `Wed Apr 23 5:11 PM`.
    pub fn label(self) -> String {
        let weekday = WEEKDAYS.get(self.weekday as usize).copied().unwrap_or("");
        let month = MONTHS.get(self.month as usize).copied().unwrap_or("");
        let meridiem = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            other => other,
        };
        format!(
            "{weekday} {month} {} {hour}:{:02} {meridiem}",
            self.day, self.minute
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Dropdown visibility driven by hover and click.
///
/// Leave events are applied only after [`MENU_HOVER_GRACE_MS`]; an enter before then cancels
/// the pending leave.
pub struct MenuHover {
    open: bool,
    over_trigger: bool,
    over_panel: bool,
}

impl MenuHover {
    /// Pointer entered the trigger: opens the dropdown.
    pub fn enter_trigger(&mut self) {
        self.open = true;
        self.over_trigger = true;
    }

    /// Grace period after leaving the trigger elapsed.
    pub fn leave_trigger(&mut self) {
        self.over_trigger = false;
    }

    /// Pointer entered the panel.
    pub fn enter_panel(&mut self) {
        self.over_panel = true;
    }

    /// Grace period after leaving the panel elapsed.
    pub fn leave_panel(&mut self) {
        self.over_panel = false;
    }

    /// Trigger clicked.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// An entry was chosen.
    pub fn select(&mut self) {
        self.open = false;
    }

    /// Whether the panel is shown.
    pub fn visible(self) -> bool {
        self.open && (self.over_trigger || self.over_panel)
    }
}

/// Desktop folder opened by a menu entry: the one whose canonical slug matches the entry's.
pub fn menu_entry_folder(
    entry: &MenuEntry,
    tree: &ContentTree,
    aliases: &SlugAliases,
) -> Option<Folder> {
    let slug = entry.modal_slug.as_deref().filter(|slug| !slug.is_empty())?;
    let canonical = aliases.canonical(slug);
    tree.desktop_folders()
        .iter()
        .find(|folder| aliases.canonical(folder.slug()) == canonical)
        .cloned()
}

#[cfg(test)]
mod tests {
    use desktop_host::FolderCategory;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::tests::folder;

    #[test]
    fn clock_label_uses_short_names_and_twelve_hour_time() {
        let afternoon = ClockSnapshot {
            weekday: 3,
            month: 3,
            day: 23,
            hour: 17,
            minute: 11,
        };
        assert_eq!(afternoon.label(), "Wed Apr 23 5:11 PM");

        let midnight = ClockSnapshot {
            weekday: 0,
            month: 11,
            day: 1,
            hour: 0,
            minute: 5,
        };
        assert_eq!(midnight.label(), "Sun Dec 1 12:05 AM");

        let noon = ClockSnapshot {
            hour: 12,
            minute: 0,
            ..midnight
        };
        assert_eq!(noon.label(), "Sun Dec 1 12:00 PM");
    }

    #[test]
    fn dropdown_stays_open_while_moving_from_trigger_to_panel() {
        let mut menu = MenuHover::default();
        menu.enter_trigger();
        assert!(menu.visible());

        menu.enter_panel();
        menu.leave_trigger();
        assert!(menu.visible());

        menu.leave_panel();
        assert!(!menu.visible());
    }

    #[test]
    fn selecting_or_toggling_closes_dropdown() {
        let mut menu = MenuHover::default();
        menu.enter_trigger();
        menu.select();
        assert!(!menu.visible());

        menu.toggle();
        assert!(menu.visible());
        menu.toggle();
        assert!(!menu.visible());
    }

    #[test]
    fn menu_entries_open_desktop_folders_by_canonical_slug() {
        let finder = folder("finder", "openFolder");
        let resume = folder("cv", "resumeModal");
        let tree = ContentTree {
            categories: vec![FolderCategory {
                document_id: "d".into(),
                name: "Desktop".into(),
                desktop_folders: vec![finder.clone(), resume.clone()],
            }],
        };
        let aliases = SlugAliases::default();
        let entry = |slug: Option<&str>| MenuEntry {
            text: "About".into(),
            modal_slug: slug.map(str::to_string),
        };

        assert_eq!(
            menu_entry_folder(&entry(Some("fileBrowser")), &tree, &aliases),
            Some(finder)
        );
        assert_eq!(
            menu_entry_folder(&entry(Some("resumeModal")), &tree, &aliases),
            Some(resume)
        );
        assert_eq!(menu_entry_folder(&entry(Some("browserModal")), &tree, &aliases), None);
        assert_eq!(menu_entry_folder(&entry(Some("")), &tree, &aliases), None);
        assert_eq!(menu_entry_folder(&entry(None), &tree, &aliases), None);
    }
}
