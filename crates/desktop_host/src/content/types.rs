//! CMS content records shared by the query client and the desktop runtime.
//!
//! Field names follow the GraphQL documents in [`crate::content::query`]; list fields tolerate
//! `null` because the CMS omits empty media relations.

use serde::{Deserialize, Deserializer, Serialize};

/// Modal slug of the built-in file browser window.
pub const FINDER_SLUG: &str = "openFolder";
/// Legacy dock alias that refers to the file browser.
pub const FILE_BROWSER_ALIAS: &str = "fileBrowser";
/// Item slug that opens a second-level image listing.
pub const IMAGE_FOLDER_SLUG: &str = "imageFolderModal";
/// Item slug that opens the item thumbnail in the picture viewer.
pub const PICTURE_SLUG: &str = "pictureModal";
/// Category whose folders become desktop icons rather than sidebar entries.
pub const DESKTOP_CATEGORY: &str = "Desktop";

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Stable CMS document identity of a folder.
pub struct FolderId(pub String);

impl FolderId {
    /// Borrows the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FolderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Uploaded media reference.
pub struct Asset {
    /// Relative (`/uploads/...`) or absolute URL.
    pub url: String,
}

fn first_url(assets: &[Asset]) -> Option<&str> {
    assets
        .first()
        .map(|asset| asset.url.as_str())
        .filter(|url| !url.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Ordered CMS category grouping desktop folders.
pub struct FolderCategory {
    /// CMS identity.
    pub document_id: String,
    /// Display name; [`DESKTOP_CATEGORY`] is special.
    pub name: String,
    /// Folders in this category.
    #[serde(rename = "desktop_folders", default, deserialize_with = "nullable_vec")]
    pub desktop_folders: Vec<Folder>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Content node rendered as a desktop icon, dock entry, or window.
pub struct Folder {
    /// Identity used by the window registry.
    pub document_id: FolderId,
    /// Optional secondary CMS identifier.
    #[serde(default)]
    pub uuid: Option<String>,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Renderer selector.
    #[serde(default)]
    pub modal_slug: Option<String>,
    /// Uploaded icon images.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub icon: Vec<Asset>,
    /// Named glyph used when no icon image is present.
    #[serde(default)]
    pub react_icon: Option<String>,
    /// Glyph colour.
    #[serde(default)]
    pub react_icon_color: Option<String>,
    /// Child items.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub items: Vec<Item>,
}

impl Folder {
    /// Returns the first icon image URL, if any.
    pub fn icon_url(&self) -> Option<&str> {
        first_url(&self.icon)
    }

    /// Returns the modal slug or an empty string.
    pub fn slug(&self) -> &str {
        self.modal_slug.as_deref().unwrap_or_default()
    }

    /// Returns `true` for the built-in file browser folder.
    pub fn is_finder(&self) -> bool {
        self.slug() == FINDER_SLUG
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Child of a [`Folder`]; either an external link or a container of [`SubItem`]s.
pub struct Item {
    /// CMS component id.
    pub id: String,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Named glyph.
    #[serde(default)]
    pub react_icon: Option<String>,
    /// Glyph colour.
    #[serde(default)]
    pub react_icon_color: Option<String>,
    /// Renderer selector used inside custom modals.
    #[serde(default)]
    pub modal_slug: Option<String>,
    /// Thumbnail images.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub icon: Vec<Asset>,
    /// External link target.
    #[serde(default)]
    pub url: Option<String>,
    /// Nested leaf entries.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub sub_item: Vec<SubItem>,
}

impl Item {
    /// Display title, empty when unset.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// First thumbnail URL.
    pub fn thumb_url(&self) -> Option<&str> {
        first_url(&self.icon)
    }

    /// Non-empty external link target.
    pub fn link_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }

    /// Returns the modal slug or an empty string.
    pub fn slug(&self) -> &str {
        self.modal_slug.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Image payload attached to a [`SubItem`].
pub struct ContentItems {
    /// CMS component id.
    #[serde(default)]
    pub id: Option<String>,
    /// Full-size images.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub image: Vec<Asset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Leaf entry nested under an [`Item`].
pub struct SubItem {
    /// CMS component id.
    pub id: String,
    /// Caption.
    #[serde(default)]
    pub text: Option<String>,
    /// Full-size image payload.
    #[serde(default)]
    pub content_items: Option<ContentItems>,
    /// Renderer selector.
    #[serde(default)]
    pub modal_slug: Option<String>,
    /// Thumbnail / page images.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub image: Vec<Asset>,
}

impl SubItem {
    /// Caption, empty when unset.
    pub fn display_title(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Images from the content payload.
    pub fn content_images(&self) -> &[Asset] {
        self.content_items
            .as_ref()
            .map(|items| items.image.as_slice())
            .unwrap_or_default()
    }

    /// Image opened by the picture viewer: first content image, else first plain image.
    pub fn picture_url(&self) -> Option<&str> {
        first_url(self.content_images()).or_else(|| first_url(&self.image))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Full category tree returned by the folder query.
pub struct ContentTree {
    /// Categories in CMS order.
    pub categories: Vec<FolderCategory>,
}

impl ContentTree {
    /// Folders shown as desktop icons.
    pub fn desktop_folders(&self) -> &[Folder] {
        self.categories
            .iter()
            .find(|category| category.name == DESKTOP_CATEGORY)
            .map(|category| category.desktop_folders.as_slice())
            .unwrap_or_default()
    }

    /// The desktop folder that opens the file browser.
    pub fn finder_folder(&self) -> Option<&Folder> {
        self.desktop_folders().iter().find(|folder| folder.is_finder())
    }

    /// Items listed at the file browser root: every item of every desktop folder.
    pub fn finder_root_items(&self) -> Vec<Item> {
        self.desktop_folders()
            .iter()
            .flat_map(|folder| folder.items.iter().cloned())
            .collect()
    }

    /// Categories shown in the file browser sidebar.
    pub fn sidebar_categories(&self) -> impl Iterator<Item = &FolderCategory> {
        self.categories
            .iter()
            .filter(|category| category.name != DESKTOP_CATEGORY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Dock configuration.
pub struct DockContent {
    /// Pinned entries in display order.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub dock_item: Vec<DockItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Pinned dock entry.
pub struct DockItem {
    /// Tooltip / label.
    #[serde(default)]
    pub title: Option<String>,
    /// Named glyph.
    #[serde(default)]
    pub react_icon_name: Option<String>,
    /// External link target.
    #[serde(default)]
    pub url: Option<String>,
    /// Window slug this pin stands for.
    #[serde(default)]
    pub modal_slug: Option<String>,
    /// Glyph colour.
    #[serde(default)]
    pub react_icon_color: Option<String>,
    /// Icon images.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub icon: Vec<Asset>,
}

impl DockItem {
    /// First icon URL.
    pub fn icon_url(&self) -> Option<&str> {
        first_url(&self.icon)
    }

    /// Returns the modal slug or an empty string.
    pub fn slug(&self) -> &str {
        self.modal_slug.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Top menu bar content.
pub struct HeaderContent {
    /// Logo images.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub logo: Vec<Asset>,
    /// Dropdown menus.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub menus: Vec<Menu>,
    /// Social icons.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub social_links: Vec<SocialLink>,
}

impl HeaderContent {
    /// First logo URL.
    pub fn logo_url(&self) -> Option<&str> {
        first_url(&self.logo)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Dropdown menu in the header.
pub struct Menu {
    /// Trigger label.
    pub label: String,
    /// Entries.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub items: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Header dropdown entry.
pub struct MenuEntry {
    /// Label.
    pub text: String,
    /// Desktop window opened by the entry.
    #[serde(default)]
    pub modal_slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Social profile link.
pub struct SocialLink {
    /// Short network name (`github`, `x`, ...).
    pub icon_name: String,
    /// Profile URL.
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
/// Horizontal placement of a page section.
pub enum Placement {
    /// Left aligned.
    #[default]
    Start,
    /// Centered.
    Center,
    /// Right aligned.
    End,
    /// Spread across the row.
    Between,
}

impl From<String> for Placement {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "center" => Self::Center,
            "end" | "right" => Self::End,
            "between" => Self::Between,
            _ => Self::Start,
        }
    }
}

impl Placement {
    /// CSS `justify-content` value.
    pub const fn justify(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
            Self::Between => "space-between",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String")]
/// Heading tag selected by the CMS `textSize` field.
pub enum HeadingLevel {
    /// `<h1>`
    H1,
    /// `<h2>`
    #[default]
    H2,
    /// `<h3>`
    H3,
    /// `<h4>`
    H4,
    /// `<h5>`
    H5,
    /// `<h6>`
    H6,
}

impl From<String> for HeadingLevel {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "h1" => Self::H1,
            "h3" => Self::H3,
            "h4" => Self::H4,
            "h5" => Self::H5,
            "h6" => Self::H6,
            _ => Self::H2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Inline text run of a rich-text block.
pub struct RichTextSpan {
    /// Plain text.
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Paragraph-level rich-text node.
pub struct RichTextBlock {
    /// Inline runs.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub children: Vec<RichTextSpan>,
}

impl RichTextBlock {
    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.children.iter().map(|span| span.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
/// Page section, one variant per CMS component type.
pub enum Section {
    /// Starts a new background group.
    #[serde(rename = "ComponentSectionsSectionGroup", rename_all = "camelCase")]
    Group {
        /// Component id.
        id: String,
        /// Background colour for following sections.
        #[serde(default)]
        background_color: Option<String>,
    },
    /// Paragraph text.
    #[serde(rename = "ComponentSectionsRichTextSection", rename_all = "camelCase")]
    RichText {
        /// Component id.
        id: String,
        /// Paragraph blocks.
        #[serde(default, deserialize_with = "nullable_vec")]
        paragraph_text: Vec<RichTextBlock>,
        /// Section background.
        #[serde(default)]
        background_color: Option<String>,
        /// Alignment.
        #[serde(rename = "placementRich", default)]
        placement: Placement,
    },
    /// Heading line.
    #[serde(rename = "ComponentSectionsHeadingSection", rename_all = "camelCase")]
    Heading {
        /// Component id.
        id: String,
        /// Heading text.
        #[serde(default)]
        heading: String,
        /// Tag level.
        #[serde(default)]
        text_size: HeadingLevel,
        /// Text colour.
        #[serde(default)]
        color: Option<String>,
        /// Section background.
        #[serde(default)]
        background_color: Option<String>,
        /// Alignment.
        #[serde(rename = "placementHeading", default)]
        placement: Placement,
    },
    /// Single image.
    #[serde(rename = "ComponentSectionsImageSection", rename_all = "camelCase")]
    Image {
        /// Component id.
        id: String,
        /// Image asset.
        #[serde(default)]
        image: Option<Asset>,
        /// Rendered width in px.
        #[serde(default)]
        width: Option<u32>,
        /// Rendered height in px.
        #[serde(default)]
        height: Option<u32>,
        /// Section background.
        #[serde(default)]
        background_color: Option<String>,
        /// Alignment.
        #[serde(rename = "placementImage", default)]
        placement: Placement,
    },
    /// Image grid.
    #[serde(rename = "ComponentSectionsGallerySection", rename_all = "camelCase")]
    Gallery {
        /// Component id.
        id: String,
        /// Images.
        #[serde(default, deserialize_with = "nullable_vec")]
        images: Vec<Asset>,
        /// Grid columns, default 3.
        #[serde(default)]
        columns: Option<u32>,
        /// Grid rows.
        #[serde(default)]
        rows: Option<u32>,
        /// Gap in spacing units.
        #[serde(default)]
        gap: Option<u32>,
        /// Section background.
        #[serde(default)]
        background_color: Option<String>,
        /// Alignment.
        #[serde(rename = "placementGallery", default)]
        placement: Placement,
    },
    /// Component type this client does not render.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Rich-content page shown by the browser modal.
pub struct PageDocument {
    /// Window title.
    #[serde(default)]
    pub title: String,
    /// Default background.
    #[serde(default)]
    pub background_color: Option<String>,
    /// Default text colour.
    #[serde(default)]
    pub text_color: Option<String>,
    /// Sections in order.
    #[serde(default, deserialize_with = "nullable_vec")]
    pub content: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Run of consecutive sections sharing one background.
pub struct SectionGroup {
    /// Group background colour.
    pub background: Option<String>,
    /// Sections in the run (never [`Section::Group`]).
    pub sections: Vec<Section>,
}

impl PageDocument {
    /// Splits content into background groups; each [`Section::Group`] marker starts a new one.
    ///
    /// Empty runs are dropped, so a marker followed directly by another marker yields nothing.
    pub fn grouped_sections(&self) -> Vec<SectionGroup> {
        let mut groups = Vec::new();
        let mut background = self.background_color.clone();
        let mut current = Vec::new();

        for section in &self.content {
            match section {
                Section::Group {
                    background_color, ..
                } => {
                    if !current.is_empty() {
                        groups.push(SectionGroup {
                            background: background.clone(),
                            sections: std::mem::take(&mut current),
                        });
                    }
                    background = background_color.clone();
                }
                other => current.push(other.clone()),
            }
        }

        if !current.is_empty() {
            groups.push(SectionGroup {
                background,
                sections: current,
            });
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn folder_decodes_nullable_lists_and_aliases() {
        let folder: Folder = serde_json::from_value(json!({
            "documentId": "f1",
            "title": "Projects",
            "modalSlug": "openFolder",
            "icon": null,
            "items": [{
                "id": "7",
                "title": "Site",
                "url": "https://example.com",
                "subItem": null,
                "icon": [{ "url": "/uploads/site.png" }]
            }]
        }))
        .expect("decode folder");

        assert!(folder.is_finder());
        assert_eq!(folder.icon_url(), None);
        assert_eq!(folder.items[0].link_url(), Some("https://example.com"));
        assert_eq!(folder.items[0].thumb_url(), Some("/uploads/site.png"));
        assert!(folder.items[0].sub_item.is_empty());
    }

    #[test]
    fn sub_item_prefers_content_image_for_picture() {
        let sub: SubItem = serde_json::from_value(json!({
            "id": "s1",
            "text": "Jacket",
            "contentItems": { "id": "c", "image": [{ "url": "/full.png" }] },
            "image": [{ "url": "/thumb.png" }]
        }))
        .expect("decode");
        assert_eq!(sub.picture_url(), Some("/full.png"));

        let plain: SubItem = serde_json::from_value(json!({
            "id": "s2",
            "image": [{ "url": "/page.png" }]
        }))
        .expect("decode");
        assert_eq!(plain.picture_url(), Some("/page.png"));
    }

    #[test]
    fn content_tree_splits_desktop_and_sidebar_categories() {
        let tree = ContentTree {
            categories: vec![
                FolderCategory {
                    document_id: "c1".into(),
                    name: "Desktop".into(),
                    desktop_folders: vec![
                        serde_json::from_value(json!({
                            "documentId": "finder", "title": "Finder", "modalSlug": "openFolder",
                            "items": [{ "id": "a" }]
                        }))
                        .unwrap(),
                        serde_json::from_value(json!({
                            "documentId": "cv", "title": "Resume.exe", "modalSlug": "resumeModal",
                            "items": [{ "id": "b" }]
                        }))
                        .unwrap(),
                    ],
                },
                FolderCategory {
                    document_id: "c2".into(),
                    name: "Favorites".into(),
                    desktop_folders: Vec::new(),
                },
            ],
        };

        assert_eq!(
            tree.finder_folder().map(|f| f.document_id.as_str()),
            Some("finder")
        );
        let root_ids: Vec<_> = tree.finder_root_items().into_iter().map(|i| i.id).collect();
        assert_eq!(root_ids, vec!["a".to_string(), "b".to_string()]);
        let sidebar: Vec<_> = tree.sidebar_categories().map(|c| c.name.as_str()).collect();
        assert_eq!(sidebar, vec!["Favorites"]);
    }

    #[test]
    fn sections_decode_by_typename_with_placement_aliases() {
        let page: PageDocument = serde_json::from_value(json!({
            "title": "Shop",
            "backgroundColor": "#fff",
            "content": [
                { "__typename": "ComponentSectionsHeadingSection", "id": "1",
                  "heading": "Hello", "textSize": "h1", "placementHeading": "center" },
                { "__typename": "ComponentSectionsRichTextSection", "id": "2",
                  "paragraphText": [{ "type": "paragraph", "children": [{ "text": "a" }, { "text": "b" }] }] },
                { "__typename": "ComponentSectionsVideoSection", "id": "3" }
            ]
        }))
        .expect("decode page");

        match &page.content[0] {
            Section::Heading {
                text_size,
                placement,
                ..
            } => {
                assert_eq!(*text_size, HeadingLevel::H1);
                assert_eq!(*placement, Placement::Center);
            }
            other => panic!("unexpected section {other:?}"),
        }
        match &page.content[1] {
            Section::RichText {
                paragraph_text,
                placement,
                ..
            } => {
                assert_eq!(paragraph_text[0].text(), "ab");
                assert_eq!(*placement, Placement::Start);
            }
            other => panic!("unexpected section {other:?}"),
        }
        assert_eq!(page.content[2], Section::Unsupported);
    }

    #[test]
    fn grouped_sections_split_on_group_markers() {
        let heading = |id: &str| Section::Heading {
            id: id.into(),
            heading: id.into(),
            text_size: HeadingLevel::H2,
            color: None,
            background_color: None,
            placement: Placement::Start,
        };
        let page = PageDocument {
            title: "p".into(),
            background_color: Some("white".into()),
            text_color: None,
            content: vec![
                heading("a"),
                Section::Group {
                    id: "g1".into(),
                    background_color: Some("black".into()),
                },
                Section::Group {
                    id: "g2".into(),
                    background_color: Some("red".into()),
                },
                heading("b"),
                heading("c"),
            ],
        };

        let groups = page.grouped_sections();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].background.as_deref(), Some("white"));
        assert_eq!(groups[0].sections, vec![heading("a")]);
        assert_eq!(groups[1].background.as_deref(), Some("red"));
        assert_eq!(groups[1].sections, vec![heading("b"), heading("c")]);
    }

    #[test]
    fn menu_entries_decode_the_header_selection() {
        let header: HeaderContent = serde_json::from_value(json!({
            "logo": null,
            "menus": [{
                "label": "Go",
                "items": [
                    {"text": "About", "modalSlug": "resumeModal"},
                    {"text": "Soon", "modalSlug": null}
                ]
            }],
            "socialLinks": [{"iconName": "github", "url": "https://github.com/x"}]
        }))
        .expect("decode header");

        assert_eq!(
            header.menus[0].items,
            vec![
                MenuEntry {
                    text: "About".into(),
                    modal_slug: Some("resumeModal".into()),
                },
                MenuEntry {
                    text: "Soon".into(),
                    modal_slug: None,
                },
            ]
        );
        assert_eq!(header.logo_url(), None);
        assert_eq!(header.social_links[0].icon_name, "github");
    }
}
