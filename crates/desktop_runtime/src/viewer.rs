//! Image carousel and splash helpers shared by the custom modals.

use desktop_host::{AssetOrigin, Folder, Item};

/// Splash progress added per tick.
pub const SPLASH_STEP: u8 = 2;
/// Splash tick interval in milliseconds.
pub const SPLASH_TICK_MS: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Wrap-around position over `len` images.
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    /// Carousel at the first of `len` images.
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Carousel opened at `index`, clamped into range.
    pub fn at(len: usize, index: usize) -> Self {
        Self {
            len,
            index: if len == 0 { 0 } else { index.min(len - 1) },
        }
    }

    /// Current index; `None` when empty.
    pub fn index(self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Number of images.
    pub fn len(self) -> usize {
        self.len
    }

    /// Whether there is nothing to show.
    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Previous image, wrapping to the last.
    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Next image, wrapping to the first.
    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    /// `Page N / M` label.
    pub fn page_label(self) -> String {
        format!("Page {} / {}", self.index + 1, self.len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Keyboard command inside a carousel.
pub enum CarouselKey {
    /// `ArrowLeft`.
    Prev,
    /// `ArrowRight`.
    Next,
    /// `Escape`.
    Close,
}

impl CarouselKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Gallery tile in the design modal.
pub struct GalleryImage {
    /// Resolved image URL.
    pub src: String,
    /// Caption.
    pub caption: String,
}

/// Content images of every sub-item of `item`, in order.
pub fn design_images(item: &Item, assets: &AssetOrigin) -> Vec<GalleryImage> {
    item.sub_item
        .iter()
        .flat_map(|sub| {
            sub.content_images().iter().map(move |image| GalleryImage {
                src: assets.resolve(&image.url),
                caption: sub.display_title().to_string(),
            })
        })
        .collect()
}

/// Résumé pages: every sub-item `image` of every item, skipping empty URLs.
pub fn resume_pages(folder: &Folder, assets: &AssetOrigin) -> Vec<String> {
    folder
        .items
        .iter()
        .flat_map(|item| item.sub_item.iter())
        .flat_map(|sub| sub.image.iter())
        .filter(|image| !image.url.is_empty())
        .map(|image| assets.resolve(&image.url))
        .collect()
}

/// Next splash progress value, saturating at 100.
pub fn advance_splash(progress: u8) -> u8 {
    progress.saturating_add(SPLASH_STEP).min(100)
}

#[cfg(test)]
mod tests {
    use desktop_host::{Asset, ContentItems, FolderId, SubItem};
    use pretty_assertions::assert_eq;

    use super::*;

    fn sub(id: &str, content: &[&str], image: &[&str]) -> SubItem {
        let assets = |urls: &[&str]| {
            urls.iter()
                .map(|url| Asset {
                    url: url.to_string(),
                })
                .collect::<Vec<_>>()
        };
        SubItem {
            id: id.into(),
            text: Some(format!("caption {id}")),
            content_items: Some(ContentItems {
                id: None,
                image: assets(content),
            }),
            modal_slug: None,
            image: assets(image),
        }
    }

    fn item(subs: Vec<SubItem>) -> Item {
        Item {
            id: "i".into(),
            title: None,
            react_icon: None,
            react_icon_color: None,
            modal_slug: None,
            icon: Vec::new(),
            url: None,
            sub_item: subs,
        }
    }

    #[test]
    fn carousel_wraps_both_ways() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.prev().index(), Some(2));
        assert_eq!(carousel.next().next().next().index(), Some(0));
        assert_eq!(carousel.next().page_label(), "Page 2 / 3");
        assert_eq!(Carousel::at(3, 9).index(), Some(2));
    }

    #[test]
    fn empty_carousel_ignores_navigation() {
        let carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.next(), carousel);
        assert_eq!(carousel.prev(), carousel);
        assert_eq!(carousel.index(), None);
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(CarouselKey::from_key("ArrowLeft"), Some(CarouselKey::Prev));
        assert_eq!(CarouselKey::from_key("ArrowRight"), Some(CarouselKey::Next));
        assert_eq!(CarouselKey::from_key("Escape"), Some(CarouselKey::Close));
        assert_eq!(CarouselKey::from_key("Enter"), None);
    }

    #[test]
    fn design_images_flatten_content_images_with_captions() {
        let origin = AssetOrigin::new("https://cms.test/");
        let images = design_images(
            &item(vec![sub("a", &["/1.png", "https://cdn/2.png"], &[]), sub("b", &[], &["/t.png"])]),
            &origin,
        );
        assert_eq!(
            images,
            vec![
                GalleryImage {
                    src: "https://cms.test/1.png".into(),
                    caption: "caption a".into()
                },
                GalleryImage {
                    src: "https://cdn/2.png".into(),
                    caption: "caption a".into()
                },
            ]
        );
    }

    #[test]
    fn resume_pages_collect_sub_item_images() {
        let folder = Folder {
            document_id: FolderId("cv".into()),
            uuid: None,
            title: "Resume".into(),
            modal_slug: Some("resumeModal".into()),
            icon: Vec::new(),
            react_icon: None,
            react_icon_color: None,
            items: vec![
                item(vec![sub("p1", &[], &["/p1.png", ""])]),
                item(vec![sub("p2", &["/ignored.png"], &["/p2.png"])]),
            ],
        };
        assert_eq!(
            resume_pages(&folder, &AssetOrigin::new("http://localhost:1337")),
            vec![
                "http://localhost:1337/p1.png".to_string(),
                "http://localhost:1337/p2.png".to_string()
            ]
        );
    }

    #[test]
    fn splash_advances_by_two_and_stops_at_hundred() {
        assert_eq!(advance_splash(0), 2);
        assert_eq!(advance_splash(98), 100);
        assert_eq!(advance_splash(100), 100);
    }
}
