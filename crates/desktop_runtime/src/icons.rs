//! Glyph catalog for CMS icon names.
//!
//! The CMS stores icon names from several icon families (`FaGithub`, `SiGraphql`, ...). They are
//! resolved through one explicit table; unknown names fall back to a caller-chosen glyph.

use leptos::*;

/// Colour used for glyphs without a CMS colour.
pub const DEFAULT_ICON_COLOR: &str = "#7DD3FC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Glyphs the desktop can draw.
pub enum IconName {
    /// Closed folder.
    Folder,
    /// Open folder.
    FolderOpen,
    /// Plain document.
    File,
    /// Unknown entry.
    Question,
    /// Hyperlink.
    Link,
    /// GitHub mark.
    Github,
    /// LinkedIn mark.
    Linkedin,
    /// X (Twitter) mark.
    XTwitter,
    /// Instagram mark.
    Instagram,
    /// Facebook mark.
    Facebook,
    /// YouTube mark.
    Youtube,
    /// Mail envelope.
    Envelope,
    /// Globe.
    Globe,
    /// Angle brackets.
    Code,
    /// GraphQL mark.
    Graphql,
    /// Picture.
    Image,
    /// Briefcase.
    Briefcase,
    /// Left chevron.
    ChevronLeft,
    /// Right chevron.
    ChevronRight,
    /// Close cross.
    Dismiss,
    /// Download arrow.
    Download,
}

impl IconName {
    /// Looks up a CMS icon name.
    pub fn from_cms_name(name: &str) -> Option<Self> {
        let icon = match name.trim() {
            "FaFolder" | "IoFolder" => Self::Folder,
            "FaFolderOpen" | "IoFolderOpen" => Self::FolderOpen,
            "FaRegFile" | "FaFile" | "FaFileAlt" | "FaFilePdf" | "IoDocument" => Self::File,
            "FaQuestion" | "FaQuestionCircle" => Self::Question,
            "FaLink" | "IoLink" => Self::Link,
            "FaGithub" | "FaGithubAlt" | "SiGithub" => Self::Github,
            "FaLinkedin" | "FaLinkedinIn" | "SiLinkedin" => Self::Linkedin,
            "FaXTwitter" | "FaTwitter" | "SiX" => Self::XTwitter,
            "FaInstagram" | "SiInstagram" => Self::Instagram,
            "FaFacebook" | "FaFacebookF" | "SiFacebook" => Self::Facebook,
            "FaYoutube" | "SiYoutube" => Self::Youtube,
            "FaEnvelope" | "IoMail" | "ImMail" => Self::Envelope,
            "FaGlobe" | "IoGlobeOutline" | "GiWorld" => Self::Globe,
            "FaCode" | "IoCode" | "ImEmbed" => Self::Code,
            "SiGraphql" => Self::Graphql,
            "FaImage" | "FaImages" | "IoImage" | "ImImages" => Self::Image,
            "FaBriefcase" | "IoBriefcase" => Self::Briefcase,
            "FaChevronLeft" => Self::ChevronLeft,
            "FaChevronRight" => Self::ChevronRight,
            "FaTimes" | "IoClose" => Self::Dismiss,
            "FaDownload" => Self::Download,
            _ => return None,
        };
        Some(icon)
    }

    /// Resolves an optional CMS name, using `fallback` when absent or unknown.
    pub fn resolve(name: Option<&str>, fallback: Self) -> Self {
        name.and_then(Self::from_cms_name).unwrap_or(fallback)
    }

    /// Glyph for a social network short name.
    ///
    /// `x` is the X/Twitter mark; anything else is looked up as `Fa` + capitalized name.
    pub fn for_social(network: &str) -> Self {
        let network = network.trim();
        if network.eq_ignore_ascii_case("x") {
            return Self::XTwitter;
        }
        let mut chars = network.chars();
        let capitalized = match chars.next() {
            Some(first) => format!("Fa{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => return Self::Link,
        };
        Self::from_cms_name(&capitalized).unwrap_or(Self::Link)
    }

    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::FolderOpen => "folder-open",
            Self::File => "file",
            Self::Question => "question",
            Self::Link => "link",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::XTwitter => "x-twitter",
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Youtube => "youtube",
            Self::Envelope => "envelope",
            Self::Globe => "globe",
            Self::Code => "code",
            Self::Graphql => "graphql",
            Self::Image => "image",
            Self::Briefcase => "briefcase",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::Dismiss => "dismiss",
            Self::Download => "download",
        }
    }

    /// SVG body markup on a 24px grid.
    fn svg_body(self) -> &'static str {
        match self {
            Self::Folder => {
                r#"<path d="M3 6.25C3 5.01 4 4 5.25 4h3.69c.6 0 1.17.24 1.59.66L12.12 6.25h6.63C19.99 6.25 21 7.26 21 8.5v9.25c0 1.24-1 2.25-2.25 2.25H5.25C4.01 20 3 19 3 17.75V6.25Z"/>"#
            }
            Self::FolderOpen => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Z"/>"#
            }
            Self::File => {
                r#"<path d="M6 2h7.17c.53 0 1.04.21 1.42.59l4.82 4.82c.38.38.59.89.59 1.42V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2Zm7 1.5V8a1 1 0 0 0 1 1h4.5L13 3.5Z"/>"#
            }
            Self::Question => {
                r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 14.5a1.1 1.1 0 1 0 0 2.2 1.1 1.1 0 0 0 0-2.2Zm0-10.25a3.5 3.5 0 0 0-3.5 3.5.9.9 0 0 0 1.8 0 1.7 1.7 0 1 1 2.55 1.47c-.92.53-1.75 1.24-1.75 2.53v.5a.9.9 0 0 0 1.8 0v-.5c0-.33.22-.6.85-.97A3.5 3.5 0 0 0 12 6.25Z"/>"#
            }
            Self::Link => {
                r#"<path d="M9.5 7H7a5 5 0 0 0 0 10h2.5v-1.8H7a3.2 3.2 0 0 1 0-6.4h2.5V7Zm5 0v1.8H17a3.2 3.2 0 0 1 0 6.4h-2.5V17H17a5 5 0 0 0 0-10h-2.5ZM8 11.1h8v1.8H8v-1.8Z"/>"#
            }
            Self::Github => {
                r#"<path d="M12 2a10 10 0 0 0-3.16 19.49c.5.09.68-.22.68-.48v-1.7c-2.78.6-3.37-1.34-3.37-1.34-.45-1.16-1.11-1.47-1.11-1.47-.91-.62.07-.61.07-.61 1 .07 1.53 1.03 1.53 1.03.9 1.52 2.34 1.08 2.91.83.09-.65.35-1.09.63-1.34-2.22-.25-4.56-1.11-4.56-4.94 0-1.09.39-1.98 1.03-2.68-.1-.25-.45-1.27.1-2.65 0 0 .84-.27 2.75 1.02a9.5 9.5 0 0 1 5 0c1.91-1.3 2.75-1.02 2.75-1.02.55 1.38.2 2.4.1 2.65.64.7 1.03 1.59 1.03 2.68 0 3.84-2.34 4.69-4.57 4.93.36.31.68.92.68 1.85V21c0 .27.18.58.69.48A10 10 0 0 0 12 2Z"/>"#
            }
            Self::Linkedin => {
                r#"<path d="M4.5 3h15c.83 0 1.5.67 1.5 1.5v15c0 .83-.67 1.5-1.5 1.5h-15c-.83 0-1.5-.67-1.5-1.5v-15C3 3.67 3.67 3 4.5 3Zm2 7v8h2.6v-8H6.5Zm1.3-4.1a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3ZM11 10v8h2.6v-4.2c0-1.1.4-1.9 1.5-1.9s1.3.9 1.3 2V18H19v-4.7c0-2.3-1.1-3.5-3-3.5-1.1 0-1.9.5-2.4 1.2V10H11Z"/>"#
            }
            Self::XTwitter => {
                r#"<path d="M17.75 3h3.07l-6.7 7.66L22 21h-6.17l-4.83-6.32L5.47 21H2.4l7.17-8.2L2 3h6.33l4.37 5.77L17.75 3Zm-1.08 16.2h1.7L7.4 4.73H5.58l11.1 14.47Z"/>"#
            }
            Self::Instagram => {
                r#"<path d="M7.5 2h9A5.5 5.5 0 0 1 22 7.5v9a5.5 5.5 0 0 1-5.5 5.5h-9A5.5 5.5 0 0 1 2 16.5v-9A5.5 5.5 0 0 1 7.5 2Zm0 1.8A3.7 3.7 0 0 0 3.8 7.5v9a3.7 3.7 0 0 0 3.7 3.7h9a3.7 3.7 0 0 0 3.7-3.7v-9a3.7 3.7 0 0 0-3.7-3.7h-9ZM12 7a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.8a3.2 3.2 0 1 0 0 6.4 3.2 3.2 0 0 0 0-6.4Zm5.3-3.3a1.2 1.2 0 1 1 0 2.4 1.2 1.2 0 0 1 0-2.4Z"/>"#
            }
            Self::Facebook => {
                r#"<path d="M13.5 22v-8.2h2.77l.41-3.2H13.5V8.56c0-.93.26-1.56 1.6-1.56h1.7V4.14A22.8 22.8 0 0 0 14.32 4c-2.46 0-4.14 1.5-4.14 4.25v2.36H7.4v3.2h2.78V22h3.32Z"/>"#
            }
            Self::Youtube => {
                r#"<path d="M21.58 7.19a2.5 2.5 0 0 0-1.77-1.77C18.25 5 12 5 12 5s-6.25 0-7.81.42a2.5 2.5 0 0 0-1.77 1.77C2 8.75 2 12 2 12s0 3.25.42 4.81a2.5 2.5 0 0 0 1.77 1.77C5.75 19 12 19 12 19s6.25 0 7.81-.42a2.5 2.5 0 0 0 1.77-1.77C22 15.25 22 12 22 12s0-3.25-.42-4.81ZM10 15V9l5.2 3-5.2 3Z"/>"#
            }
            Self::Envelope => {
                r#"<path d="M4 5h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V7c0-1.1.9-2 2-2Zm0 1.8a.2.2 0 0 0-.2.2v.35L12 12.5l8.2-5.15V7a.2.2 0 0 0-.2-.2H4Zm16.2 2.67-7.72 4.85a.9.9 0 0 1-.96 0L3.8 9.47V17c0 .11.09.2.2.2h16a.2.2 0 0 0 .2-.2V9.47Z"/>"#
            }
            Self::Globe => {
                r#"<path d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm2.9 10.9H9.1c.14 2.64.86 4.94 2.9 6.9 2.04-1.96 2.76-4.26 2.9-6.9Zm-7.6 0H3.85a8.2 8.2 0 0 0 5.7 6.9 11.7 11.7 0 0 1-2.25-6.9Zm12.85 0H16.7a11.7 11.7 0 0 1-2.25 6.9 8.2 8.2 0 0 0 5.7-6.9ZM9.55 4.2a8.2 8.2 0 0 0-5.7 6.9H7.3c.1-2.52.83-4.86 2.25-6.9Zm2.45.1c-2.04 1.96-2.76 4.16-2.9 6.8h5.8c-.14-2.64-.86-4.84-2.9-6.8Zm2.45-.1a11.7 11.7 0 0 1 2.25 6.9h3.45a8.2 8.2 0 0 0-5.7-6.9Z"/>"#
            }
            Self::Code => {
                r#"<path d="M8.7 6.3a.9.9 0 0 1 0 1.27L4.27 12l4.43 4.43a.9.9 0 1 1-1.27 1.27l-5.07-5.06a.9.9 0 0 1 0-1.28L7.43 6.3a.9.9 0 0 1 1.27 0Zm6.6 0a.9.9 0 0 1 1.27 0l5.07 5.06a.9.9 0 0 1 0 1.28l-5.07 5.06a.9.9 0 0 1-1.27-1.27L19.73 12 15.3 7.57a.9.9 0 0 1 0-1.27Z"/>"#
            }
            Self::Graphql => {
                r#"<path d="M12 2.2 20.5 7.1v9.8L12 21.8l-8.5-4.9V7.1L12 2.2Zm0 2.08L6.27 14.2h11.46L12 4.28Zm-1.33-.2-5.37 3.1v6.2l5.37-9.3Zm2.66 0 5.37 9.3v-6.2l-5.37-3.1Zm4.3 11.92H6.37L12 19.25 17.63 16ZM12 1a1.6 1.6 0 1 1 0 3.2A1.6 1.6 0 0 1 12 1Zm0 18.8a1.6 1.6 0 1 1 0 3.2 1.6 1.6 0 0 1 0-3.2Z"/>"#
            }
            Self::Image => {
                r#"<path d="M5.25 3h13.5C19.99 3 21 4 21 5.25v13.5c0 1.24-1 2.25-2.25 2.25H5.25C4.01 21 3 20 3 18.75V5.25C3 4.01 4 3 5.25 3Zm0 1.8a.45.45 0 0 0-.45.45v10.9l3.68-3.68a1.5 1.5 0 0 1 2.12 0l1.15 1.15 3.4-3.4a1.5 1.5 0 0 1 2.12 0l1.93 1.93V5.25a.45.45 0 0 0-.45-.45H5.25ZM8.5 6.5a2 2 0 1 1 0 4 2 2 0 0 1 0-4Z"/>"#
            }
            Self::Briefcase => {
                r#"<path d="M9.25 3h5.5c.97 0 1.75.78 1.75 1.75V6h2.75C20.99 6 22 7 22 8.25v9.5c0 1.24-1 2.25-2.25 2.25H4.25C3.01 20 2 19 2 17.75v-9.5C2 7.01 3 6 4.25 6H7V4.75C7 3.78 7.78 3 8.75 3h.5Zm5.45 1.8H9.3a.5.5 0 0 0-.5.5V6h6.4v-.7a.5.5 0 0 0-.5-.5Z"/>"#
            }
            Self::ChevronLeft => {
                r#"<path d="M15.53 4.22c.3.3.3.77 0 1.06L8.81 12l6.72 6.72a.75.75 0 1 1-1.06 1.06l-7.25-7.25a.75.75 0 0 1 0-1.06l7.25-7.25c.3-.3.77-.3 1.06 0Z"/>"#
            }
            Self::ChevronRight => {
                r#"<path d="M8.47 4.22c.3-.3.77-.3 1.06 0l7.25 7.25c.3.3.3.77 0 1.06l-7.25 7.25a.75.75 0 0 1-1.06-1.06L15.19 12 8.47 5.28a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="M4.47 4.47c.3-.3.77-.3 1.06 0L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47a.75.75 0 1 1-1.06 1.06L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::Download => {
                r#"<path d="M12 3c.41 0 .75.34.75.75v10.69l3.47-3.47a.75.75 0 1 1 1.06 1.06l-4.75 4.75c-.3.3-.77.3-1.06 0l-4.75-4.75a.75.75 0 1 1 1.06-1.06l3.47 3.47V3.75c0-.41.34-.75.75-.75ZM4.75 19.5h14.5a.75.75 0 0 1 0 1.5H4.75a.75.75 0 0 1 0-1.5Z"/>"#
            }
        }
    }
}

#[component]
/// Draws a catalog glyph.
pub fn Glyph(
    /// Glyph to draw.
    icon: IconName,
    /// Pixel size.
    #[prop(default = 24)]
    size: u16,
    /// Fill colour; defaults to the current text colour.
    #[prop(optional, into)]
    color: Option<String>,
) -> impl IntoView {
    let size_px = size.to_string();
    let style = color.map(|color| format!("color:{color};"));

    view! {
        <svg
            class="glyph"
            data-icon=icon.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            style=style
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

#[component]
/// CMS icon: the uploaded image when there is one, otherwise the named glyph.
pub fn CmsIcon(
    /// Resolved image URL.
    #[prop(optional_no_strip)]
    image_url: Option<String>,
    /// CMS glyph name.
    #[prop(optional_no_strip)]
    glyph: Option<String>,
    /// CMS glyph colour.
    #[prop(optional_no_strip)]
    color: Option<String>,
    /// Glyph used for missing or unknown names.
    fallback: IconName,
    /// Accessible label for the image.
    #[prop(optional, into)]
    alt: String,
    /// Pixel size.
    #[prop(default = 48)]
    size: u16,
) -> impl IntoView {
    match image_url {
        Some(url) => view! {
            <img
                class="cms-icon-image"
                src=url
                alt=alt
                width=size.to_string()
                height=size.to_string()
                draggable="false"
            />
        }
        .into_view(),
        None => {
            let icon = IconName::resolve(glyph.as_deref(), fallback);
            let color = color.unwrap_or_else(|| DEFAULT_ICON_COLOR.to_string());
            view! { <Glyph icon size color /> }.into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cms_names_resolve_across_families() {
        assert_eq!(IconName::from_cms_name("FaGithub"), Some(IconName::Github));
        assert_eq!(IconName::from_cms_name("SiGraphql"), Some(IconName::Graphql));
        assert_eq!(IconName::from_cms_name("IoFolderOpen"), Some(IconName::FolderOpen));
        assert_eq!(IconName::from_cms_name("GiDragonHead"), None);
    }

    #[test]
    fn resolve_uses_caller_fallback() {
        assert_eq!(IconName::resolve(None, IconName::Folder), IconName::Folder);
        assert_eq!(
            IconName::resolve(Some("NoSuchIcon"), IconName::Question),
            IconName::Question
        );
        assert_eq!(
            IconName::resolve(Some("FaLinkedin"), IconName::Question),
            IconName::Linkedin
        );
    }

    #[test]
    fn social_names_capitalize_into_fa_lookup() {
        assert_eq!(IconName::for_social("x"), IconName::XTwitter);
        assert_eq!(IconName::for_social("github"), IconName::Github);
        assert_eq!(IconName::for_social("instagram"), IconName::Instagram);
        assert_eq!(IconName::for_social("mastodon"), IconName::Link);
        assert_eq!(IconName::for_social(""), IconName::Link);
    }
}
