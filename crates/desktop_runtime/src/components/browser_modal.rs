use desktop_host::{Folder, HeadingLevel, PageDocument, Placement, Section, SectionGroup};

use super::{custom_modals::ModalChrome, *};

/// Address shown in the read-only URL bar.
const BROWSER_ADDRESS: &str = "www.scalemail.com";
const DEFAULT_GALLERY_COLUMNS: u32 = 3;
const GALLERY_GAP_UNIT_PX: u32 = 4;

fn row_style(placement: Placement, background: Option<&str>) -> String {
    let mut style = format!("display:flex;justify-content:{};", placement.justify());
    if let Some(background) = background {
        style.push_str(&format!("background-color:{background};"));
    }
    style
}

#[component]
pub(super) fn BrowserModal(folder: Folder) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let logo = header_logo(runtime);

    let page = {
        let client = runtime.content();
        create_local_resource(
            || (),
            move |_| {
                let client = client.clone();
                async move { client.browser_page().await }
            },
        )
    };

    view! {
        <ModalChrome folder variant="browser" logo>
            <div class="browser-url-bar">
                <button type="button" class="browser-nav" aria-label="Back">"←"</button>
                <button type="button" class="browser-nav" aria-label="Forward">"→"</button>
                <input type="text" class="browser-address" readonly=true value=BROWSER_ADDRESS />
            </div>
            {move || match page.get() {
                None => ().into_view(),
                Some(Err(err)) => view! {
                    <p class="browser-error">{format!("Error loading page: {err}")}</p>
                }
                .into_view(),
                Some(Ok(None)) => view! {
                    <p class="browser-error">"No browser modal data returned."</p>
                }
                .into_view(),
                Some(Ok(Some(document))) => view! { <BrowserPage document /> }.into_view(),
            }}
        </ModalChrome>
    }
}

#[component]
fn BrowserPage(document: PageDocument) -> impl IntoView {
    let mut style = String::new();
    if let Some(background) = &document.background_color {
        style.push_str(&format!("background-color:{background};"));
    }
    if let Some(color) = &document.text_color {
        style.push_str(&format!("color:{color};"));
    }

    view! {
        <article class="browser-page" style=style>
            {document
                .grouped_sections()
                .into_iter()
                .map(|group| view! { <SectionRun group /> })
                .collect_view()}
        </article>
    }
}

#[component]
fn SectionRun(group: SectionGroup) -> impl IntoView {
    let style = group
        .background
        .as_ref()
        .map(|background| format!("background-color:{background};"));

    view! {
        <div class="browser-section-group" style=style>
            {group
                .sections
                .into_iter()
                .map(|section| view! { <PageSection section /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn PageSection(section: Section) -> impl IntoView {
    let runtime = use_desktop_runtime();

    match section {
        Section::Heading {
            heading,
            text_size,
            color,
            placement,
            background_color,
            ..
        } => {
            let text_style = color.map(|color| format!("color:{color};"));
            let heading = match text_size {
                HeadingLevel::H1 => view! { <h1 style=text_style>{heading}</h1> }.into_view(),
                HeadingLevel::H2 => view! { <h2 style=text_style>{heading}</h2> }.into_view(),
                HeadingLevel::H3 => view! { <h3 style=text_style>{heading}</h3> }.into_view(),
                HeadingLevel::H4 => view! { <h4 style=text_style>{heading}</h4> }.into_view(),
                HeadingLevel::H5 => view! { <h5 style=text_style>{heading}</h5> }.into_view(),
                HeadingLevel::H6 => view! { <h6 style=text_style>{heading}</h6> }.into_view(),
            };
            view! {
                <div class="browser-heading" style=row_style(placement, background_color.as_deref())>
                    {heading}
                </div>
            }
            .into_view()
        }
        Section::RichText {
            paragraph_text,
            background_color,
            placement,
            ..
        } => view! {
            <div class="browser-rich-text" style=row_style(placement, background_color.as_deref())>
                <div class="prose">
                    {paragraph_text
                        .iter()
                        .map(|block| view! { <p>{block.text()}</p> })
                        .collect_view()}
                </div>
            </div>
        }
        .into_view(),
        Section::Image {
            image: Some(image),
            width,
            height,
            background_color,
            placement,
            ..
        } => view! {
            <div class="browser-image" style=row_style(placement, background_color.as_deref())>
                <img
                    src=runtime.asset_url(&image.url)
                    width=width.map(|width| width.to_string())
                    height=height.map(|height| height.to_string())
                    alt=""
                />
            </div>
        }
        .into_view(),
        Section::Gallery {
            images,
            columns,
            rows,
            gap,
            background_color,
            placement,
            ..
        } => {
            let mut grid = format!(
                "display:grid;grid-template-columns:repeat({},minmax(0,1fr));gap:{}px;",
                columns.unwrap_or(DEFAULT_GALLERY_COLUMNS).max(1),
                gap.unwrap_or_default() * GALLERY_GAP_UNIT_PX
            );
            if let Some(rows) = rows {
                grid.push_str(&format!("grid-template-rows:repeat({rows},auto);"));
            }
            if let Some(background) = &background_color {
                grid.push_str(&format!("background-color:{background};"));
            }
            view! {
                <div class="browser-gallery" style=row_style(placement, None)>
                    <div class="browser-gallery-grid" style=grid>
                        {images
                            .iter()
                            .map(|image| {
                                view! {
                                    <img src=runtime.asset_url(&image.url) width="300" height="200" alt="" loading="lazy" />
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
            .into_view()
        }
        Section::Image { image: None, .. } | Section::Group { .. } | Section::Unsupported => {
            ().into_view()
        }
    }
}
