use std::time::Duration;

use desktop_host::{Folder, Item, IMAGE_FOLDER_SLUG, PICTURE_SLUG};
use leptos::leptos_dom::helpers::IntervalHandle;

use super::*;
use crate::{
    icons::{CmsIcon, Glyph, IconName},
    modals::missing_modal_message,
    model::PictureState,
    viewer::{
        advance_splash, design_images, resume_pages, Carousel, CarouselKey, SPLASH_TICK_MS,
    },
};

#[component]
pub(super) fn ModalChrome(
    folder: Folder,
    /// Extra class on the window panel.
    variant: &'static str,
    /// Logo shown in the title bar.
    #[prop(optional)]
    logo: Option<Resource<(), Option<String>>>,
    children: Children,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let fullscreen = create_memo(move |_| runtime.state.with(|desktop| desktop.windows.fullscreen));
    let title = folder.title.clone();

    view! {
        <div
            class="window-backdrop"
            on:click=move |_| runtime.dispatch_action(DesktopAction::CloseWindow)
        >
            <section
                class=format!("modal-window {variant}")
                class:fullscreen=move || fullscreen.get()
                role="dialog"
                aria-label=title.clone()
                on:click=|ev| ev.stop_propagation()
            >
                <header class="titlebar">
                    <div class="traffic-lights">
                        <button
                            type="button"
                            class="traffic-light close"
                            aria-label="Close"
                            on:click=move |_| runtime.dispatch_action(DesktopAction::CloseWindow)
                        ></button>
                        <button
                            type="button"
                            class="traffic-light minimize"
                            aria-label="Minimize"
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::MinimizeWindow(Some(folder.clone())))
                            }
                        ></button>
                        <button
                            type="button"
                            class="traffic-light fullscreen"
                            aria-label="Toggle fullscreen"
                            on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleFullscreen)
                        ></button>
                    </div>
                    {move || {
                        logo.and_then(|logo| logo.get().flatten())
                            .map(|src| view! { <img class="titlebar-logo" src=src alt="" /> })
                    }}
                    <h2 class="titlebar-title">{title}</h2>
                </header>
                <div class="modal-body">{children()}</div>
            </section>
        </div>
    }
}

#[component]
pub(super) fn GarmentDesignModal(folder: Folder) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let logo = header_logo(runtime);

    let warmed = runtime
        .state
        .with_untracked(|desktop| desktop.windows.warmed.contains(&folder.document_id));
    let splash = create_rw_signal(if warmed { 100_u8 } else { 0 });
    if !warmed {
        let ticker = store_value(None::<IntervalHandle>);
        if let Ok(interval) = set_interval_with_handle(
            move || {
                splash.update(|progress| *progress = advance_splash(*progress));
                if splash.get_untracked() >= 100 {
                    if let Some(interval) = ticker.get_value() {
                        interval.clear();
                    }
                }
            },
            Duration::from_millis(SPLASH_TICK_MS),
        ) {
            ticker.set_value(Some(interval));
            on_cleanup(move || interval.clear());
        }
    }

    let items = folder.items.clone();
    let active = create_rw_signal(
        items
            .iter()
            .find(|item| item.slug() != IMAGE_FOLDER_SLUG && item.slug() != PICTURE_SLUG)
            .cloned(),
    );
    let images = create_memo(move |_| {
        let assets = runtime.assets();
        active.with(|item| {
            item.as_ref()
                .map(|item| design_images(item, &assets))
                .unwrap_or_default()
        })
    });
    let lightbox = create_rw_signal(None::<Carousel>);

    let keydown = window_event_listener(ev::keydown, move |ev| {
        let Some(carousel) = lightbox.get_untracked() else {
            return;
        };
        match CarouselKey::from_key(&ev.key()) {
            Some(CarouselKey::Prev) => lightbox.set(Some(carousel.prev())),
            Some(CarouselKey::Next) => lightbox.set(Some(carousel.next())),
            Some(CarouselKey::Close) => lightbox.set(None),
            None => {}
        }
    });
    on_cleanup(move || keydown.remove());

    let select_item = move |item: Item| {
        let slug = item.slug().to_string();
        let picture = item.thumb_url().map(|url| PictureState {
            url: url.to_string(),
            title: item.display_title().to_string(),
        });
        match (slug.as_str(), picture) {
            (IMAGE_FOLDER_SLUG, _) => runtime.dispatch_action(DesktopAction::OpenImageFolder(item)),
            (PICTURE_SLUG, Some(picture)) => {
                runtime.dispatch_action(DesktopAction::OpenPicture(picture))
            }
            _ => {
                lightbox.set(None);
                active.set(Some(item));
            }
        }
    };

    view! {
        <ModalChrome folder variant="garment-design" logo>
            <Show
                when=move || { splash.get() >= 100 }
                fallback=move || view! {
                    <div class="splash" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=move || splash.get().to_string()>
                        <div class="splash-bar" style=move || format!("width:{}%;", splash.get())></div>
                    </div>
                }
            >
                <div class="design-layout">
                    <nav class="design-sidebar">
                        {items
                            .iter()
                            .cloned()
                            .map(|item| {
                                let id = item.id.clone();
                                let title = item.display_title().to_string();
                                let thumb = item.thumb_url().map(|url| runtime.asset_url(url));
                                let glyph = item.react_icon.clone();
                                let color = item.react_icon_color.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="design-sidebar-entry"
                                        class:active=move || active.with(|active| active.as_ref().is_some_and(|active| active.id == id))
                                        on:click=move |_| select_item(item.clone())
                                    >
                                        <CmsIcon image_url=thumb glyph color fallback=IconName::Folder alt=title.clone() size=24 />
                                        <span>{title}</span>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <div class="design-grid">
                        <Show
                            when=move || images.with(|images| !images.is_empty())
                            fallback=|| view! { <p class="design-empty">"No images in this collection."</p> }
                        >
                            {move || {
                                images
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, image)| {
                                        view! {
                                            <figure
                                                class="design-tile"
                                                on:click=move |_| {
                                                    let len = images.with_untracked(Vec::len);
                                                    lightbox.set(Some(Carousel::at(len, index)));
                                                }
                                            >
                                                <img src=image.src alt=image.caption.clone() loading="lazy" />
                                                <figcaption>{image.caption}</figcaption>
                                            </figure>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </Show>
                    </div>
                </div>
            </Show>
            {move || {
                lightbox.get().and_then(|carousel| {
                    let index = carousel.index()?;
                    let image = images.with(|images| images.get(index).cloned())?;
                    Some(view! {
                        <div class="lightbox" on:click=move |_| lightbox.set(None)>
                            <button
                                type="button"
                                class="lightbox-nav prev"
                                aria-label="Previous image"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    lightbox.update(|carousel| *carousel = carousel.map(Carousel::prev));
                                }
                            >
                                <Glyph icon=IconName::ChevronLeft />
                            </button>
                            <img
                                src=image.src
                                alt=image.caption
                                on:click=|ev| ev.stop_propagation()
                            />
                            <button
                                type="button"
                                class="lightbox-nav next"
                                aria-label="Next image"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    lightbox.update(|carousel| *carousel = carousel.map(Carousel::next));
                                }
                            >
                                <Glyph icon=IconName::ChevronRight />
                            </button>
                        </div>
                    })
                })
            }}
        </ModalChrome>
    }
}

#[component]
pub(super) fn ResumeModal(folder: Folder) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let logo = header_logo(runtime);
    let pages = store_value(resume_pages(&folder, &runtime.assets()));
    let carousel = create_rw_signal(Carousel::new(pages.with_value(Vec::len)));

    let keydown = window_event_listener(ev::keydown, move |ev| {
        match CarouselKey::from_key(&ev.key()) {
            Some(CarouselKey::Prev) => carousel.update(|carousel| *carousel = carousel.prev()),
            Some(CarouselKey::Next) => carousel.update(|carousel| *carousel = carousel.next()),
            Some(CarouselKey::Close) => runtime.dispatch_action(DesktopAction::CloseWindow),
            None => {}
        }
    });
    on_cleanup(move || keydown.remove());

    let current_page = move || {
        carousel
            .get()
            .index()
            .and_then(|index| pages.with_value(|pages| pages.get(index).cloned()))
    };

    view! {
        <ModalChrome folder variant="resume" logo>
            {move || match current_page() {
                None => view! { <p class="resume-empty">"No résumé image found."</p> }.into_view(),
                Some(src) => view! {
                    <div class="resume-viewer">
                        <button
                            type="button"
                            class="resume-nav prev"
                            aria-label="Previous page"
                            on:click=move |_| carousel.update(|carousel| *carousel = carousel.prev())
                        >
                            <Glyph icon=IconName::ChevronLeft />
                        </button>
                        <img class="resume-page" src=src.clone() alt="Résumé page" />
                        <button
                            type="button"
                            class="resume-nav next"
                            aria-label="Next page"
                            on:click=move |_| carousel.update(|carousel| *carousel = carousel.next())
                        >
                            <Glyph icon=IconName::ChevronRight />
                        </button>
                    </div>
                    <footer class="resume-footer">
                        <span class="resume-page-label">{move || carousel.get().page_label()}</span>
                        <a class="resume-download" href=src download="" target="_blank" rel="noopener noreferrer">
                            <Glyph icon=IconName::Download size=16 />
                            <span>"Download"</span>
                        </a>
                    </footer>
                }
                .into_view(),
            }}
        </ModalChrome>
    }
}

#[component]
pub(super) fn MissingModal(slug: String) -> impl IntoView {
    let runtime = use_desktop_runtime();
    view! {
        <div
            class="window-backdrop"
            on:click=move |_| runtime.dispatch_action(DesktopAction::CloseWindow)
        >
            <section class="modal-window missing" role="alertdialog" on:click=|ev| ev.stop_propagation()>
                <p>{missing_modal_message(&slug)}</p>
                <button
                    type="button"
                    on:click=move |_| runtime.dispatch_action(DesktopAction::CloseWindow)
                >
                    "Close"
                </button>
            </section>
        </div>
    }
}
