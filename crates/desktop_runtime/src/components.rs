//! Desktop shell UI composition and interaction surfaces.

mod browser_modal;
mod custom_modals;
mod desktop_icons;
mod dock;
mod finder_window;
mod header;
mod overlays;

use leptos::*;

use self::{
    browser_modal::BrowserModal,
    custom_modals::{GarmentDesignModal, MissingModal, ResumeModal},
    desktop_icons::DesktopIcons,
    dock::Dock,
    finder_window::FinderWindow,
    header::Header,
    overlays::{ImageFolderOverlay, PictureOverlay},
};

use crate::{
    model::PointerPosition,
    modals::ModalKind,
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Header logo URL, shared with the menu bar through the content cache.
fn header_logo(runtime: DesktopRuntimeContext) -> Resource<(), Option<String>> {
    let client = runtime.content();
    let assets = runtime.assets();
    create_local_resource(
        || (),
        move |_| {
            let client = client.clone();
            let assets = assets.clone();
            async move {
                match client.header().await {
                    Ok(header) => header.logo_url().map(|url| assets.resolve(url)),
                    Err(err) => {
                        logging::warn!("modal logo unavailable: {err}");
                        None
                    }
                }
            }
        },
    )
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
/// Root desktop surface: menu bar, icons, the active window, overlays and the dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let content = {
        let client = runtime.content();
        create_local_resource(
            || (),
            move |_| {
                let client = client.clone();
                async move { client.content_tree().await }
            },
        )
    };

    create_effect(move |_| match content.get() {
        Some(Ok(tree)) => {
            logging::log!(
                "desktop content loaded: {} categories",
                tree.categories.len()
            );
            runtime.dispatch_action(DesktopAction::LoadContent(tree));
        }
        Some(Err(err)) => logging::error!("desktop content failed to load: {err}"),
        None => {}
    });

    let active_window =
        create_memo(move |_| state.with(|desktop| desktop.windows.active.clone()));

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().icon_drag.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateIconDrag {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().icon_drag.is_some() {
            runtime.dispatch_action(DesktopAction::EndIconDrag {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-fullscreen=move || state.get().windows.fullscreen.to_string()
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-backdrop" aria-hidden="true"></div>
            <Header />

            <main class="desktop-surface">
                {move || match content.get() {
                    None => ().into_view(),
                    Some(Err(err)) => view! {
                        <p class="desktop-error">{format!("Error loading folders: {err}")}</p>
                    }
                    .into_view(),
                    Some(Ok(_)) => view! { <DesktopIcons /> }.into_view(),
                }}

                {move || {
                    active_window
                        .get()
                        .map(|folder| match ModalKind::from_slug(folder.slug()) {
                            ModalKind::Finder => view! { <FinderWindow /> }.into_view(),
                            ModalKind::GarmentDesign => {
                                view! { <GarmentDesignModal folder /> }.into_view()
                            }
                            ModalKind::Resume => view! { <ResumeModal folder /> }.into_view(),
                            ModalKind::Browser => view! { <BrowserModal folder /> }.into_view(),
                            ModalKind::Unknown(slug) => view! { <MissingModal slug /> }.into_view(),
                        })
                }}

                <Show when=move || state.with(|desktop| desktop.image_folder.is_some()) fallback=|| ()>
                    <ImageFolderOverlay />
                </Show>
                <Show when=move || state.with(|desktop| desktop.picture.is_some()) fallback=|| ()>
                    <PictureOverlay />
                </Show>
            </main>

            <Dock />
        </div>
    }
}
