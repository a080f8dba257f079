use super::*;
use crate::{
    icons::{CmsIcon, Glyph, IconName},
    model::PictureState,
};

#[component]
pub(super) fn ImageFolderOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let item = create_memo(move |_| runtime.state.with(|desktop| desktop.image_folder.clone()));
    let close = move || runtime.dispatch_action(DesktopAction::CloseImageFolder);

    view! {
        <div class="overlay-backdrop" on:click=move |_| close()>
            <section class="overlay-window image-folder" role="dialog" on:click=|ev| ev.stop_propagation()>
                <header class="titlebar">
                    <button type="button" class="traffic-light close" aria-label="Close" on:click=move |_| close()></button>
                    <h2 class="titlebar-title">
                        {move || item.with(|item| item.as_ref().map(|item| item.display_title().to_string()))}
                    </h2>
                </header>
                <div class="image-folder-grid">
                    {move || {
                        item.get()
                            .map(|item| item.sub_item)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|sub| {
                                let title = sub.display_title().to_string();
                                let image = sub.content_images().first().map(|image| image.url.clone());
                                let picture = image.clone().map(|url| PictureState {
                                    url,
                                    title: title.clone(),
                                });
                                view! {
                                    <button
                                        type="button"
                                        class="image-folder-entry"
                                        disabled=picture.is_none()
                                        on:click=move |_| {
                                            if let Some(picture) = picture.clone() {
                                                runtime.dispatch_action(DesktopAction::OpenPicture(picture));
                                            }
                                        }
                                    >
                                        <CmsIcon
                                            image_url=image.map(|url| runtime.asset_url(&url))
                                            fallback=IconName::File
                                            alt=title.clone()
                                            size=96
                                        />
                                        <span>{title}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}

#[component]
pub(super) fn PictureOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let picture = create_memo(move |_| runtime.state.with(|desktop| desktop.picture.clone()));
    let close = move || runtime.dispatch_action(DesktopAction::ClosePicture);

    view! {
        <div class="overlay-backdrop picture" on:click=move |_| close()>
            {move || {
                picture.get().map(|picture| {
                    view! {
                        <section class="overlay-window picture-viewer" role="dialog" on:click=|ev| ev.stop_propagation()>
                            <header class="titlebar">
                                <button type="button" class="titlebar-dismiss" aria-label="Close" on:click=move |_| close()>
                                    <Glyph icon=IconName::Dismiss size=16 />
                                </button>
                                <h2 class="titlebar-title">{picture.title.clone()}</h2>
                            </header>
                            <img class="picture-viewer-image" src=runtime.asset_url(&picture.url) alt=picture.title />
                        </section>
                    }
                })
            }}
        </div>
    }
}
