use super::*;
use crate::{
    dock::{derive_dock, magnification, PinnedEntry, WindowEntry},
    icons::{CmsIcon, IconName},
};

fn scale_style(hovered: RwSignal<Option<usize>>, index: usize) -> impl Fn() -> String {
    move || format!("transform:scale({});", magnification(hovered.get(), index))
}

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let hovered = create_rw_signal(None::<usize>);

    let pinned = {
        let client = runtime.content();
        create_local_resource(
            || (),
            move |_| {
                let client = client.clone();
                async move { client.dock().await }
            },
        )
    };

    let model = create_memo(move |_| {
        let items = pinned
            .get()
            .and_then(Result::ok)
            .map(|dock| dock.dock_item)
            .unwrap_or_default();
        state.with(|desktop| derive_dock(&items, &desktop.windows, &desktop.slug_aliases))
    });

    view! {
        <nav class="dock" aria-label="Dock" on:mouseleave=move |_| hovered.set(None)>
            {move || match pinned.get() {
                Some(Err(err)) => view! {
                    <p class="dock-error">{format!("Error: {err}")}</p>
                }
                .into_view(),
                _ => ().into_view(),
            }}
            <ul class="dock-items">
                <For
                    each=move || model.get().pinned.into_iter().enumerate()
                    key=|(index, entry)| (*index, entry.item.title.clone(), entry.running())
                    let:pin
                >
                    <DockPin index=pin.0 entry=pin.1 hovered />
                </For>
                <Show when=move || model.with(|dock| dock.has_separator()) fallback=|| ()>
                    <li class="dock-separator" aria-hidden="true"></li>
                </Show>
                <For
                    each=move || {
                        model.with(|dock| {
                            dock.windows
                                .iter()
                                .cloned()
                                .enumerate()
                                .map(|(position, entry)| (dock.window_hover_index(position), entry))
                                .collect::<Vec<_>>()
                        })
                    }
                    key=|(index, entry)| (*index, entry.folder.document_id.clone(), entry.active)
                    let:window
                >
                    <DockWindow index=window.0 entry=window.1 hovered />
                </For>
            </ul>
        </nav>
    }
}

#[component]
fn DockPin(index: usize, entry: PinnedEntry, hovered: RwSignal<Option<usize>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let running = entry.running();
    let PinnedEntry { item, .. } = entry;
    let label = item.title.clone().unwrap_or_default();
    let icon = view! {
        <CmsIcon
            image_url=item.icon_url().map(|url| runtime.asset_url(url))
            glyph=item.react_icon_name.clone()
            color=item.react_icon_color.clone()
            fallback=IconName::Question
            alt=label.clone()
        />
    };
    let external = item.url.clone().filter(|url| !url.trim().is_empty());
    let activate = move || runtime.dispatch_action(DesktopAction::ActivateDockPin(item.clone()));

    let target = match external {
        Some(url) => view! {
            <a
                class="dock-button"
                href=url
                target="_blank"
                rel="noopener noreferrer"
                title=label.clone()
                on:click=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    activate();
                }
            >
                {icon}
            </a>
        }
        .into_view(),
        None => view! {
            <button
                type="button"
                class="dock-button"
                title=label.clone()
                on:click=move |_| activate()
            >
                {icon}
            </button>
        }
        .into_view(),
    };

    view! {
        <li
            class="dock-item"
            class:running=running
            style=scale_style(hovered, index)
            on:mouseenter=move |_| hovered.set(Some(index))
        >
            {target}
            <span class="dock-tooltip">{label}</span>
            <Show when=move || running fallback=|| ()>
                <span class="dock-indicator" aria-hidden="true"></span>
            </Show>
        </li>
    }
}

#[component]
fn DockWindow(index: usize, entry: WindowEntry, hovered: RwSignal<Option<usize>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let WindowEntry { folder, active } = entry;
    let label = folder.title.clone();
    let icon_url = folder.icon_url().map(|url| runtime.asset_url(url));
    let glyph = folder.react_icon.clone();
    let color = folder.react_icon_color.clone();

    view! {
        <li
            class="dock-item window"
            class:active=active
            style=scale_style(hovered, index)
            on:mouseenter=move |_| hovered.set(Some(index))
        >
            <button
                type="button"
                class="dock-button"
                title=label.clone()
                on:click=move |_| runtime.dispatch_action(DesktopAction::RestoreWindow(folder.clone()))
            >
                <CmsIcon
                    image_url=icon_url
                    glyph
                    color
                    fallback=IconName::FolderOpen
                    alt=label.clone()
                />
            </button>
            <span class="dock-tooltip">{label}</span>
            <span class="dock-indicator" aria-hidden="true"></span>
        </li>
    }
}
