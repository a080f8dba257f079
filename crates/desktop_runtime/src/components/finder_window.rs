use super::*;
use crate::{
    finder::{grid_entries, EntryKind, GridEntry},
    icons::{CmsIcon, Glyph, IconName},
};

#[component]
pub(super) fn FinderWindow() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let title = create_memo(move |_| state.with(|desktop| desktop.finder.current.title().to_string()));
    let can_go_back = create_memo(move |_| state.with(|desktop| desktop.finder.can_go_back()));
    let can_go_forward =
        create_memo(move |_| state.with(|desktop| desktop.finder.can_go_forward()));
    let fullscreen = create_memo(move |_| state.with(|desktop| desktop.windows.fullscreen));
    let selected = create_memo(move |_| state.with(|desktop| desktop.finder.selected.clone()));
    let sidebar = create_memo(move |_| {
        state.with(|desktop| {
            desktop
                .content
                .sidebar_categories()
                .flat_map(|category| category.desktop_folders.iter().cloned())
                .collect::<Vec<_>>()
        })
    });
    let entries = create_memo(move |_| {
        state.with(|desktop| grid_entries(&desktop.content, &desktop.finder.current))
    });

    view! {
        <div
            class="window-backdrop"
            on:click=move |_| runtime.dispatch_action(DesktopAction::CloseWindow)
        >
            <section
                class="finder-window"
                class:fullscreen=move || fullscreen.get()
                role="dialog"
                aria-label="Finder"
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
                            on:click=move |_| runtime.dispatch_action(DesktopAction::MinimizeWindow(None))
                        ></button>
                        <button
                            type="button"
                            class="traffic-light fullscreen"
                            aria-label="Toggle fullscreen"
                            on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleFullscreen)
                        ></button>
                    </div>
                    <div class="finder-nav">
                        <button
                            type="button"
                            aria-label="Back"
                            disabled=move || !can_go_back.get()
                            on:click=move |_| runtime.dispatch_action(DesktopAction::FinderBack)
                        >
                            <Glyph icon=IconName::ChevronLeft size=16 />
                        </button>
                        <button
                            type="button"
                            aria-label="Forward"
                            disabled=move || !can_go_forward.get()
                            on:click=move |_| runtime.dispatch_action(DesktopAction::FinderForward)
                        >
                            <Glyph icon=IconName::ChevronRight size=16 />
                        </button>
                    </div>
                    <h2 class="titlebar-title">{move || title.get()}</h2>
                </header>

                <div class="finder-body">
                    <nav class="finder-sidebar" aria-label="Locations">
                        <button
                            type="button"
                            class="sidebar-entry"
                            class:active=move || selected.with(Option::is_none)
                            on:click=move |_| runtime.dispatch_action(DesktopAction::SelectFinderRoot)
                        >
                            <Glyph icon=IconName::Folder size=16 />
                            <span>"Finder"</span>
                        </button>
                        <For
                            each=move || sidebar.get()
                            key=|folder| folder.document_id.clone()
                            let:folder
                        >
                            {
                                let id = folder.document_id.clone();
                                let title = folder.title.clone();
                                view! {
                                    <button
                                        type="button"
                                        class="sidebar-entry"
                                        class:active=move || selected.with(|selected| selected.as_ref() == Some(&id))
                                        on:click=move |_| {
                                            runtime.dispatch_action(DesktopAction::SelectCategory(folder.clone()))
                                        }
                                    >
                                        <Glyph icon=IconName::Folder size=16 />
                                        <span>{title}</span>
                                    </button>
                                }
                            }
                        </For>
                    </nav>

                    <div class="finder-grid" role="list">
                        <Show
                            when=move || entries.with(|entries| !entries.is_empty())
                            fallback=|| view! { <p class="finder-empty">"This folder is empty."</p> }
                        >
                            <For
                                each=move || entries.get()
                                key=|entry| (entry.id.clone(), entry.title.clone())
                                let:entry
                            >
                                <FinderTile entry />
                            </For>
                        </Show>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
fn FinderTile(entry: GridEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let GridEntry {
        title,
        thumb_url,
        react_icon,
        react_icon_color,
        kind,
        ..
    } = entry;

    let fallback = match kind {
        EntryKind::Link(_) => IconName::Link,
        EntryKind::Drill(_) => IconName::Folder,
        EntryKind::Picture(_) => IconName::Image,
        EntryKind::Inert => IconName::File,
    };
    let icon = view! {
        <CmsIcon
            image_url=thumb_url.map(|url| runtime.asset_url(&url))
            glyph=react_icon
            color=react_icon_color
            fallback
            alt=title.clone()
            size=64
        />
        <span class="finder-tile-label">{title.clone()}</span>
    };

    let activate = {
        let title = title.clone();
        let kind = kind.clone();
        move || {
            runtime.dispatch_action(DesktopAction::ActivateEntry {
                kind: kind.clone(),
                title: title.clone(),
            })
        }
    };

    match kind {
        EntryKind::Link(url) => view! {
            <a
                class="finder-tile"
                role="listitem"
                href=url
                target="_blank"
                rel="noopener noreferrer"
                on:click=move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    activate();
                }
            >
                {icon}
            </a>
        }
        .into_view(),
        _ => view! {
            <button
                type="button"
                class="finder-tile"
                role="listitem"
                on:click=move |_| activate()
            >
                {icon}
            </button>
        }
        .into_view(),
    }
}
