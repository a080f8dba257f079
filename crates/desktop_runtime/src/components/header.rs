use std::time::Duration;

use desktop_host::{Menu, MenuEntry, SocialLink};
use leptos::leptos_dom::helpers::TimeoutHandle;

use super::*;
use crate::{
    header::{menu_entry_folder, ClockSnapshot, MenuHover, MENU_HOVER_GRACE_MS},
    icons::{Glyph, IconName},
};

#[component]
pub(super) fn Header() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let header = {
        let client = runtime.content();
        create_local_resource(
            || (),
            move |_| {
                let client = client.clone();
                async move { client.header().await }
            },
        )
    };

    view! {
        <header class="menu-bar">
            {move || match header.get() {
                None => ().into_view(),
                Some(Err(err)) => view! {
                    <p class="menu-bar-error">{format!("Failed to load header: {err}")}</p>
                }
                .into_view(),
                Some(Ok(content)) => {
                    let logo = content.logo_url().map(|url| runtime.asset_url(url));
                    view! {
                        <div class="menu-bar-start">
                            {logo.map(|src| view! { <img class="menu-bar-logo" src=src alt="Logo" /> })}
                            {content
                                .menus
                                .into_iter()
                                .map(|menu| view! { <NavMenu menu /> })
                                .collect_view()}
                        </div>
                        <div class="menu-bar-end">
                            {content
                                .social_links
                                .into_iter()
                                .map(|link| view! { <SocialIcon link /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
            <time class="menu-bar-clock">{move || clock_now.get().label()}</time>
        </header>
    }
}

#[component]
fn NavMenu(menu: Menu) -> impl IntoView {
    let hover = create_rw_signal(MenuHover::default());
    let pending_leave = store_value(None::<TimeoutHandle>);

    let cancel_leave = move || {
        if let Some(handle) = pending_leave.get_value() {
            handle.clear();
        }
        pending_leave.set_value(None);
    };
    let schedule_leave = move |apply: fn(&mut MenuHover)| {
        cancel_leave();
        match set_timeout_with_handle(
            move || hover.update(apply),
            Duration::from_millis(MENU_HOVER_GRACE_MS),
        ) {
            Ok(handle) => pending_leave.set_value(Some(handle)),
            Err(_) => hover.update(apply),
        }
    };
    on_cleanup(cancel_leave);

    let Menu { label, items } = menu;

    view! {
        <div class="nav-menu">
            <button
                type="button"
                class="nav-menu-trigger"
                aria-haspopup="true"
                aria-expanded=move || hover.get().visible().to_string()
                on:mouseenter=move |_| {
                    cancel_leave();
                    hover.update(MenuHover::enter_trigger);
                }
                on:mouseleave=move |_| schedule_leave(MenuHover::leave_trigger)
                on:click=move |_| hover.update(MenuHover::toggle)
            >
                {label}
            </button>
            <Show when=move || hover.get().visible() fallback=|| ()>
                <ul
                    class="nav-menu-panel"
                    role="menu"
                    on:mouseenter=move |_| {
                        cancel_leave();
                        hover.update(MenuHover::enter_panel);
                    }
                    on:mouseleave=move |_| schedule_leave(MenuHover::leave_panel)
                >
                    {items
                        .clone()
                        .into_iter()
                        .map(|entry| view! { <NavMenuEntry entry hover /> })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn NavMenuEntry(entry: MenuEntry, hover: RwSignal<MenuHover>) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <li role="none">
            <button
                type="button"
                role="menuitem"
                on:click={
                    let entry = entry.clone();
                    move |_| {
                        hover.update(MenuHover::select);
                        let target = runtime.state.with_untracked(|desktop| {
                            menu_entry_folder(&entry, &desktop.content, &desktop.slug_aliases)
                        });
                        match (target, entry.modal_slug.as_deref()) {
                            (Some(folder), _) => {
                                runtime.dispatch_action(DesktopAction::OpenFolder(folder))
                            }
                            (None, Some(slug)) => {
                                logging::warn!("no desktop folder for menu slug `{slug}`")
                            }
                            (None, None) => {}
                        }
                    }
                }
            >
                {entry.text}
            </button>
        </li>
    }
}

#[component]
fn SocialIcon(link: SocialLink) -> impl IntoView {
    let icon = IconName::for_social(&link.icon_name);
    view! {
        <a
            class="social-link"
            href=link.url
            target="_blank"
            rel="noopener noreferrer"
            aria-label=link.icon_name
        >
            <Glyph icon size=18 />
        </a>
    }
}
