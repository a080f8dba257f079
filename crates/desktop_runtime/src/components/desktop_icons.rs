use super::*;
use crate::{
    icons::{CmsIcon, IconName},
    model::desktop_icon_position,
};

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let interaction = runtime.interaction;

    let folders = create_memo(move |_| {
        state.with(|desktop| desktop.content.desktop_folders().to_vec())
    });

    view! {
        <div class="desktop-icons" role="list" aria-label="Desktop">
            <For
                each=move || folders.get().into_iter().enumerate()
                key=|(_, folder)| folder.document_id.clone()
                let:entry
            >
                {
                    let (index, folder) = entry;
                    let id = folder.document_id.clone();
                    let position = move || {
                        let offset = interaction.with(|ui| ui.icon_offset(&id));
                        let at = desktop_icon_position(index, offset);
                        format!("left:{}px;top:{}px;", at.x, at.y)
                    };
                    let dragging = {
                        let id = folder.document_id.clone();
                        move || {
                            interaction.with(|ui| {
                                ui.icon_drag
                                    .as_ref()
                                    .is_some_and(|drag| drag.folder.document_id == id)
                            })
                        }
                    };
                    let icon_url = folder.icon_url().map(|url| runtime.asset_url(url));
                    let drag_folder = folder.clone();
                    let open_folder = folder.clone();
                    let title = folder.title.clone();

                    view! {
                        <button
                            type="button"
                            role="listitem"
                            class="desktop-icon"
                            class:dragging=dragging
                            style=position
                            title=title.clone()
                            on:pointerdown=move |ev: web_sys::PointerEvent| {
                                if ev.button() != 0 {
                                    return;
                                }
                                ev.prevent_default();
                                runtime.dispatch_action(DesktopAction::BeginIconDrag {
                                    folder: drag_folder.clone(),
                                    pointer: pointer_from_pointer_event(&ev),
                                    touch: ev.pointer_type() == "touch",
                                });
                            }
                            on:dblclick=move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::OpenFolder(open_folder.clone()));
                            }
                        >
                            <CmsIcon
                                image_url=icon_url
                                glyph=folder.react_icon.clone()
                                color=folder.react_icon_color.clone()
                                fallback=IconName::Folder
                                alt=title.clone()
                            />
                            <span class="desktop-icon-label">{title}</span>
                        </button>
                    }
                }
            </For>
        </div>
    }
}
