//! Editor Drawer Component
//!
//! Side panel mapping form fields to a note's mutable attributes. The
//! drawer stays in the DOM and toggles its `open` class; submit builds a
//! patch and dispatches create-or-update depending on whether a draft is
//! pending. Closes itself on success, toasts on failure.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{ColorPicker, DrawerTarget};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::models::{NotePatch, COLORS, DEFAULT_SIZE};
use crate::store::{store_find_note, store_patch_note, store_prepend_note, use_board_store};

#[component]
pub fn EditorDrawer(
    drawer_target: ReadSignal<Option<DrawerTarget>>,
    set_drawer_target: WriteSignal<Option<DrawerTarget>>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = expect_context::<BoardConfig>();
    let store = use_board_store();

    let (title, set_title) = signal(String::new());
    let (content, set_content) = signal(String::new());
    let (width, set_width) = signal(DEFAULT_SIZE);
    let (height, set_height) = signal(DEFAULT_SIZE);
    let (rotation, set_rotation) = signal(0.0f64);
    let (opacity, set_opacity) = signal(1.0f64);
    let (color, set_color) = signal(COLORS[0].to_string());

    // Map the target into the form whenever it changes.
    Effect::new(move |_| match drawer_target.get() {
        Some(DrawerTarget::Note(id)) => {
            if let Some(note) = store_find_note(&store, &id) {
                set_title.set(note.title);
                set_content.set(note.content);
                set_width.set(note.width);
                set_height.set(note.height);
                set_rotation.set(note.rotation);
                set_opacity.set(note.opacity);
                set_color.set(note.color);
            }
        }
        Some(DrawerTarget::Draft(draft)) => {
            set_title.set(draft.title);
            set_content.set(draft.content);
            set_width.set(draft.width);
            set_height.set(draft.height);
            set_rotation.set(draft.rotation);
            set_opacity.set(draft.opacity);
            set_color.set(draft.color);
        }
        None => {}
    });

    let heading = move || match drawer_target.get() {
        Some(DrawerTarget::Draft(_)) => "New note",
        _ => "Edit note",
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(target) = drawer_target.get_untracked() else {
            return;
        };
        let patch = NotePatch {
            title: Some(title.get_untracked().trim().to_string()),
            content: Some(content.get_untracked().trim().to_string()),
            width: Some(width.get_untracked()),
            height: Some(height.get_untracked()),
            color: Some(color.get_untracked()),
            rotation: Some(rotation.get_untracked()),
            opacity: Some(opacity.get_untracked()),
            ..Default::default()
        };

        let config = config.clone();
        spawn_local(async move {
            match target {
                DrawerTarget::Draft(draft) => {
                    match api::create_note(&config, &draft.merged(&patch)).await {
                        Ok(created) => {
                            if let Some(note) = created {
                                store_prepend_note(&store, note);
                            }
                            set_drawer_target.set(None);
                        }
                        Err(err) => {
                            web_sys::console::warn_1(
                                &format!("[board] create failed: {err}").into(),
                            );
                            ctx.notify("Couldn't create note");
                        }
                    }
                }
                DrawerTarget::Note(id) => match api::update_note(&config, &id, &patch).await {
                    Ok(server_patch) => {
                        store_patch_note(&store, &id, &server_patch.unwrap_or(patch));
                        set_drawer_target.set(None);
                    }
                    Err(err) => {
                        web_sys::console::warn_1(&format!("[board] update failed: {err}").into());
                        ctx.notify("Couldn't update note");
                    }
                },
            }
        });
    };

    let open = move || drawer_target.get().is_some();

    view! {
        <aside
            class=move || if open() { "drawer open" } else { "drawer" }
            aria-hidden=move || if open() { "false" } else { "true" }
        >
            <div class="drawer-header">
                <span class="drawer-title">{heading}</span>
                <button
                    type="button"
                    class="close-btn"
                    on:click=move |_| set_drawer_target.set(None)
                >
                    "×"
                </button>
            </div>

            <form class="edit-form" on:submit=on_submit>
                <label>
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Content"
                    <textarea
                        prop:value=move || content.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                            set_content.set(textarea.value());
                        }
                    ></textarea>
                </label>

                <div class="field-row">
                    <label>
                        "Width"
                        <input
                            type="number"
                            min="80"
                            prop:value=move || width.get().to_string()
                            on:input=move |ev| {
                                set_width.set(event_target_value(&ev).parse().unwrap_or(DEFAULT_SIZE))
                            }
                        />
                    </label>
                    <label>
                        "Height"
                        <input
                            type="number"
                            min="80"
                            prop:value=move || height.get().to_string()
                            on:input=move |ev| {
                                set_height.set(event_target_value(&ev).parse().unwrap_or(DEFAULT_SIZE))
                            }
                        />
                    </label>
                </div>

                <div class="field-row">
                    <label>
                        "Rotation"
                        <input
                            type="number"
                            min="-45"
                            max="45"
                            prop:value=move || rotation.get().to_string()
                            on:input=move |ev| {
                                set_rotation.set(event_target_value(&ev).parse().unwrap_or(0.0))
                            }
                        />
                    </label>
                    <label>
                        "Opacity"
                        <input
                            type="number"
                            min="0"
                            max="1"
                            step="0.05"
                            prop:value=move || opacity.get().to_string()
                            on:input=move |ev| {
                                set_opacity.set(event_target_value(&ev).parse().unwrap_or(1.0))
                            }
                        />
                    </label>
                </div>

                <label>
                    "Color"
                    <ColorPicker selected=color set_selected=set_color />
                </label>

                <button type="submit">"Save"</button>
            </form>
        </aside>
    }
}
