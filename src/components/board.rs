//! Board Component
//!
//! Renders the note list and owns the drag lifecycle: grab on a card,
//! clamped moves written straight through the store, and a debounced
//! position save so a burst of moves becomes one request. The whole board
//! re-renders from the store on every mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_notedrag::{
    begin_drag, create_drag_signals, drag_position, end_drag, is_control_target, relative_pointer,
    SaveDebounce,
};

use crate::api;
use crate::components::{DrawerTarget, NoteCard};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::models::NotePatch;
use crate::store::{
    store_find_note, store_notes, store_position_note, store_remove_note, use_board_store,
};

/// DOM id of the board surface
pub const BOARD_ID: &str = "board";

/// Delay between the last drag move and the position save
const SAVE_DEBOUNCE_MS: u32 = 300;

/// The board's current rectangle, queried per event like the rest of the
/// layout-dependent math.
pub fn board_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    Some(document.get_element_by_id(BOARD_ID)?.get_bounding_client_rect())
}

#[component]
pub fn Board(set_drawer_target: WriteSignal<Option<DrawerTarget>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let config = expect_context::<BoardConfig>();
    let store = use_board_store();
    let drag = create_drag_signals();
    let saver = SaveDebounce::new();

    // Grab a card unless the pointer went down on one of its controls.
    let handle_grab = move |id: String, ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_control_target(&ev) {
            return;
        }
        let Some(rect) = board_rect() else { return };
        let Some(note) = store_find_note(&store, &id) else {
            return;
        };
        let (pointer_x, pointer_y) = relative_pointer(&ev, &rect);
        begin_drag(&drag, id, pointer_x, pointer_y, note.x, note.y);
    };

    // Track the pointer: clamp, write through the store, rearm the save.
    let move_config = config.clone();
    let move_saver = saver.clone();
    let on_mousemove = move |ev: web_sys::MouseEvent| {
        let Some(active) = drag.active_read.get_untracked() else {
            return;
        };
        let Some(rect) = board_rect() else { return };
        let Some(note) = store_find_note(&store, &active.id) else {
            return;
        };
        let (pointer_x, pointer_y) = relative_pointer(&ev, &rect);
        let (x, y) = drag_position(
            &active,
            pointer_x,
            pointer_y,
            note.width,
            note.height,
            rect.width(),
            rect.height(),
        );
        store_position_note(&store, &active.id, x, y);

        let config = move_config.clone();
        let id = active.id.clone();
        move_saver.schedule(SAVE_DEBOUNCE_MS, move || {
            spawn_local(async move {
                if let Err(err) = api::update_note(&config, &id, &NotePatch::position(x, y)).await {
                    web_sys::console::warn_1(&format!("[board] position save failed: {err}").into());
                    ctx.notify("Couldn't save note position");
                }
            });
        });
    };

    // Releasing the pointer or leaving the board ends the drag; an armed
    // save timer still fires.
    let on_release = move |_ev: web_sys::MouseEvent| end_drag(&drag);

    let delete_config = config.clone();
    view! {
        <div
            id=BOARD_ID
            class="board"
            on:mousemove=on_mousemove
            on:mouseup=on_release
            on:mouseleave=on_release
        >
            {move || {
                store_notes(&store)
                    .into_iter()
                    .map(|note| {
                        let edit_id = note.id.clone();
                        let grab_id = note.id.clone();
                        let delete_id = note.id.clone();
                        let config = delete_config.clone();
                        view! {
                            <NoteCard
                                note=note
                                on_edit=move |()| {
                                    set_drawer_target.set(Some(DrawerTarget::Note(edit_id.clone())))
                                }
                                on_grab=move |ev| handle_grab(grab_id.clone(), ev)
                                on_delete=move |()| {
                                    let config = config.clone();
                                    let id = delete_id.clone();
                                    spawn_local(async move {
                                        match api::delete_note(&config, &id).await {
                                            Ok(()) => store_remove_note(&store, &id),
                                            Err(err) => {
                                                web_sys::console::warn_1(
                                                    &format!("[board] delete failed: {err}").into(),
                                                );
                                                ctx.notify("Couldn't delete note");
                                            }
                                        }
                                    });
                                }
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
