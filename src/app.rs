//! Pinwall App
//!
//! Top-level component: provides the config, store, and app context, loads
//! the board once on mount, and lays out toolbar, board, drawer, and toast.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{board_rect, Board, DrawerTarget, EditorDrawer, Toast, Toolbar};
use crate::config::BoardConfig;
use crate::context::AppContext;
use crate::models::{NoteDraft, DEFAULT_SIZE};
use crate::store::{store_set_notes, BoardState, BoardStore};

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::from_window();
    let store: BoardStore = Store::new(BoardState::default());
    let ctx = AppContext::new(signal(None::<String>));
    let (drawer_target, set_drawer_target) = signal(None::<DrawerTarget>);

    // Provide context to all children
    provide_context(config.clone());
    provide_context(store);
    provide_context(ctx);

    // Load notes on mount
    let load_config = config;
    Effect::new(move |_| {
        let config = load_config.clone();
        spawn_local(async move {
            match api::list_notes(&config).await {
                Ok(notes) => {
                    web_sys::console::log_1(&format!("[board] loaded {} notes", notes.len()).into());
                    store_set_notes(&store, notes);
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[board] load failed: {err}").into());
                    ctx.notify("Couldn't load notes");
                }
            }
        });
    });

    // Open the drawer with a draft placed at the board center.
    let on_new_note = move |()| {
        let (x, y) = board_rect()
            .map(|rect| {
                (
                    (rect.width() / 2.0 - DEFAULT_SIZE / 2.0).max(0.0).round(),
                    (rect.height() / 2.0 - DEFAULT_SIZE / 2.0).max(0.0).round(),
                )
            })
            .unwrap_or((0.0, 0.0));
        set_drawer_target.set(Some(DrawerTarget::Draft(NoteDraft::at(x, y))));
    };

    view! {
        <div class="app-layout">
            <Toolbar on_new_note=on_new_note />
            <Board set_drawer_target=set_drawer_target />
            <EditorDrawer drawer_target=drawer_target set_drawer_target=set_drawer_target />
            <Toast />
        </div>
    }
}
