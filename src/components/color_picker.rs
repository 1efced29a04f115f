//! Color Picker Component
//!
//! Fixed swatch row with single selection.

use leptos::prelude::*;

use crate::models::COLORS;

#[component]
pub fn ColorPicker(
    selected: ReadSignal<String>,
    set_selected: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="color-picker">
            {COLORS.iter().map(|color| {
                let value = color.to_string();
                let swatch_value = value.clone();
                let click_value = value.clone();
                view! {
                    <button
                        type="button"
                        class=move || {
                            if selected.get() == swatch_value {
                                "color-swatch selected"
                            } else {
                                "color-swatch"
                            }
                        }
                        style=format!("background: {value}")
                        on:click=move |_| set_selected.set(click_value.clone())
                    ></button>
                }
            }).collect_view()}
        </div>
    }
}
