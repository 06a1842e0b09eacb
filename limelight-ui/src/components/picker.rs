//! Handle Picker Component
//!
//! Multi-select control over the distinct handles in the dataset.
//! Toggling a handle updates the selection signal, which is the single
//! reactive input of the page.

use leptos::*;

use crate::state::global::GlobalState;

/// Multi-select account picker
#[component]
pub fn HandlePicker() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="space-y-2">
            <h3 class="text-sm font-semibold text-gray-400 uppercase">"Accounts"</h3>

            <div class="space-y-1 max-h-80 overflow-y-auto">
                <For
                    each=move || state.handles.get()
                    key=|handle| handle.clone()
                    children=move |handle: String| {
                        let state = use_context::<GlobalState>()
                            .expect("GlobalState not found");
                        let handle_for_checked = handle.clone();
                        let state_for_checked = state.clone();
                        let handle_for_toggle = handle.clone();

                        view! {
                            <label class="flex items-center space-x-2 px-2 py-1 rounded
                                          hover:bg-gray-700 cursor-pointer">
                                <input
                                    type="checkbox"
                                    prop:checked=move || {
                                        state_for_checked.is_selected(&handle_for_checked)
                                    }
                                    on:change=move |_| state.toggle_handle(&handle_for_toggle)
                                />
                                <span class="text-sm text-gray-200">{handle.clone()}</span>
                            </label>
                        }
                    }
                />
            </div>

            <ClearButton />
        </div>
    }
}

/// Clears the selection, which clears the chart region
#[component]
fn ClearButton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <button
            on:click=move |_| state.selected.set(Vec::new())
            class="w-full text-sm px-3 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                   text-gray-300 transition-colors"
        >
            "Clear selection"
        </button>
    }
}
