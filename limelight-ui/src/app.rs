//! App Root Component
//!
//! Page layout and the wiring of the single reactive edge: the selection
//! signal drives a chart refetch, the API answers with the figure to draw.

use leptos::*;

use crate::api;
use crate::components::{Chart, HandlePicker};
use crate::state::global::{provide_global_state, Figure, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch the selection domain once at startup; the default selection
    // comes from the API alongside it.
    let state_for_init = state.clone();
    create_effect(move |_| {
        let state = state_for_init.clone();
        spawn_local(async move {
            match api::fetch_handles().await {
                Ok(response) => {
                    state.handles.set(response.handles);
                    state.selected.set(response.default_selection);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch accounts: {}", e).into(),
                    );
                    state.show_error(&format!("Failed to fetch accounts: {}", e));
                }
            }
        });
    });

    // The reactive edge: every selection change refetches the figure.
    // An empty selection short-circuits to the empty figure locally.
    let state_for_edge = state.clone();
    create_effect(move |_| {
        let selected = state_for_edge.selected.get();
        let state = state_for_edge.clone();

        if selected.is_empty() {
            state.figure.set(Figure::default());
            return;
        }

        spawn_local(async move {
            state.loading.set(true);
            match api::fetch_chart(&selected).await {
                Ok(figure) => {
                    state.clear_error();
                    state.figure.set(figure);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch chart data: {}", e).into(),
                    );
                    state.show_error(&e);
                }
            }
            state.loading.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <main class="container mx-auto px-4 py-8 space-y-8">
                // Title row
                <div class="text-center">
                    <h1 class="text-3xl font-bold">"Celebrity Tweet Engagement"</h1>
                    <p class="text-gray-400 mt-1">"Daily average likes per account"</p>
                </div>

                // Error banner
                <ErrorBanner />

                // Chart region
                <section class="bg-gray-800 rounded-xl p-6">
                    {move || {
                        if state.loading.get() {
                            view! {
                                <div class="h-64 flex items-center justify-center">
                                    <div class="loading-spinner w-8 h-8" />
                                </div>
                            }
                            .into_view()
                        } else {
                            view! { <Chart /> }.into_view()
                        }
                    }}
                </section>

                // Picker and outbound link
                <div class="grid md:grid-cols-4 gap-8">
                    <section class="bg-gray-800 rounded-xl p-6 md:col-span-3">
                        <HandlePicker />
                    </section>

                    <section class="flex items-start">
                        <a
                            href="https://x.com"
                            target="_blank"
                            class="text-primary-400 hover:text-primary-300 underline"
                        >
                            "Click here to visit X.com"
                        </a>
                    </section>
                </div>
            </main>
        </div>
    }
}

/// Dismissable error banner
#[component]
fn ErrorBanner() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let state_for_click = state.clone();

    view! {
        {move || {
            state.error.get().map(|message| {
                let state = state_for_click.clone();
                view! {
                    <div class="bg-red-900 border border-red-700 rounded-lg px-4 py-3
                                flex items-center justify-between">
                        <span class="text-sm text-red-200">{message}</span>
                        <button
                            on:click=move |_| state.clear_error()
                            class="text-red-300 hover:text-red-100 ml-4"
                        >
                            "✕"
                        </button>
                    </div>
                }
            })
        }}
    }
}
