//! Limelight Dashboard
//!
//! Celebrity tweet engagement dashboard built with Leptos (WASM).
//!
//! One page, one reactive edge: changing the account selection in the
//! multi-select picker refetches the chart figure from the Limelight API
//! and redraws the canvas.
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. It communicates with the Limelight API over HTTP; the
//! API owns what a selection renders to, this app owns when it is asked.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
