//! Bikeboard Dashboard
//!
//! Trip statistics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Trip duration line chart
//! - Trips by hour of day bar chart
//! - Client-side navigation between the two views
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The stats model, view lifecycle and SVG renderer come from
//! the `bikeboard` core crate; this crate adds routing and the gloo-net
//! HTTP client. Build with `BIKEBOARD_API_URL` set to point it at a stats
//! API other than `/api/`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
