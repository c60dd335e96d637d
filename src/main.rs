//! Presence Analyzer Dashboard
//!
//! Per-user presence dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Total and mean presence time per weekday
//! - Start/end presence timeline per weekday
//! - User detail card with avatar
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the presence analyzer API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
