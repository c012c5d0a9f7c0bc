//! Rehabit Dashboard
//!
//! AI productivity coach frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Dashboard with today's score, work time, streak and hourly forecast
//! - Activity logging with quick presets
//! - Weekly insights over sample data
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Page state lives in the `rehabit` core crate; this crate
//! renders it and talks to the backend over HTTP with `gloo-net`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
