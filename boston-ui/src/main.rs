//! Championnat BOSTON
//!
//! Site of the local football league, built with Leptos (WASM).
//!
//! # Features
//!
//! - Public dashboard, match list, standings, calendar and news
//! - Admin panel for teams, matches, news and score entry
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the league REST API over HTTP.

use leptos::*;

mod api;
mod app;
mod calendar;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
