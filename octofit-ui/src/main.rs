//! OctoFit Tracker
//!
//! Single-page fitness tracker front-end built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing page with one card per collection
//! - Read-only table views of users, teams, activities, workouts and the leaderboard
//! - Loading, empty and error states for every collection
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads the OctoFit REST API over HTTP; the base URL is fixed
//! at build time from `OCTOFIT_API_URL` or `CODESPACE_NAME`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;

use api::ApiClient;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let client = ApiClient::from_build_env();
    web_sys::console::log_1(&format!("OctoFit API base: {}", client.base()).into());

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App client=client /> });
}
