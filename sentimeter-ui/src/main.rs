//! Sentimeter Front-end
//!
//! Sentiment analysis page built with Leptos (WASM).
//!
//! # Features
//!
//! - Analyze a text and show its label, confidence and language
//! - Browse the 20 most recent analyses
//! - Clear the server-side history
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! Page state lives in one `ViewState` signal; a `Controller` performs the
//! user actions against the Sentimeter HTTP API and writes their outcome
//! back to that state.

use leptos::*;

mod api;
mod app;
mod components;
mod display;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
