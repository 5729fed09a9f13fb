//! Dashboard de Suivi des Dons
//!
//! Fundraising campaign dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Campaign-level statistics and global progress
//! - Per-Rotarian collection targets and progress
//! - Donation history with status badges
//! - Modal forms for recording donations and registering Rotarians
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The REST backend is the sole source of truth: the client
//! loads all data on mount and fully reloads it after every successful write.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
