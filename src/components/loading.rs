//! Loading Component
//!
//! Full-page spinner shown before the first successful data load.

use leptos::*;

/// Full-page loading state
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <div class="loading-spinner w-12 h-12 mx-auto mb-4" />
                <p class="text-gray-600">"Chargement des données..."</p>
            </div>
        </div>
    }
}

/// Inline loading spinner for buttons
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}
