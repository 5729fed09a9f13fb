//! Stat Card Component
//!
//! Summary metric cards shown at the top of the dashboard.

use leptos::*;

/// Summary card with a title, headline value and caption
#[component]
pub fn StatCard(
    title: &'static str,
    icon: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] caption: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg border shadow-sm p-6">
            <div class="flex items-center justify-between pb-2">
                <span class="text-sm font-medium text-gray-900">{title}</span>
                <span class="text-gray-400">{icon}</span>
            </div>
            <div class="text-2xl font-bold text-gray-900">
                {move || value.get()}
            </div>
            <p class="text-xs text-gray-500 mt-1">
                {move || caption.get()}
            </p>
        </div>
    }
}
