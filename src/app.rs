//! App Root Component
//!
//! Application shell: header with the two modal triggers, initial data load
//! and the first-load spinner gate.

use leptos::*;

use crate::components::{DonationFormModal, Loading, RotarianFormModal};
use crate::pages::Dashboard;
use crate::state::global::{provide_dashboard_state, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide dashboard state to all components
    provide_dashboard_state();

    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let loading = state.loading;

    // Fetch all three slices on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.refresh().await;
        });
    });

    let (show_donation_form, set_show_donation_form) = create_signal(false);
    let (show_rotarian_form, set_show_rotarian_form) = create_signal(false);

    view! {
        <div class="min-h-screen bg-gray-50">
            // Header with title and modal triggers
            <header class="bg-white shadow-sm border-b">
                <div class="max-w-7xl mx-auto px-4 py-4 flex items-center justify-between">
                    <div>
                        <h1 class="text-2xl font-bold text-gray-900">
                            "Dashboard de Suivi des Dons"
                        </h1>
                        <p class="text-gray-600">
                            "Campagne de Collecte de Fonds pour la Drépanocytose"
                        </p>
                    </div>
                    <div class="flex gap-2">
                        <button
                            on:click=move |_| set_show_donation_form.set(true)
                            class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white
                                   rounded-lg text-sm font-medium transition-colors"
                        >
                            "+ Nouveau Don"
                        </button>
                        <button
                            on:click=move |_| set_show_rotarian_form.set(true)
                            class="px-4 py-2 border border-gray-300 hover:bg-gray-100
                                   text-gray-700 rounded-lg text-sm font-medium transition-colors"
                        >
                            "+ Nouveau Rotarien"
                        </button>
                    </div>
                </div>
            </header>

            // Modal dialogs
            {move || {
                if show_donation_form.get() {
                    view! {
                        <DonationFormModal on_close=move || set_show_donation_form.set(false) />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
            {move || {
                if show_rotarian_form.get() {
                    view! {
                        <RotarianFormModal on_close=move || set_show_rotarian_form.set(false) />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Full-page spinner only before the first load settles
            <main class="max-w-7xl mx-auto px-4 py-8">
                {move || {
                    if loading.get() {
                        view! { <Loading /> }.into_view()
                    } else {
                        view! { <Dashboard /> }.into_view()
                    }
                }}
            </main>
        </div>
    }
}
