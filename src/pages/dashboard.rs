//! Dashboard Page
//!
//! Summary cards, global progress and the three campaign tabs.

use leptos::*;

use crate::components::{DonutChart, ProgressBar, RotarianBarChart, StatCard, StatusBadge};
use crate::format::{format_cfa, format_date};
use crate::state::global::{DashboardState, Donation, Rotarian};

/// Active dashboard tab
#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Rotarians,
    Donations,
    Analytics,
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let stats = state.stats;

    let (tab, set_tab) = create_signal(Tab::Rotarians);

    view! {
        <div class="space-y-8">
            // Summary cards
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <StatCard
                    title="Total Collecté"
                    icon="💰"
                    value=Signal::derive(move || format_cfa(stats.get().total_donations))
                    caption=Signal::derive(move || {
                        format!("{}% de l'objectif", stats.get().progress_percentage)
                    })
                />
                <StatCard
                    title="Objectif Total"
                    icon="🎯"
                    value=Signal::derive(move || format_cfa(stats.get().total_target))
                    caption=Signal::derive(|| "Somme des objectifs individuels".to_string())
                />
                <StatCard
                    title="Donateurs"
                    icon="👥"
                    value=Signal::derive(move || stats.get().total_donors.to_string())
                    caption=Signal::derive(|| "Nombre total de dons".to_string())
                />
                <StatCard
                    title="Rotariens"
                    icon="📈"
                    value=Signal::derive(move || stats.get().total_rotarians.to_string())
                    caption=Signal::derive(|| "Membres actifs".to_string())
                />
            </div>

            // Global progress
            <section class="bg-white rounded-lg border shadow-sm p-6">
                <h2 class="text-lg font-semibold">"Progression Globale"</h2>
                <p class="text-sm text-gray-500 mb-4">
                    "Avancement vers l'objectif total de collecte"
                </p>

                <div class="space-y-2">
                    <div class="flex justify-between text-sm text-gray-700">
                        <span>{move || format!("Collecté: {}", format_cfa(stats.get().total_donations))}</span>
                        <span>{move || format!("Objectif: {}", format_cfa(stats.get().total_target))}</span>
                    </div>
                    <ProgressBar value=Signal::derive(move || stats.get().progress_percentage) />
                    <p class="text-center text-sm text-gray-500">
                        {move || format!("{}% de l'objectif atteint", stats.get().progress_percentage)}
                    </p>
                </div>
            </section>

            // Tabs
            <div class="space-y-6">
                <div class="grid grid-cols-3 bg-gray-100 rounded-lg p-1">
                    <TabButton label="Rotariens" current=tab target=Tab::Rotarians
                        on_click=move |_| set_tab.set(Tab::Rotarians) />
                    <TabButton label="Dons" current=tab target=Tab::Donations
                        on_click=move |_| set_tab.set(Tab::Donations) />
                    <TabButton label="Analyses" current=tab target=Tab::Analytics
                        on_click=move |_| set_tab.set(Tab::Analytics) />
                </div>

                {move || match tab.get() {
                    Tab::Rotarians => view! { <RotarianList /> }.into_view(),
                    Tab::Donations => view! { <DonationList /> }.into_view(),
                    Tab::Analytics => view! { <Analytics /> }.into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    current: ReadSignal<Tab>,
    target: Tab,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=on_click
            class=move || {
                let base = "py-2 rounded-md text-sm font-medium transition-colors";
                if current.get() == target {
                    format!("{} bg-white shadow text-gray-900", base)
                } else {
                    format!("{} text-gray-600 hover:text-gray-900", base)
                }
            }
        >
            {label}
        </button>
    }
}

/// Per-Rotarian progress list
#[component]
fn RotarianList() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let rotarians = state.rotarians;

    view! {
        <section class="bg-white rounded-lg border shadow-sm p-6">
            <h2 class="text-lg font-semibold">"Performance des Rotariens"</h2>
            <p class="text-sm text-gray-500 mb-4">
                "Suivi des objectifs individuels de collecte"
            </p>

            <div class="space-y-4">
                {move || {
                    let list = rotarians.get();
                    if list.is_empty() {
                        view! {
                            <p class="text-gray-500 text-sm text-center py-8">
                                "Aucun Rotarien enregistré"
                            </p>
                        }.into_view()
                    } else {
                        list.into_iter()
                            .map(|r| view! { <RotarianRow rotarian=r /> })
                            .collect_view()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn RotarianRow(rotarian: Rotarian) -> impl IntoView {
    let progress = rotarian.progress_percentage;

    view! {
        <div class="p-4 border rounded-lg">
            <h3 class="font-semibold">{rotarian.name}</h3>
            <p class="text-sm text-gray-500">{rotarian.email.unwrap_or_default()}</p>
            <div class="mt-2">
                <div class="flex justify-between text-sm mb-1 text-gray-700">
                    <span>{format!("Collecté: {}", format_cfa(rotarian.current_amount))}</span>
                    <span>{format!("Objectif: {}", format_cfa(rotarian.target_amount))}</span>
                </div>
                <ProgressBar value=Signal::derive(move || progress) height="h-2" />
                <p class="text-xs text-gray-500 mt-1">
                    {format!("{}% de l'objectif", progress)}
                </p>
            </div>
        </div>
    }
}

/// Donation history list
#[component]
fn DonationList() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let donations = state.donations;

    view! {
        <section class="bg-white rounded-lg border shadow-sm p-6">
            <h2 class="text-lg font-semibold">"Historique des Dons"</h2>
            <p class="text-sm text-gray-500 mb-4">
                "Liste complète des dons collectés"
            </p>

            <div class="space-y-4">
                {move || {
                    let list = donations.get();
                    if list.is_empty() {
                        view! {
                            <p class="text-gray-500 text-sm text-center py-8">
                                "Aucun don enregistré"
                            </p>
                        }.into_view()
                    } else {
                        list.into_iter()
                            .map(|d| view! { <DonationRow donation=d /> })
                            .collect_view()
                    }
                }}
            </div>
        </section>
    }
}

#[component]
fn DonationRow(donation: Donation) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between p-4 border rounded-lg">
            <div class="flex-1">
                <div class="flex items-center gap-2 mb-1">
                    <h3 class="font-semibold">{donation.donor_name}</h3>
                    <StatusBadge status=donation.status />
                </div>
                <p class="text-sm text-gray-500">
                    {format!("Collecté par: {}", donation.rotarian_name)}
                </p>
                <p class="text-xs text-gray-500">
                    {format_date(&donation.date_created)}
                </p>
                {donation.notes.filter(|n| !n.is_empty()).map(|n| view! {
                    <p class="text-xs text-gray-500 mt-1">{format!("Note: {}", n)}</p>
                })}
            </div>
            <div class="text-right">
                <p class="text-lg font-bold text-green-600">
                    {format_cfa(donation.amount)}
                </p>
            </div>
        </div>
    }
}

/// Analytics tab with the two charts
#[component]
fn Analytics() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <section class="bg-white rounded-lg border shadow-sm p-6">
                <h2 class="text-lg font-semibold">"Répartition de la Collecte"</h2>
                <p class="text-sm text-gray-500 mb-4">
                    "Progression vs objectif global"
                </p>
                <DonutChart />
            </section>

            <section class="bg-white rounded-lg border shadow-sm p-6">
                <h2 class="text-lg font-semibold">"Performance par Rotarien"</h2>
                <p class="text-sm text-gray-500 mb-4">
                    "Comparaison collecte vs objectif"
                </p>
                <RotarianBarChart />
            </section>
        </div>
    }
}
