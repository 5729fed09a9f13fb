//! Rotarian Form Component
//!
//! Modal dialog for registering a new Rotarian.

use leptos::*;

use crate::api;
use crate::components::loading::InlineLoading;
use crate::state::global::DashboardState;

/// Default individual collection target, in F CFA
pub const DEFAULT_TARGET: &str = "500000";

/// Draft state of the Rotarian form. The target stays a string because it
/// mirrors the HTML number input; it is parsed at submit time.
#[derive(Clone, Debug, PartialEq)]
pub struct RotarianDraft {
    pub name: String,
    pub email: String,
    pub target_amount: String,
}

impl RotarianDraft {
    /// Initial draft: empty fields, target prefilled with the 500000 default
    pub fn initial() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            target_amount: DEFAULT_TARGET.to_string(),
        }
    }

    /// Draft state after a submission settles: success resets the form
    /// (target back to the default), failure keeps the user's input.
    pub fn after_submit(self, result: &Result<(), String>) -> Self {
        if result.is_ok() {
            Self::initial()
        } else {
            self
        }
    }
}

/// Modal form for registering a Rotarian.
///
/// Same contract as the donation form: success resets the draft and
/// refetches everything; failure only logs.
#[component]
pub fn RotarianFormModal(on_close: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let draft = create_rw_signal(RotarianDraft::initial());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_x = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let snapshot = draft.get_untracked();
        let target = snapshot.target_amount.parse::<f64>().unwrap_or(0.0);

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            let result = api::create_rotarian(&snapshot.name, &snapshot.email, target).await;

            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("Erreur lors de l'ajout du Rotarien: {}", e).into(),
                );
            }

            let refetch = result.is_ok();
            draft.set(snapshot.after_submit(&result));

            if refetch {
                state_clone.refresh().await;
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white rounded-xl p-6 w-full max-w-md mx-4 shadow-lg">
                <div class="flex items-start justify-between mb-4">
                    <div>
                        <h2 class="text-xl font-semibold">"Ajouter un nouveau Rotarien"</h2>
                        <p class="text-sm text-gray-500 mt-1">
                            "Enregistrez un nouveau Rotarien avec son objectif de collecte."
                        </p>
                    </div>
                    <button
                        on:click=move |_| on_close_for_x()
                        class="text-gray-400 hover:text-gray-700"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-700 mb-1">"Nom complet *"</label>
                        <input
                            type="text"
                            required
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            class="w-full border border-gray-300 rounded-lg px-3 py-2
                                   focus:border-blue-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-700 mb-1">"Email"</label>
                        <input
                            type="email"
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                            class="w-full border border-gray-300 rounded-lg px-3 py-2
                                   focus:border-blue-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-700 mb-1">"Objectif (F CFA)"</label>
                        <input
                            type="number"
                            prop:value=move || draft.with(|d| d.target_amount.clone())
                            on:input=move |ev| draft.update(|d| d.target_amount = event_target_value(&ev))
                            class="w-full border border-gray-300 rounded-lg px-3 py-2
                                   focus:border-blue-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400
                               text-white rounded-lg py-2.5 font-medium transition-colors
                               flex items-center justify-center gap-2"
                    >
                        {move || if submitting.get() {
                            view! {
                                <InlineLoading />
                                <span>"Envoi..."</span>
                            }.into_view()
                        } else {
                            view! {
                                <span>"Ajouter le Rotarien"</span>
                            }.into_view()
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> RotarianDraft {
        RotarianDraft {
            name: "Jean Dupont".to_string(),
            email: "jean@example.org".to_string(),
            target_amount: "750000".to_string(),
        }
    }

    #[test]
    fn test_initial_draft_has_default_target() {
        let draft = RotarianDraft::initial();
        assert_eq!(draft.name, "");
        assert_eq!(draft.email, "");
        assert_eq!(draft.target_amount, "500000");
        assert_eq!(draft.target_amount.parse::<f64>().unwrap(), 500000.0);
    }

    #[test]
    fn test_draft_resets_to_default_target_after_successful_submit() {
        let after = filled_draft().after_submit(&Ok(()));
        assert_eq!(after, RotarianDraft::initial());
        assert_eq!(after.target_amount, DEFAULT_TARGET);
    }

    #[test]
    fn test_draft_retained_after_failed_submit() {
        let after = filled_draft().after_submit(&Err("Network error".to_string()));
        assert_eq!(after, filled_draft());
    }
}
