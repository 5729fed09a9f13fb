//! Donation Form Component
//!
//! Modal dialog for recording a new donation.

use leptos::*;

use crate::api;
use crate::components::loading::InlineLoading;
use crate::state::global::DashboardState;

/// Draft state of the donation form. Amount stays a string because it mirrors
/// the HTML number input; it is parsed at submit time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DonationDraft {
    pub donor_name: String,
    pub donor_email: String,
    pub amount: String,
    pub rotarian_name: String,
    pub notes: String,
}

impl DonationDraft {
    /// Initial draft: every field empty
    pub fn initial() -> Self {
        Self::default()
    }

    /// Draft state after a submission settles: success clears the form,
    /// failure keeps the user's input for retry.
    pub fn after_submit(self, result: &Result<(), String>) -> Self {
        if result.is_ok() {
            Self::initial()
        } else {
            self
        }
    }
}

/// Modal form for adding a donation.
///
/// On a successful POST the draft resets and the whole dashboard refetches.
/// On failure the error is logged to the console and the draft stays
/// populated so the user can resubmit.
#[component]
pub fn DonationFormModal(on_close: impl Fn() + 'static + Clone) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let rotarians_signal = state.rotarians;

    let draft = create_rw_signal(DonationDraft::initial());
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_x = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let snapshot = draft.get_untracked();
        let amount_value = snapshot.amount.parse::<f64>().unwrap_or(0.0);

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            let result = api::create_donation(
                &snapshot.donor_name,
                &snapshot.donor_email,
                amount_value,
                &snapshot.rotarian_name,
                &snapshot.notes,
            )
            .await;

            if let Err(e) = &result {
                // Silent failure: the draft stays populated for retry
                web_sys::console::error_1(
                    &format!("Erreur lors de l'ajout du don: {}", e).into(),
                );
            }

            let refetch = result.is_ok();
            draft.set(snapshot.after_submit(&result));

            if refetch {
                // Reload everything from the backend
                state_clone.refresh().await;
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white rounded-xl p-6 w-full max-w-lg mx-4 shadow-lg">
                <div class="flex items-start justify-between mb-4">
                    <div>
                        <h2 class="text-xl font-semibold">"Ajouter un nouveau don"</h2>
                        <p class="text-sm text-gray-500 mt-1">
                            "Enregistrez un nouveau don collecté par un Rotarien."
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
                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-gray-700 mb-1">"Nom du donateur *"</label>
                            <input
                                type="text"
                                required
                                prop:value=move || draft.with(|d| d.donor_name.clone())
                                on:input=move |ev| draft.update(|d| d.donor_name = event_target_value(&ev))
                                class="w-full border border-gray-300 rounded-lg px-3 py-2
                                       focus:border-blue-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-700 mb-1">"Email du donateur"</label>
                            <input
                                type="email"
                                prop:value=move || draft.with(|d| d.donor_email.clone())
                                on:input=move |ev| draft.update(|d| d.donor_email = event_target_value(&ev))
                                class="w-full border border-gray-300 rounded-lg px-3 py-2
                                       focus:border-blue-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-gray-700 mb-1">"Montant (F CFA) *"</label>
                            <input
                                type="number"
                                required
                                prop:value=move || draft.with(|d| d.amount.clone())
                                on:input=move |ev| draft.update(|d| d.amount = event_target_value(&ev))
                                class="w-full border border-gray-300 rounded-lg px-3 py-2
                                       focus:border-blue-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-700 mb-1">"Rotarien collecteur *"</label>
                            // The selector is populated from the current Rotarian
                            // list; the backend references Rotarians by name
                            <select
                                required
                                prop:value=move || draft.with(|d| d.rotarian_name.clone())
                                on:change=move |ev| draft.update(|d| d.rotarian_name = event_target_value(&ev))
                                class="w-full border border-gray-300 rounded-lg px-3 py-2 bg-white
                                       focus:border-blue-500 focus:outline-none"
                            >
                                <option value="">"Sélectionner un Rotarien"</option>
                                {move || {
                                    rotarians_signal.get()
                                        .into_iter()
                                        .map(|r| view! {
                                            <option value=r.name.clone()>{r.name}</option>
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm text-gray-700 mb-1">"Notes"</label>
                        <textarea
                            rows="3"
                            prop:value=move || draft.with(|d| d.notes.clone())
                            on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
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
                                <span>"Ajouter le don"</span>
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

    fn filled_draft() -> DonationDraft {
        DonationDraft {
            donor_name: "Awa Ndiaye".to_string(),
            donor_email: "awa@example.org".to_string(),
            amount: "15000".to_string(),
            rotarian_name: "Jean Dupont".to_string(),
            notes: "Promesse tenue".to_string(),
        }
    }

    #[test]
    fn test_initial_draft_is_empty() {
        let draft = DonationDraft::initial();
        assert_eq!(draft.donor_name, "");
        assert_eq!(draft.donor_email, "");
        assert_eq!(draft.amount, "");
        assert_eq!(draft.rotarian_name, "");
        assert_eq!(draft.notes, "");
    }

    #[test]
    fn test_draft_clears_after_successful_submit() {
        let after = filled_draft().after_submit(&Ok(()));
        assert_eq!(after, DonationDraft::initial());
    }

    #[test]
    fn test_draft_retained_after_failed_submit() {
        let after = filled_draft().after_submit(&Err("HTTP 500".to_string()));
        assert_eq!(after, filled_draft());
    }
}
