//! Global Application State
//!
//! Reactive state management using Leptos signals. The backend is the sole
//! source of truth; `refresh` replaces all three slices atomically so the
//! view never mixes stats from one load with donations from another.

use leptos::*;

use crate::api;

/// Global dashboard state provided to all components
#[derive(Clone)]
pub struct DashboardState {
    /// Aggregate campaign statistics
    pub stats: RwSignal<Stats>,
    /// All recorded donations
    pub donations: RwSignal<Vec<Donation>>,
    /// All registered Rotarians
    pub rotarians: RwSignal<Vec<Rotarian>>,
    /// True until the first load settles; refreshes after mutations never
    /// re-show the full-page spinner
    pub loading: RwSignal<bool>,
}

/// Aggregate campaign snapshot from the API.
///
/// Every field defaults to zero so a sparse or empty payload still renders.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Stats {
    #[serde(default)]
    pub total_donations: f64,
    #[serde(default)]
    pub total_target: f64,
    #[serde(default)]
    pub total_donors: u32,
    #[serde(default)]
    pub total_rotarians: u32,
    #[serde(default)]
    pub progress_percentage: f64,
}

/// A single donation record
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Donation {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub donor_name: String,
    #[serde(default)]
    pub donor_email: Option<String>,
    #[serde(default)]
    pub amount: f64,
    /// References the collecting Rotarian by name, not id. The backend
    /// contract is name-based; the selector in the donation form is the only
    /// referential-integrity check.
    #[serde(default)]
    pub rotarian_name: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// "pending" | "confirmed" | "cancelled"; anything else renders as pending
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date_created: String,
}

/// A Rotarian (volunteer collector) with an individual target
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Rotarian {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub progress_percentage: f64,
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() {
    let state = DashboardState {
        stats: create_rw_signal(Stats::default()),
        donations: create_rw_signal(Vec::new()),
        rotarians: create_rw_signal(Vec::new()),
        loading: create_rw_signal(true),
    };

    provide_context(state);
}

impl DashboardState {
    /// Reload all three slices from the backend.
    ///
    /// The three GETs run concurrently and all must settle before state is
    /// touched. If any of them fails, the previously loaded data stays in
    /// place and a single combined error goes to the console; there is no
    /// per-endpoint failure distinction and no retry.
    pub async fn refresh(&self) {
        let (stats, donations, rotarians) = futures_util::join!(
            api::fetch_stats(),
            api::fetch_donations(),
            api::fetch_rotarians()
        );

        match (stats, donations, rotarians) {
            (Ok(stats), Ok(donations), Ok(rotarians)) => {
                self.stats.set(stats);
                self.donations.set(donations);
                self.rotarians.set(rotarians);
            }
            (stats, donations, rotarians) => {
                let cause = [stats.err(), donations.err(), rotarians.err()]
                    .into_iter()
                    .flatten()
                    .next()
                    .unwrap_or_default();
                web_sys::console::error_1(
                    &format!("Erreur lors du chargement des données: {}", cause).into(),
                );
            }
        }

        // First settle clears the full-page spinner; later refreshes are no-ops here
        self.loading.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_decode_empty_payload() {
        let stats: Stats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats.total_donations, 0.0);
        assert_eq!(stats.total_target, 0.0);
        assert_eq!(stats.total_donors, 0);
        assert_eq!(stats.total_rotarians, 0);
        assert_eq!(stats.progress_percentage, 0.0);
    }

    #[test]
    fn test_stats_decode_full_payload() {
        let stats: Stats = serde_json::from_str(
            r#"{
                "total_donations": 250000,
                "total_target": 500000,
                "total_donors": 3,
                "total_rotarians": 2,
                "progress_percentage": 50
            }"#,
        )
        .unwrap();
        assert_eq!(stats.total_donations, 250000.0);
        assert_eq!(stats.total_target, 500000.0);
        assert_eq!(stats.total_donors, 3);
        assert_eq!(stats.total_rotarians, 2);
        assert_eq!(stats.progress_percentage, 50.0);
    }

    #[test]
    fn test_donation_decode_missing_optionals() {
        let donation: Donation = serde_json::from_str(
            r#"{"id": 7, "donor_name": "Awa Ndiaye", "amount": 15000, "rotarian_name": "Jean Dupont"}"#,
        )
        .unwrap();
        assert_eq!(donation.id, 7);
        assert_eq!(donation.donor_email, None);
        assert_eq!(donation.notes, None);
        // Absent status renders through the pending fallback
        assert_eq!(donation.status, "");
        assert_eq!(donation.date_created, "");
    }

    #[test]
    fn test_rotarian_decode() {
        let rotarian: Rotarian = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Jean Dupont",
                "email": "jean@example.org",
                "target_amount": 500000,
                "current_amount": 120000,
                "progress_percentage": 24
            }"#,
        )
        .unwrap();
        assert_eq!(rotarian.name, "Jean Dupont");
        assert_eq!(rotarian.email.as_deref(), Some("jean@example.org"));
        assert_eq!(rotarian.current_amount, 120000.0);
    }
}
