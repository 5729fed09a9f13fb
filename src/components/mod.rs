//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod charts;
pub mod donation_form;
pub mod loading;
pub mod progress_bar;
pub mod rotarian_form;
pub mod stat_card;
pub mod status_badge;

pub use charts::{DonutChart, RotarianBarChart};
pub use donation_form::DonationFormModal;
pub use loading::Loading;
pub use progress_bar::ProgressBar;
pub use rotarian_form::RotarianFormModal;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
