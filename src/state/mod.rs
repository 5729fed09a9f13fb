//! State Management
//!
//! Global dashboard state shared through the Leptos context.

pub mod global;

pub use global::{provide_dashboard_state, DashboardState, Donation, Rotarian, Stats};
