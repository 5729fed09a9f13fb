//! Status Badge Component
//!
//! Maps a donation status to a colored pill.

use leptos::*;

use crate::format::{self, BadgeVariant};

/// Donation status badge. Unknown or missing statuses render as pending.
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let badge = format::status_badge(&status);

    let color = match badge.variant {
        BadgeVariant::Default => "bg-green-600 text-white",
        BadgeVariant::Secondary => "bg-gray-200 text-gray-700",
        BadgeVariant::Destructive => "bg-red-600 text-white",
    };

    view! {
        <span class=format!("px-2 py-0.5 rounded-full text-xs font-medium {}", color)>
            {badge.label}
        </span>
    }
}
