//! Progress Bar Component

use leptos::*;

/// Horizontal progress bar. Values outside 0-100 are clamped for display
/// only; the underlying percentage is still shown by the caller's caption.
#[component]
pub fn ProgressBar(
    /// Percentage value, 0-100
    #[prop(into)]
    value: Signal<f64>,
    /// Tailwind height class
    #[prop(default = "h-3")]
    height: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("w-full bg-gray-200 rounded-full overflow-hidden {}", height)>
            <div
                class="bg-blue-600 h-full rounded-full transition-all duration-300"
                style=move || format!("width: {}%", value.get().clamp(0.0, 100.0))
            />
        </div>
    }
}
