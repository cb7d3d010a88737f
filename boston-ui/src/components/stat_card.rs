//! Stat Card Component
//!
//! Summary count cards for the home page and status badges for matches.

use leptos::*;

/// A single summary count card
#[component]
pub fn StatCard(
    /// Label under the number
    label: &'static str,
    /// Emoji shown above the number
    icon: &'static str,
    /// The count to display
    #[prop(into)]
    value: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 text-center">
            <div class="text-3xl mb-2">{icon}</div>
            <div class="text-3xl font-bold">{move || value.get()}</div>
            <div class="text-gray-400 text-sm mt-1">{label}</div>
        </div>
    }
}

/// Colored badge for a match status
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: String,
) -> impl IntoView {
    let color = match status.as_str() {
        "scheduled" => "bg-blue-600",
        "live" => "bg-red-600 animate-pulse",
        "finished" => "bg-green-600",
        "cancelled" => "bg-gray-600",
        _ => "bg-gray-600",
    };

    let label = crate::state::global::status_label(&status);

    view! {
        <span class=format!("{} text-xs px-2 py-0.5 rounded-full text-white", color)>
            {label}
        </span>
    }
}
