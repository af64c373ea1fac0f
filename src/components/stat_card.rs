//! Dashboard stat card.

use leptos::prelude::*;

/// One headline metric with an icon and a footnote.
#[component]
pub fn StatCard(
    title: &'static str,
    value: String,
    note: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__header">
                <span class="stat-card__title">{title}</span>
                <span class="stat-card__icon">{icon}</span>
            </div>
            <div class="stat-card__value">{value}</div>
            <p class="stat-card__note">{note}</p>
        </div>
    }
}
