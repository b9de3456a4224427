//! Link card for one life area on the home grid.

use leptos::prelude::*;

use crate::state::dashboard::DashboardLink;

/// A clickable card: icon on the left, title and description on the right.
#[component]
pub fn DashboardCard(link: DashboardLink) -> impl IntoView {
    view! {
        <a class="dashboard-card" href=link.href>
            <span class="dashboard-card__icon" aria-hidden="true">{link.icon}</span>
            <span class="dashboard-card__body">
                <h2 class="dashboard-card__title">{link.title}</h2>
                <p class="dashboard-card__description">{link.description}</p>
            </span>
        </a>
    }
}
