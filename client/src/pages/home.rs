//! Home page: life-area link grid plus the assistant widgets.

use leptos::prelude::*;

use crate::components::dashboard_card::DashboardCard;
use crate::components::vision_chat::VisionChat;
use crate::components::workflow_widget::WorkflowWidget;
use crate::state::dashboard::{DASHBOARD_LINKS, DASHBOARD_WORKFLOWS};

/// Landing route.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1 class="home-page__title">"Welcome to J.A.R.V.I.S"</h1>
                <p class="home-page__subtitle">"Your Personal Life Assistant"</p>
            </header>

            <main class="home-page__main">
                <div class="home-page__grid">
                    {DASHBOARD_LINKS.iter().map(|link| view! { <DashboardCard link=*link/> }).collect::<Vec<_>>()}
                </div>

                <section class="home-page__assistant">
                    <VisionChat/>
                    <div class="home-page__workflows">
                        {DASHBOARD_WORKFLOWS
                            .iter()
                            .map(|card| {
                                view! {
                                    <WorkflowWidget
                                        workflow_id=card.workflow_id
                                        title=card.title
                                        description=card.description
                                    />
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </main>
        </div>
    }
}
