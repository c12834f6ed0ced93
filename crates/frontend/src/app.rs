use crate::dashboards::SalesOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-main">
            <SalesOverviewDashboard />
        </main>
    }
}
