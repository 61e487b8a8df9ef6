//! Dashboard Page
//!
//! Summary cards, the region map and the drill-down panel.

mod affected_list;
mod controller;
mod region_map;
mod region_panel;
mod summary_cards;

use dq_view_model::AppConfig;
use leptos::prelude::*;

use affected_list::AffectedList;
pub use controller::DashboardController;
use region_panel::RegionPanel;
use summary_cards::SummaryCards;

#[component]
pub fn DashboardPage(config: AppConfig) -> impl IntoView {
    let ctrl = DashboardController::new(config);
    provide_context(ctrl);

    let map_ref = NodeRef::<leptos::html::Div>::new();

    // Initial load
    Effect::new(move |_| {
        ctrl.refresh();
    });

    // Map needs its container in the DOM
    Effect::new(move |_| {
        if let Some(container) = map_ref.get() {
            ctrl.mount_map(&container);
        }
    });

    let isolated = move || ctrl.selection.with(|g| g.is_isolated());

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>"Data Quality Dashboard"</h1>
                <button id="refreshBtn" class="refresh-btn" on:click=move |_| ctrl.refresh()>
                    "Refresh"
                </button>
            </header>

            <SummaryCards />

            <div class="dashboard-main">
                <section class="map-section">
                    <button
                        id="backToIndiaBtn"
                        class="back-btn"
                        style:display=move || if isolated() { "block" } else { "none" }
                        on:click=move |_| ctrl.reset_view()
                    >
                        "← Back to India"
                    </button>
                    <div id="indiaMap" class="india-map" node_ref=map_ref></div>
                    <div class="map-legend">
                        <span class="legend-item high">"High"</span>
                        <span class="legend-item medium">"Medium"</span>
                        <span class="legend-item low">"Low"</span>
                        <span class="legend-item unmatched">"No data"</span>
                    </div>
                </section>

                <RegionPanel />
            </div>

            <AffectedList />
        </div>
    }
}
