//! Most Affected Regions
//!
//! Ranked list in backend order; clicking an entry selects the region.

use dq_view_model::format::format_number;
use leptos::prelude::*;

use super::DashboardController;

#[component]
pub fn AffectedList() -> impl IntoView {
    let ctrl = use_context::<DashboardController>().expect("DashboardController should be provided");

    let entries = move || {
        ctrl.summary
            .with(|s| s.as_ref().map(|s| s.most_affected_states.clone()))
            .unwrap_or_default()
    };

    view! {
        <section class="affected-states" id="affectedStates">
            <h3>"Most Affected States"</h3>
            {move || entries().into_iter().enumerate().map(|(i, region)| {
                let name = region.state.clone();
                view! {
                    <div class="affected-state-card" on:click=move |_| ctrl.select_region(name.clone())>
                        <div class="state-rank">{i + 1}</div>
                        <div class="state-info">
                            <div class="state-name">{region.state.clone()}</div>
                            <div class="state-anomaly-count">
                                {format!("{} anomalies", format_number(region.anomaly_count))}
                            </div>
                        </div>
                    </div>
                }
            }).collect_view()}
        </section>
    }
}
