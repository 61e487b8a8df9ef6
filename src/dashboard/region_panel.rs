//! Region Drill-down Panel
//!
//! Placeholder until a region is selected, then its statistics and the
//! district bar chart.

use dq_view_model::chart::district_chart_config;
use dq_view_model::format::{format_fraction, format_number, format_percent};
use dq_view_model::RegionDetail;
use leptos::prelude::*;

use super::DashboardController;
use crate::api::js_error;
use crate::bindings::chart::Chart;
use crate::bindings::to_js;

const PLACEHOLDER: &str = "Click a state to view details";

#[component]
pub fn RegionPanel() -> impl IntoView {
    let ctrl = use_context::<DashboardController>().expect("DashboardController should be provided");
    let detail = ctrl.detail;

    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let chart = StoredValue::new_local(None::<Chart>);

    // Rebuild the chart whenever the detail changes; the old one is destroyed first
    Effect::new(move |_| {
        let districts = detail.with(|d| d.as_ref().map(|d| d.district_distribution.clone()));
        let Some(canvas) = canvas_ref.get() else { return };
        chart.update_value(|c| {
            if let Some(old) = c.take() {
                old.destroy();
            }
        });
        let Some(districts) = districts else { return };
        match Chart::new(&canvas, &to_js(&district_chart_config(&districts))) {
            Ok(created) => chart.set_value(Some(created)),
            Err(e) => log::error!("Error creating district chart: {}", js_error(&e)),
        }
    });

    let has_detail = move || detail.with(Option::is_some);
    let field = move |pick: fn(&RegionDetail) -> String| {
        move || detail.with(|d| d.as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <aside class="state-panel">
            <div class="panel-header">
                <h2 id="stateName">
                    {move || detail.with(|d| d.as_ref().map(|d| d.state.clone())).unwrap_or_else(|| PLACEHOLDER.to_string())}
                </h2>
                <button
                    id="closePanelBtn"
                    class="close-btn"
                    style:display=move || if has_detail() { "block" } else { "none" }
                    on:click=move |_| ctrl.hide_panel()
                >
                    "×"
                </button>
            </div>

            <div id="panelContent" style:display=move || if has_detail() { "none" } else { "block" }>
                <p class="panel-placeholder">"Select a state on the map to see its anomaly breakdown."</p>
            </div>

            <div id="stateStats" style:display=move || if has_detail() { "block" } else { "none" }>
                <div class="state-stats-grid">
                    <div class="stat"><span class="stat-label">"Records"</span>
                        <span id="stateRecords">{field(|d| format_number(d.total_records))}</span></div>
                    <div class="stat"><span class="stat-label">"Anomalies"</span>
                        <span id="stateAnomalies">{field(|d| format_number(d.total_anomalies))}</span></div>
                    <div class="stat"><span class="stat-label">"Anomaly Rate"</span>
                        <span id="stateAnomalyRate">{field(|d| format_percent(d.anomaly_rate))}</span></div>
                    <div class="stat"><span class="stat-label">"Invalid PIN"</span>
                        <span id="stateInvalidPin">{field(|d| format_fraction(d.invalid_pin_rate))}</span></div>
                    <div class="stat"><span class="stat-label">"Duplicates"</span>
                        <span id="stateDuplicate">{field(|d| format_fraction(d.duplicate_rate))}</span></div>
                </div>

                <h3>"Top Anomaly Types"</h3>
                <div id="anomalyList" class="anomaly-list">
                    {move || detail.with(|d| d.as_ref().map(|d| d.top_anomaly_types.clone())).unwrap_or_default()
                        .into_iter()
                        .map(|a| view! {
                            <div class="anomaly-item">
                                <span class="anomaly-type">{a.kind}</span>
                                <span class="anomaly-count">{format_number(a.count)}</span>
                            </div>
                        })
                        .collect_view()}
                </div>

                <h3>"Records by District"</h3>
                <div class="chart-container">
                    <canvas id="districtChart" node_ref=canvas_ref></canvas>
                </div>
            </div>
        </aside>
    }
}
