//! Summary Cards
//!
//! Headline numbers and the fix-progress bar.

use dq_view_model::format::{fix_rate, format_number, format_percent};
use dq_view_model::DashboardSummary;
use leptos::prelude::*;

use super::DashboardController;

#[component]
fn StatCard(
    #[prop(into)] id: String,
    label: &'static str,
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="summary-card">
            <span class="summary-label">{label}</span>
            <span class="summary-value" id=id>{move || value.get()}</span>
        </div>
    }
}

#[component]
pub fn SummaryCards() -> impl IntoView {
    let ctrl = use_context::<DashboardController>().expect("DashboardController should be provided");
    let summary = ctrl.summary;

    let count = move |pick: fn(&DashboardSummary) -> Option<f64>| {
        Signal::derive(move || format_number(summary.with(|s| s.as_ref().and_then(pick))))
    };
    let rate = Signal::derive(move || format_percent(summary.with(|s| s.as_ref().and_then(|s| s.anomaly_rate))));
    let progress = move || {
        summary.with(|s| match s {
            Some(s) => fix_rate(s.verified_fixed, s.total_anomalies),
            None => 0.0,
        })
    };

    view! {
        <section class="summary-cards">
            <StatCard id="totalRecords" label="Total Records" value=count(|s| s.total_records) />
            <StatCard id="totalAnomalies" label="Total Anomalies" value=count(|s| s.total_anomalies) />
            <StatCard id="anomalyRate" label="Anomaly Rate" value=rate />
            <StatCard id="verifiedFixed" label="Verified Fixed" value=count(|s| s.verified_fixed) />
            <StatCard id="pendingVerification" label="Pending Verification" value=count(|s| s.pending_verification) />
            <div class="fix-progress-track">
                <div id="fixProgress" class="fix-progress" style:width=move || format!("{}%", progress())></div>
            </div>
            <p class="last-updated">
                "Last updated: "
                <span id="lastUpdated">{move || ctrl.last_updated.get().unwrap_or_else(|| "--".to_string())}</span>
            </p>
        </section>
    }
}
