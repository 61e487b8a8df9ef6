//! Task Filters
//!
//! Status button group (one active) and priority dropdown. Both filter the
//! loaded list locally.

use dq_view_model::{Priority, TaskStatus};
use leptos::prelude::*;

use super::TaskBoardController;

#[component]
pub fn TaskFilters() -> impl IntoView {
    let ctrl = use_context::<TaskBoardController>().expect("TaskBoardController should be provided");
    let active_status = move || ctrl.filter().status;

    let status_options: Vec<(Option<TaskStatus>, &'static str)> = std::iter::once((None, "All"))
        .chain(TaskStatus::ALL.iter().map(|s| (Some(*s), s.title())))
        .collect();

    view! {
        <div class="task-filters">
            <div id="statusFilter" class="filter-group">
                {status_options.into_iter().map(|(value, label)| {
                    view! {
                        <button
                            type="button"
                            class=move || if active_status() == value { "filter-btn active" } else { "filter-btn" }
                            data-status=value.map(|s| s.as_str()).unwrap_or_default()
                            on:click=move |_| ctrl.set_status_filter(value)
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
            <select
                id="priorityFilter"
                class="filter-select"
                on:change=move |ev| ctrl.set_priority_filter(Priority::parse(&event_target_value(&ev)))
            >
                <option value="">"All Priorities"</option>
                {Priority::ALL.iter().map(|p| view! {
                    <option value=p.as_str()>{p.label()}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
