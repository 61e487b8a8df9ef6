//! Task Card Component
//!
//! One task: done checkbox, title, badges, tags and an edit button.
//! Handlers close over the task id.

use dq_view_model::{Task, TaskStatus};
use leptos::prelude::*;

use super::TaskBoardController;

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let ctrl = use_context::<TaskBoardController>().expect("TaskBoardController should be provided");
    let task = StoredValue::new(task);

    let status = move || task.with_value(|t| ctrl.display_status(t));
    let updating = move || task.with_value(|t| ctrl.is_updating(&t.id));
    let card_class = move || {
        let mut class = format!("task-card {}", status().as_str());
        if updating() {
            class.push_str(" status-updating");
        }
        class
    };

    let on_toggle = move |ev: web_sys::Event| {
        let id = task.with_value(|t| t.id.clone());
        ctrl.toggle_status(id, event_target_checked(&ev));
    };
    let on_edit = move |_: web_sys::MouseEvent| {
        let id = task.with_value(|t| t.id.clone());
        ctrl.open_modal(Some(id));
    };

    let (title, priority, description, region, anomaly, assignee) = task.with_value(|t| {
        (
            t.title.clone(),
            t.priority,
            t.description_text().map(str::to_string),
            t.region_tag().map(str::to_string),
            t.anomaly_tag().map(str::to_string),
            t.assignee().map(str::to_string),
        )
    });

    view! {
        <div class=card_class>
            <div class="task-checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || status() == TaskStatus::Done
                    on:change=on_toggle
                />
            </div>
            <div class="task-content">
                <div class="task-header">
                    <h3 class="task-title">{title}</h3>
                    <span class=format!("priority-badge {}", priority.as_str())>{priority.as_str()}</span>
                </div>
                {description.map(|d| view! { <p class="task-description">{d}</p> })}
                <div class="task-meta">
                    <span class=move || format!("status-badge {}", status().as_str())>
                        {move || status().label()}
                    </span>
                    {region.map(|r| view! { <span>"📍 " {r}</span> })}
                    {anomaly.map(|a| view! { <span>"🏷️ " {a}</span> })}
                    {assignee.map(|a| view! { <span>"👤 " {a}</span> })}
                </div>
            </div>
            <div class="task-actions">
                <button class="action-btn" title="Edit" on:click=on_edit>
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <path d="M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"/>
                        <path d="M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"/>
                    </svg>
                </button>
            </div>
        </div>
    }
}
