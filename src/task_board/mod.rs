//! Task Board Page
//!
//! Remediation task list with local filters, a create/edit modal and
//! optimistic status toggling.

mod controller;
mod task_card;
mod task_filters;
mod task_modal;

use dq_view_model::AppConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub use controller::TaskBoardController;
use controller::TaskBoardStateStoreFields;
use task_card::TaskCard;
use task_filters::TaskFilters;
use task_modal::TaskModal;

#[component]
pub fn TaskBoardPage(config: AppConfig) -> impl IntoView {
    let ctrl = TaskBoardController::new(config.endpoints(), config.reconcile_delay_ms);
    provide_context(ctrl);

    // Initial load, then restore a form passed in the URL
    Effect::new(move |_| {
        spawn_local(async move {
            ctrl.reload(None).await;
            ctrl.apply_url_prefill();
        });
    });

    let visible = Memo::new(move |_| ctrl.visible_tasks());
    let stats = Memo::new(move |_| ctrl.stats());
    let loading = move || ctrl.store.loading().get();

    view! {
        <div class="todo-page">
            <header class="todo-header">
                <h1>"Remediation Tasks"</h1>
                <button id="addTaskBtn" class="primary-btn" on:click=move |_| ctrl.open_modal(None)>
                    "+ Add Task"
                </button>
            </header>

            <section class="task-stats">
                <div class="task-stat"><span id="totalTasks">{move || stats.get().total}</span>" Total"</div>
                <div class="task-stat"><span id="pendingTasks">{move || stats.get().pending}</span>" Pending"</div>
                <div class="task-stat"><span id="inProgressTasks">{move || stats.get().in_progress}</span>" In Progress"</div>
                <div class="task-stat"><span id="doneTasks">{move || stats.get().done}</span>" Done"</div>
            </section>

            <TaskFilters />

            <div id="loadingState" class="loading-state" style:display=move || if loading() { "flex" } else { "none" }>
                "Loading tasks..."
            </div>

            <div
                id="emptyState"
                class="empty-state"
                style:display=move || if !loading() && visible.with(Vec::is_empty) { "flex" } else { "none" }
            >
                <p>"No tasks found"</p>
                <button id="emptyAddBtn" class="primary-btn" on:click=move |_| ctrl.open_modal(None)>
                    "Create a task"
                </button>
            </div>

            <div id="taskList" class="task-list">
                {move || visible.get().into_iter().map(|task| view! { <TaskCard task=task /> }).collect_view()}
            </div>

            <TaskModal />
        </div>
    }
}
